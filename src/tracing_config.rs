//! Tracing configuration for inspecting symbol resolution.
//!
//! Supports three output formats controlled by `SHAPEGEN_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`
//! - `json`: one JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Reachability summary and per-component marks
//! SHAPEGEN_LOG=shapegen_symbols=trace SHAPEGEN_LOG_FORMAT=tree shapegen --model model.json --service ns#Svc
//!
//! # JSON, for tooling
//! SHAPEGEN_LOG=debug SHAPEGEN_LOG_FORMAT=json shapegen --model model.json --service ns#Svc
//! ```
//!
//! The subscriber is only initialised when `SHAPEGEN_LOG` (or `RUST_LOG`) is
//! set. Colors follow the table: `--no-color`, a non-terminal stderr or a set
//! `NO_COLOR` turn them off.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "SHAPEGEN_LOG";
const FALLBACK_LOG_VAR: &str = "RUST_LOG";
const FORMAT_VAR: &str = "SHAPEGEN_LOG_FORMAT";
const NO_COLOR_VAR: &str = "NO_COLOR";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; anything unrecognised is [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Resolved subscriber configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSettings {
    /// `EnvFilter` directives.
    pub directives: String,
    pub format: LogFormat,
    /// Emit ANSI escapes in `text` and `tree` output.
    pub ansi: bool,
}

impl TracingSettings {
    /// Combine the logging variables with the caller's color decision.
    ///
    /// `None` when no filter is set. `SHAPEGEN_LOG` takes precedence over
    /// `RUST_LOG`, and a set `NO_COLOR` turns ANSI off regardless of `color`.
    pub fn resolve(
        shapegen_log: Option<String>,
        rust_log: Option<String>,
        format: Option<&str>,
        no_color: bool,
        color: bool,
    ) -> Option<Self> {
        let directives = shapegen_log.or(rust_log)?;
        Some(Self {
            directives,
            format: LogFormat::parse(format.unwrap_or_default()),
            ansi: color && !no_color,
        })
    }

    /// Read the logging variables from the environment.
    pub fn from_env(color: bool) -> Option<Self> {
        let format = std::env::var(FORMAT_VAR).ok();
        Self::resolve(
            std::env::var(LOG_VAR).ok(),
            std::env::var(FALLBACK_LOG_VAR).ok(),
            format.as_deref(),
            std::env::var_os(NO_COLOR_VAR).is_some_and(|v| !v.is_empty()),
            color,
        )
    }

    /// Install the global subscriber. All output goes to stderr so it never
    /// mixes with the symbol table on stdout.
    pub fn init(self) {
        let filter = EnvFilter::builder().parse_lossy(&self.directives);
        match self.format {
            LogFormat::Tree => {
                let tree_layer = tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_targets(true)
                    .with_ansi(self.ansi);

                Registry::default().with(filter).with(tree_layer).init();
            }
            LogFormat::Json => {
                let json_layer = fmt::layer().json().with_writer(std::io::stderr);

                Registry::default().with(filter).with(json_layer).init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(self.ansi)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `SHAPEGEN_LOG` nor `RUST_LOG` is set. `color`
/// is the CLI's decision for stderr (`--no-color`, terminal detection).
pub fn init_tracing(color: bool) {
    if let Some(settings) = TracingSettings::from_env(color) {
        settings.init();
    }
}

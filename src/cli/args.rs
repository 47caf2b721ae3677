use clap::{Parser, ValueEnum};
use shapegen_symbols::ReachabilityStrategy;
use std::path::PathBuf;

/// CLI arguments for the shapegen binary.
#[derive(Parser, Debug)]
#[command(
    name = "shapegen",
    version,
    about = "Print the server symbol table of a Smithy model"
)]
pub struct CliArgs {
    /// Smithy JSON AST model file.
    #[arg(short = 'm', long)]
    pub model: PathBuf,

    /// Server codegen plugin settings (JSON object with `service`, `module`, ...).
    #[arg(short = 's', long)]
    pub settings: Option<PathBuf>,

    /// Service shape id to generate, e.g. `com.example#Weather`. Overrides the
    /// service named in the settings.
    #[arg(long)]
    pub service: Option<String>,

    /// Only list shapes with an unconstrained representation.
    #[arg(short = 'u', long = "unconstrained-only")]
    pub unconstrained_only: bool,

    /// Output format.
    #[arg(short = 'f', long, value_enum, ignore_case = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Reachability algorithm. Overrides `codegen.reachability` in the settings.
    #[arg(long, value_enum, ignore_case = true)]
    pub strategy: Option<Strategy>,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Strategy {
    Condensation,
    Fixpoint,
}

impl From<Strategy> for ReachabilityStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Condensation => Self::Condensation,
            Strategy::Fixpoint => Self::Fixpoint,
        }
    }
}

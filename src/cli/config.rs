//! Loading the model and settings named on the command line.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use shapegen_common::to_snake_case;
use shapegen_model::{Model, ShapeId};
use shapegen_symbols::ServerRustSettings;
use std::path::Path;
use tracing::debug;

use super::args::CliArgs;

pub fn load_model(path: &Path) -> Result<Model> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model {}", path.display()))?;
    let model = Model::from_json_str(&text)
        .with_context(|| format!("failed to load model {}", path.display()))?;
    debug!(path = %path.display(), shapes = model.len(), "loaded model");
    Ok(model)
}

pub fn load_settings(path: &Path) -> Result<ServerRustSettings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("settings {} are not valid JSON", path.display()))?;
    ServerRustSettings::from_json_value(value)
        .with_context(|| format!("invalid settings in {}", path.display()))
}

/// Settings for this run: the settings file if given, else defaults derived
/// from `--service`, with command line overrides applied on top.
pub fn resolve_settings(args: &CliArgs) -> Result<ServerRustSettings> {
    let service = args
        .service
        .as_deref()
        .map(|id| {
            id.parse::<ShapeId>()
                .with_context(|| format!("invalid --service '{id}'"))
        })
        .transpose()?;

    let mut settings = match (&args.settings, service) {
        (Some(path), service) => {
            let mut settings = load_settings(path)?;
            if let Some(service) = service {
                settings.service = service;
            }
            settings
        }
        (None, Some(service)) => {
            let module = to_snake_case(service.name());
            ServerRustSettings::for_service(service, module)
        }
        (None, None) => bail!("either --service or --settings must name the service"),
    };

    if let Some(strategy) = args.strategy {
        settings.codegen_config.reachability = strategy.into();
    }
    Ok(settings)
}

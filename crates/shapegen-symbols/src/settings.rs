//! Server code generation settings.
//!
//! Read from the plugin object of a `smithy-build.json` projection:
//!
//! ```json
//! {
//!     "service": "test#TestService",
//!     "module": "test_service",
//!     "moduleVersion": "1.0.0",
//!     "runtimeConfig": { "cratePrefix": "aws", "relativePath": "../rust-runtime" },
//!     "codegen": { "debugMode": true, "reachability": "fixpoint" }
//! }
//! ```

use crate::reachability::ReachabilityStrategy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shapegen_model::ShapeId;

/// Settings for one server generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRustSettings {
    pub service: ShapeId,
    #[serde(rename = "module")]
    pub module_name: String,
    pub module_version: String,
    #[serde(default)]
    pub module_authors: Vec<String>,
    #[serde(default)]
    pub module_description: Option<String>,
    #[serde(default)]
    pub module_repository: Option<String>,
    #[serde(default)]
    pub runtime_config: RuntimeConfig,
    #[serde(default, rename = "codegen")]
    pub codegen_config: ServerCodegenConfig,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub examples_uri: Option<String>,
    #[serde(default)]
    pub customization_config: Option<serde_json::Map<String, Value>>,
}

impl ServerRustSettings {
    /// Settings with every optional field at its default.
    pub fn for_service(service: ShapeId, module_name: impl Into<String>) -> Self {
        Self {
            service,
            module_name: module_name.into(),
            module_version: "0.0.1".to_string(),
            module_authors: Vec::new(),
            module_description: None,
            module_repository: None,
            runtime_config: RuntimeConfig::default(),
            codegen_config: ServerCodegenConfig::default(),
            license: None,
            examples_uri: None,
            customization_config: None,
        }
    }

    /// Parse from the plugin's JSON settings object.
    pub fn from_json_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Where the Smithy runtime crates live and what they are called.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Prefix of the runtime crate names: `<prefix>_smithy_types`, ...
    #[serde(default = "RuntimeConfig::default_crate_prefix")]
    pub crate_prefix: String,
    /// Path to the runtime crates for local builds; crates.io when absent.
    #[serde(default)]
    pub relative_path: Option<String>,
}

impl RuntimeConfig {
    fn default_crate_prefix() -> String {
        "aws".to_string()
    }

    /// Module path of the runtime `smithy-types` crate.
    pub fn smithy_types(&self) -> String {
        format!("{}_smithy_types", self.crate_prefix)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            crate_prefix: Self::default_crate_prefix(),
            relative_path: None,
        }
    }
}

/// The `codegen` section of the settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCodegenConfig {
    #[serde(default = "ServerCodegenConfig::default_format_timeout_seconds")]
    pub format_timeout_seconds: u32,
    #[serde(default)]
    pub debug_mode: bool,
    #[serde(default)]
    pub event_stream_allow_list: Vec<String>,
    #[serde(default)]
    pub reachability: ReachabilityStrategy,
}

impl ServerCodegenConfig {
    fn default_format_timeout_seconds() -> u32 {
        20
    }
}

impl Default for ServerCodegenConfig {
    fn default() -> Self {
        Self {
            format_timeout_seconds: Self::default_format_timeout_seconds(),
            debug_mode: false,
            event_stream_allow_list: Vec::new(),
            reachability: ReachabilityStrategy::default(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/settings_tests.rs"]
mod tests;

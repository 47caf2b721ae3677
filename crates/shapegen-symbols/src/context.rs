//! Per-run codegen context.

use crate::delegating::UnconstrainedShapeSymbolProvider;
use crate::error::SymbolError;
use crate::provider::BaseSymbolProvider;
use crate::reachability::ReachabilityAnalyzer;
use crate::settings::ServerRustSettings;
use shapegen_model::{Model, ShapeId};
use std::sync::Arc;
use tracing::{debug, info};

/// Everything one server generation run shares: the model, the service being
/// generated, the settings, and the run-scoped analysis caches.
///
/// Dropping the context discards the caches; two contexts never share state.
#[derive(Debug)]
pub struct ServerCodegenContext {
    model: Arc<Model>,
    settings: ServerRustSettings,
    reachability: Arc<ReachabilityAnalyzer>,
    symbol_provider: Arc<UnconstrainedShapeSymbolProvider<BaseSymbolProvider>>,
}

impl ServerCodegenContext {
    /// Set up a run for `settings.service`, which must be a service shape.
    pub fn new(model: Arc<Model>, settings: ServerRustSettings) -> Result<Self, SymbolError> {
        model.expect_service(&settings.service)?;
        let reachability = Arc::new(ReachabilityAnalyzer::new(
            Arc::clone(&model),
            settings.service.clone(),
            settings.codegen_config.reachability,
        ));
        let base = BaseSymbolProvider::new(Arc::clone(&model), settings.runtime_config.clone());
        let symbol_provider = Arc::new(UnconstrainedShapeSymbolProvider::new(
            base,
            Arc::clone(&model),
            Arc::clone(&reachability),
        ));
        debug!(service = %settings.service, module = %settings.module_name, "codegen context");
        Ok(Self {
            model,
            settings,
            reachability,
            symbol_provider,
        })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn service(&self) -> &ShapeId {
        &self.settings.service
    }

    pub fn settings(&self) -> &ServerRustSettings {
        &self.settings
    }

    pub fn reachability(&self) -> &ReachabilityAnalyzer {
        &self.reachability
    }

    /// The provider every generation stage resolves symbols through.
    pub fn symbol_provider(&self) -> Arc<UnconstrainedShapeSymbolProvider<BaseSymbolProvider>> {
        Arc::clone(&self.symbol_provider)
    }

    /// Compute reachability now instead of on the first symbol query.
    ///
    /// In debug mode the summary is logged at `info`.
    pub fn analyze(&self) -> Result<(), SymbolError> {
        let result = self.reachability.result()?;
        if self.settings.codegen_config.debug_mode {
            info!(
                service = %self.settings.service,
                shapes = result.closure().len(),
                unconstrained = result.reachable_count(),
                recursive_groups = result.cycles().len(),
                "constraint reachability"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/context_tests.rs"]
mod tests;

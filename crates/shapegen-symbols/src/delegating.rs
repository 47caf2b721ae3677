//! The constraint-aware symbol provider.

use crate::error::SymbolError;
use crate::provider::SymbolProvider;
use crate::reachability::ReachabilityAnalyzer;
use crate::rust_type::RustType;
use crate::symbol::Symbol;
use crate::unconstrained::unconstrained_symbol;
use dashmap::DashMap;
use shapegen_model::{Model, ShapeId, ShapeKind};
use std::sync::Arc;
use tracing::trace;

/// Decorates a base [`SymbolProvider`] with unconstrained symbols.
///
/// Shapes that can reach a constrained shape resolve to their unconstrained
/// representation; every other shape is forwarded to `base` unchanged, so
/// this provider can replace the base one in every generation stage.
///
/// Resolved symbols are cached for the lifetime of the provider (one
/// generation run). The cache is concurrent; resolving the same shape twice
/// produces the same symbol, so racing writers are harmless.
#[derive(Debug)]
pub struct UnconstrainedShapeSymbolProvider<P> {
    base: P,
    model: Arc<Model>,
    reachability: Arc<ReachabilityAnalyzer>,
    cache: DashMap<ShapeId, Symbol>,
}

impl<P: SymbolProvider> UnconstrainedShapeSymbolProvider<P> {
    pub fn new(base: P, model: Arc<Model>, reachability: Arc<ReachabilityAnalyzer>) -> Self {
        Self {
            base,
            model,
            reachability,
            cache: DashMap::new(),
        }
    }

    pub fn base(&self) -> &P {
        &self.base
    }

    pub fn reachability(&self) -> &ReachabilityAnalyzer {
        &self.reachability
    }

    /// Whether `id` resolves to an unconstrained representation.
    pub fn is_unconstrained(&self, id: &ShapeId) -> Result<bool, SymbolError> {
        self.reachability.reaches(id)
    }

    /// The type an unconstrained collection wrapper holds.
    ///
    /// Element and value types are resolved through this provider, so a list
    /// of a reachable structure holds that structure's builder, and a list of
    /// a reachable list holds the inner list's wrapper. `None` for shapes that
    /// do not resolve to a collection wrapper.
    pub fn wrapped_type(&self, id: &ShapeId) -> Result<Option<RustType>, SymbolError> {
        if !self.is_unconstrained(id)? {
            return Ok(None);
        }
        let shape = self
            .model
            .get(id)
            .ok_or_else(|| SymbolError::UnknownShape(id.clone()))?;
        let wrapped = match &shape.kind {
            ShapeKind::List { member } | ShapeKind::Set { member } => {
                Some(RustType::vec(self.to_symbol(&member.target)?.rust_type))
            }
            ShapeKind::Map { key, value } => Some(RustType::hash_map(
                self.to_symbol(&key.target)?.rust_type,
                self.to_symbol(&value.target)?.rust_type,
            )),
            _ => None,
        };
        Ok(wrapped)
    }

    fn resolve(&self, id: &ShapeId) -> Result<Symbol, SymbolError> {
        if self.reachability.reaches(id)? {
            let shape = self
                .model
                .get(id)
                .ok_or_else(|| SymbolError::UnknownShape(id.clone()))?;
            let symbol = unconstrained_symbol(shape, &self.base)?;
            trace!(shape = %id, symbol = %symbol, kind = %symbol.kind, "unconstrained symbol");
            Ok(symbol)
        } else {
            self.base.to_symbol(id)
        }
    }
}

impl<P: SymbolProvider> SymbolProvider for UnconstrainedShapeSymbolProvider<P> {
    fn to_symbol(&self, id: &ShapeId) -> Result<Symbol, SymbolError> {
        if let Some(cached) = self.cache.get(id) {
            trace!(shape = %id, "symbol cache hit");
            return Ok(cached.clone());
        }
        let symbol = self.resolve(id)?;
        self.cache.insert(id.clone(), symbol.clone());
        Ok(symbol)
    }
}

#[cfg(test)]
#[path = "../tests/delegating_tests.rs"]
mod tests;

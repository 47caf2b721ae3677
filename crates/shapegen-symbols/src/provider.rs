//! The symbol provider contract and the base (constraint-unaware) resolver.

use crate::error::SymbolError;
use crate::rust_type::RustType;
use crate::settings::RuntimeConfig;
use crate::symbol::{Symbol, SymbolKind};
use shapegen_common::to_pascal_case;
use shapegen_model::{Model, PrimitiveKind, ShapeId, ShapeKind};
use std::sync::Arc;

/// Module of generated domain types.
pub(crate) const MODEL_MODULE: &str = "model";
pub(crate) const MODEL_FILE: &str = "src/model.rs";
const OPERATION_MODULE: &str = "operation";
const OPERATION_FILE: &str = "src/operation.rs";
const LIB_FILE: &str = "src/lib.rs";

/// Maps shapes to the Rust types generated code refers to them by.
///
/// Every generation stage depends on this trait only, so a decorating
/// provider can stand in for the base resolver anywhere.
pub trait SymbolProvider {
    fn to_symbol(&self, id: &ShapeId) -> Result<Symbol, SymbolError>;
}

impl<P: SymbolProvider + ?Sized> SymbolProvider for &P {
    fn to_symbol(&self, id: &ShapeId) -> Result<Symbol, SymbolError> {
        (**self).to_symbol(id)
    }
}

impl<P: SymbolProvider + ?Sized> SymbolProvider for Arc<P> {
    fn to_symbol(&self, id: &ShapeId) -> Result<Symbol, SymbolError> {
        (**self).to_symbol(id)
    }
}

/// Canonical symbols, ignoring constraints entirely.
///
/// | Shape | Symbol |
/// |-------|--------|
/// | structure, union, enum | `crate::model::<Name>` |
/// | list, set | `std::vec::Vec<member>` |
/// | map | `std::collections::HashMap<key, value>` |
/// | string, boolean, numbers, intEnum | `String`, `bool`, `i8`..`i64`, `f32`, `f64` |
/// | blob, timestamp, document | `<prefix>_smithy_types::{Blob, DateTime, Document}` |
/// | bigInteger, bigDecimal | `<prefix>_smithy_types::{BigInteger, BigDecimal}` |
/// | operation | `crate::operation::<Name>` |
/// | service | `crate::<Name>` |
#[derive(Debug, Clone)]
pub struct BaseSymbolProvider {
    model: Arc<Model>,
    runtime_config: RuntimeConfig,
}

impl BaseSymbolProvider {
    pub fn new(model: Arc<Model>, runtime_config: RuntimeConfig) -> Self {
        Self {
            model,
            runtime_config,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    fn primitive_type(&self, kind: PrimitiveKind) -> RustType {
        match kind {
            PrimitiveKind::Boolean => RustType::Bool,
            PrimitiveKind::String => RustType::String,
            PrimitiveKind::Byte => RustType::Integer(8),
            PrimitiveKind::Short => RustType::Integer(16),
            PrimitiveKind::Integer => RustType::Integer(32),
            PrimitiveKind::Long => RustType::Integer(64),
            PrimitiveKind::Float => RustType::Float(32),
            PrimitiveKind::Double => RustType::Float(64),
            PrimitiveKind::Blob => RustType::opaque("Blob", self.runtime_config.smithy_types()),
            PrimitiveKind::Timestamp => {
                RustType::opaque("DateTime", self.runtime_config.smithy_types())
            }
            PrimitiveKind::Document => {
                RustType::opaque("Document", self.runtime_config.smithy_types())
            }
            PrimitiveKind::BigInteger => {
                RustType::opaque("BigInteger", self.runtime_config.smithy_types())
            }
            PrimitiveKind::BigDecimal => {
                RustType::opaque("BigDecimal", self.runtime_config.smithy_types())
            }
        }
    }
}

impl SymbolProvider for BaseSymbolProvider {
    fn to_symbol(&self, id: &ShapeId) -> Result<Symbol, SymbolError> {
        let shape = self
            .model
            .get(id)
            .ok_or_else(|| SymbolError::UnknownShape(id.clone()))?;
        let name = to_pascal_case(id.name());

        let symbol = match &shape.kind {
            ShapeKind::Structure { .. } | ShapeKind::Union { .. } | ShapeKind::Enum { .. } => {
                Symbol::generated(
                    RustType::opaque(name, format!("crate::{MODEL_MODULE}")),
                    SymbolKind::Domain,
                    MODEL_FILE,
                )
            }
            ShapeKind::List { member } | ShapeKind::Set { member } => {
                Symbol::external(RustType::vec(self.to_symbol(&member.target)?.rust_type))
            }
            ShapeKind::Map { key, value } => Symbol::external(RustType::hash_map(
                self.to_symbol(&key.target)?.rust_type,
                self.to_symbol(&value.target)?.rust_type,
            )),
            ShapeKind::Primitive(kind) => Symbol::external(self.primitive_type(*kind)),
            ShapeKind::IntEnum { .. } => {
                Symbol::external(self.primitive_type(PrimitiveKind::Integer))
            }
            ShapeKind::Operation { .. } => Symbol::generated(
                RustType::opaque(name, format!("crate::{OPERATION_MODULE}")),
                SymbolKind::Domain,
                OPERATION_FILE,
            ),
            ShapeKind::Service { .. } => Symbol::generated(
                RustType::opaque(name, "crate"),
                SymbolKind::Domain,
                LIB_FILE,
            ),
            ShapeKind::Resource { .. } => {
                return Err(SymbolError::UnhandledShapeKind {
                    shape: id.clone(),
                    kind: shape.shape_type(),
                });
            }
        };
        Ok(symbol)
    }
}

#[cfg(test)]
#[path = "../tests/provider_tests.rs"]
mod tests;

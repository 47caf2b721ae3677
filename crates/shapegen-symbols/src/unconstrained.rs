//! Unconstrained symbol synthesis.
//!
//! | Shape kind | Type | Module |
//! |------------|------|--------|
//! | list / set / map / union | `<Name>Unconstrained` | `crate::unconstrained::<name>_unconstrained` |
//! | structure | `Builder` | `crate::model::<name>` |
//! | enum | `String` | `std::string` |
//! | primitive, intEnum | the base type | the base module |
//!
//! Structures already get a module with a deferred-validation builder next to
//! their domain type, so that builder doubles as the unconstrained type.
//! Collections and unions have nothing comparable and get a dedicated wrapper
//! in a module named after the shape. Shapes whose names would collide are
//! rejected when the service closure is computed.
//!
//! Synthesis never looks at members: a wrapper's contents are resolved by
//! asking the delegating provider about each member target.

use crate::error::SymbolError;
use crate::provider::{MODEL_FILE, MODEL_MODULE, SymbolProvider};
use crate::rust_type::RustType;
use crate::symbol::{Symbol, SymbolKind};
use shapegen_common::{to_pascal_case, to_snake_case};
use shapegen_model::{Shape, ShapeKind};

/// Module holding every generated unconstrained wrapper.
pub const UNCONSTRAINED_MODULE: &str = "unconstrained";

const UNCONSTRAINED_FILE: &str = "src/unconstrained.rs";

/// Name of the deferred-validation builder inside a structure's module.
pub const BUILDER_NAME: &str = "Builder";

/// The unconstrained symbol of `shape`.
///
/// Only meaningful for shapes that reach a constrained shape. `base` resolves
/// simple shapes, whose base type already holds unvalidated data. Operations,
/// resources and services have no unconstrained representation and fail with
/// [`SymbolError::UnhandledShapeKind`].
pub fn unconstrained_symbol<P>(shape: &Shape, base: &P) -> Result<Symbol, SymbolError>
where
    P: SymbolProvider + ?Sized,
{
    let name = shape.id.name();
    match &shape.kind {
        ShapeKind::List { .. }
        | ShapeKind::Set { .. }
        | ShapeKind::Map { .. }
        | ShapeKind::Union { .. } => Ok(Symbol::generated(
            RustType::opaque(
                format!("{}Unconstrained", to_pascal_case(name)),
                format!(
                    "crate::{UNCONSTRAINED_MODULE}::{}_unconstrained",
                    to_snake_case(name)
                ),
            ),
            SymbolKind::UnconstrainedWrapper,
            UNCONSTRAINED_FILE,
        )),
        ShapeKind::Structure { .. } => Ok(Symbol::generated(
            RustType::opaque(
                BUILDER_NAME,
                format!("crate::{MODEL_MODULE}::{}", to_snake_case(name)),
            ),
            SymbolKind::DeferredBuilder,
            MODEL_FILE,
        )),
        ShapeKind::Enum { .. } => {
            Ok(Symbol::external(RustType::String).with_kind(SymbolKind::Unvalidated))
        }
        ShapeKind::Primitive(_) | ShapeKind::IntEnum { .. } => base
            .to_symbol(&shape.id)
            .map(|symbol| symbol.with_kind(SymbolKind::Unvalidated)),
        ShapeKind::Operation { .. } | ShapeKind::Resource { .. } | ShapeKind::Service { .. } => {
            Err(SymbolError::UnhandledShapeKind {
                shape: shape.id.clone(),
                kind: shape.shape_type(),
            })
        }
    }
}

#[cfg(test)]
#[path = "../tests/unconstrained_tests.rs"]
mod tests;

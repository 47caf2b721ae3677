//! Shape graph for the shapegen code generator.
//!
//! The model is the read-only input every generation stage works from:
//!
//! - **Identity**: [`ShapeId`] (`namespace#Name`) keys every shape and cache
//! - **Shapes**: [`Shape`] tagged by [`ShapeKind`], with [`Member`]s that point
//!   at other shapes and carry [`ConstraintTrait`]s
//! - **Construction**: [`ModelBuilder`] for programmatic models and
//!   [`Model::from_json_str`] for the Smithy JSON AST; both validate targets
//!   and recursion before a [`Model`] exists
//! - **Walking**: [`Model::service_closure`] enumerates everything a service
//!   can reach, without recursion

mod error;
mod json;
mod model;
mod shape;
mod shape_id;
mod traits;
mod walker;

pub use error::ModelError;
pub use model::{Model, ModelBuilder};
pub use shape::{Member, PrimitiveKind, Shape, ShapeKind, ShapeType};
pub use shape_id::{PRELUDE_NAMESPACE, ShapeId};
pub use traits::ConstraintTrait;
pub use walker::ShapeClosure;

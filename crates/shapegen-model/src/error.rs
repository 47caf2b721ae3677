use crate::shape::ShapeType;
use crate::shape_id::ShapeId;
use std::fmt;

/// Errors raised while building, loading or walking a model.
#[derive(Debug)]
pub enum ModelError {
    /// A string is not an absolute `namespace#Name` shape id.
    InvalidShapeId { id: String, reason: &'static str },
    /// The same shape id was defined twice.
    DuplicateShape(ShapeId),
    /// A member, operation or service refers to a shape that is not defined.
    UnknownTarget { shape: ShapeId, target: ShapeId },
    /// A shape id was looked up that the model does not define.
    UnknownShape(ShapeId),
    /// A cycle runs only through lists, sets and maps. Recursion must pass
    /// through a structure or union.
    InvalidRecursion { cycle: Vec<ShapeId> },
    /// The JSON AST uses a shape type this model does not support.
    UnsupportedShapeType { shape: String, shape_type: String },
    /// A shape expected to be of one type is of another.
    UnexpectedShapeType {
        shape: ShapeId,
        expected: &'static str,
        found: ShapeType,
    },
    /// Two shapes in a service closure would generate the same Rust name.
    /// Names compare without case and without `_` separators.
    ConflictingShapeNames { first: ShapeId, second: ShapeId },
    /// A constraint trait value has the wrong JSON form.
    InvalidTrait {
        shape: String,
        trait_id: String,
        reason: String,
    },
    /// The JSON AST could not be parsed.
    Json(serde_json::Error),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShapeId { id, reason } => {
                write!(f, "invalid shape id '{id}': {reason}")
            }
            Self::DuplicateShape(id) => write!(f, "shape '{id}' is defined more than once"),
            Self::UnknownTarget { shape, target } => {
                write!(f, "shape '{shape}' targets undefined shape '{target}'")
            }
            Self::UnknownShape(id) => write!(f, "shape '{id}' is not defined in the model"),
            Self::InvalidRecursion { cycle } => {
                let path: Vec<String> = cycle.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "recursive collection without an intervening structure or union: {}",
                    path.join(" -> ")
                )
            }
            Self::UnsupportedShapeType { shape, shape_type } => {
                write!(f, "shape '{shape}' has unsupported type '{shape_type}'")
            }
            Self::UnexpectedShapeType {
                shape,
                expected,
                found,
            } => write!(f, "shape '{shape}' is a {found}, expected a {expected}"),
            Self::ConflictingShapeNames { first, second } => write!(
                f,
                "shapes '{first}' and '{second}' generate conflicting Rust names"
            ),
            Self::InvalidTrait {
                shape,
                trait_id,
                reason,
            } => write!(f, "invalid trait '{trait_id}' on '{shape}': {reason}"),
            Self::Json(err) => write!(f, "invalid model JSON: {err}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

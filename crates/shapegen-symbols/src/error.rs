use shapegen_model::{ModelError, ShapeId, ShapeType};
use std::fmt;

/// Errors raised by symbol resolution.
///
/// The model is static and validated before generation starts, so none of
/// these are recoverable: each one points at a bug in an earlier stage or in
/// this crate, and aborts the generation run.
#[derive(Debug)]
pub enum SymbolError {
    /// A shape id was queried that is not part of the service closure.
    UnknownShape(ShapeId),
    /// A shape reached unconstrained-symbol synthesis but its kind has no
    /// naming rule.
    UnhandledShapeKind { shape: ShapeId, kind: ShapeType },
    /// The fixpoint reachability pass did not converge within its bound.
    CycleNonTermination { passes: usize, shapes: usize },
    /// The model or service could not be used to set up a generation run.
    Model(ModelError),
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownShape(id) => {
                write!(f, "shape '{id}' is not part of the service closure")
            }
            Self::UnhandledShapeKind { shape, kind } => write!(
                f,
                "shape '{shape}' of kind {kind} can reach a constrained shape, \
                 but {kind} shapes have no unconstrained representation"
            ),
            Self::CycleNonTermination { passes, shapes } => write!(
                f,
                "reachability analysis did not converge after {passes} passes over {shapes} shapes"
            ),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SymbolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for SymbolError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownShape(id) => Self::UnknownShape(id),
            other => Self::Model(other),
        }
    }
}

//! Absolute shape identifiers.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Namespace of the Smithy prelude (`smithy.api#String`, ...).
pub const PRELUDE_NAMESPACE: &str = "smithy.api";

/// Unique, stable identifier of a shape within a model: `namespace#Name`.
///
/// Member ids (`namespace#Name$member`) are not shape ids and are rejected by
/// the parser; members are addressed through their containing shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeId {
    namespace: String,
    name: String,
}

impl ShapeId {
    /// Create a shape id from already-validated parts.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Shape id of a prelude shape, e.g. `ShapeId::prelude("String")`.
    pub fn prelude(name: &str) -> Self {
        Self::new(PRELUDE_NAMESPACE, name)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_prelude(&self) -> bool {
        self.namespace == PRELUDE_NAMESPACE
    }
}

impl FromStr for ShapeId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &'static str| ModelError::InvalidShapeId {
            id: s.to_string(),
            reason,
        };
        let (namespace, name) = s.split_once('#').ok_or_else(|| invalid("missing '#'"))?;
        if namespace.is_empty() {
            return Err(invalid("empty namespace"));
        }
        if name.is_empty() {
            return Err(invalid("empty name"));
        }
        if name.contains('$') {
            return Err(invalid("member ids are not shape ids"));
        }
        if name.contains('#') {
            return Err(invalid("more than one '#'"));
        }
        Ok(Self::new(namespace, name))
    }
}

impl TryFrom<String> for ShapeId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShapeId> for String {
    fn from(id: ShapeId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)
    }
}

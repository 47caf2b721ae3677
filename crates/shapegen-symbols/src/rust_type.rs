//! Rust type references produced by symbol resolution.

use std::fmt;

/// A reference to a Rust type in generated code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RustType {
    String,
    Bool,
    /// Signed integer of the given bit width.
    Integer(u8),
    /// Float of the given bit width.
    Float(u8),
    Vec(Box<RustType>),
    HashMap(Box<RustType>, Box<RustType>),
    /// A named type defined in generated code or a runtime crate.
    Opaque {
        name: String,
        namespace: Option<String>,
    },
}

impl RustType {
    pub fn opaque(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::Opaque {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }

    pub fn vec(inner: RustType) -> Self {
        Self::Vec(Box::new(inner))
    }

    pub fn hash_map(key: RustType, value: RustType) -> Self {
        Self::HashMap(Box::new(key), Box::new(value))
    }

    /// The unqualified name of the outermost type.
    pub fn name(&self) -> String {
        match self {
            Self::String => "String".to_string(),
            Self::Bool => "bool".to_string(),
            Self::Integer(bits) => format!("i{bits}"),
            Self::Float(bits) => format!("f{bits}"),
            Self::Vec(_) => "Vec".to_string(),
            Self::HashMap(..) => "HashMap".to_string(),
            Self::Opaque { name, .. } => name.clone(),
        }
    }

    /// The module path of the outermost type. Language primitives have none.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::String => Some("std::string"),
            Self::Bool | Self::Integer(_) | Self::Float(_) => None,
            Self::Vec(_) => Some("std::vec"),
            Self::HashMap(..) => Some("std::collections"),
            Self::Opaque { namespace, .. } => namespace.as_deref(),
        }
    }

    /// Render as Rust source. With `full_path`, every named type is qualified
    /// by its module path: `std::vec::Vec<crate::model::StructureB>`.
    pub fn render(&self, full_path: bool) -> String {
        let qualified = |name: &str| match (full_path, self.namespace()) {
            (true, Some(namespace)) => format!("{namespace}::{name}"),
            _ => name.to_string(),
        };
        match self {
            Self::Vec(inner) => {
                format!("{}<{}>", qualified(&self.name()), inner.render(full_path))
            }
            Self::HashMap(key, value) => format!(
                "{}<{}, {}>",
                qualified("HashMap"),
                key.render(full_path),
                value.render(full_path)
            ),
            _ => qualified(&self.name()),
        }
    }
}

impl fmt::Display for RustType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

#[cfg(test)]
#[path = "../tests/rust_type_tests.rs"]
mod tests;

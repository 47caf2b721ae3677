//! Resolved symbols.

use crate::rust_type::RustType;
use std::fmt;

/// What a symbol stands for in generated code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// The validated type used after constraint checks succeeded, or a type
    /// that never needs them.
    Domain,
    /// A generated wrapper that holds a collection or union's data before
    /// validation (`crate::unconstrained::*`).
    UnconstrainedWrapper,
    /// A structure's deferred-validation builder (`crate::model::<shape>::Builder`).
    DeferredBuilder,
    /// The raw wire value of a constrained simple shape, not yet validated.
    Unvalidated,
}

impl SymbolKind {
    /// Whether this symbol holds data that has not been validated yet.
    pub const fn is_unconstrained(self) -> bool {
        !matches!(self, Self::Domain)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Domain => "domain",
            Self::UnconstrainedWrapper => "unconstrained-wrapper",
            Self::DeferredBuilder => "deferred-builder",
            Self::Unvalidated => "unvalidated",
        })
    }
}

/// A resolved type reference: the Rust type plus where it is defined.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub rust_type: RustType,
    pub kind: SymbolKind,
    /// Source file the type is emitted into, relative to the generated crate
    /// root. `None` for types the generated crate does not define.
    pub definition_file: Option<String>,
}

impl Symbol {
    /// A symbol for a type defined outside the generated crate.
    pub fn external(rust_type: RustType) -> Self {
        Self {
            rust_type,
            kind: SymbolKind::Domain,
            definition_file: None,
        }
    }

    /// A symbol for a type the generated crate defines in `definition_file`.
    pub fn generated(rust_type: RustType, kind: SymbolKind, definition_file: &str) -> Self {
        Self {
            rust_type,
            kind,
            definition_file: Some(definition_file.to_string()),
        }
    }

    pub fn with_kind(mut self, kind: SymbolKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn rust_type(&self) -> &RustType {
        &self.rust_type
    }

    pub fn name(&self) -> String {
        self.rust_type.name()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.rust_type.namespace()
    }

    /// Module path segments below `crate`, e.g. `["unconstrained",
    /// "list_a_unconstrained"]`. Empty for types outside the generated crate.
    pub fn module_path(&self) -> Vec<&str> {
        let Some(namespace) = self.namespace() else {
            return Vec::new();
        };
        if namespace != "crate" && !namespace.starts_with("crate::") {
            return Vec::new();
        }
        namespace.split("::").skip(1).collect()
    }

    /// Fully qualified rendering of the type.
    pub fn full_name(&self) -> String {
        self.rust_type.render(true)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

#[cfg(test)]
#[path = "../tests/symbol_tests.rs"]
mod tests;

//! Constraint-aware symbol resolution.
//!
//! Server code generation defers constraint validation until all of a shape's
//! data has been assembled, so every shape that can transitively reach a
//! constrained shape needs a second, *unconstrained* type to hold data before
//! validation runs. This crate decides which shapes those are and what their
//! unconstrained types are called:
//!
//! - **Classification** ([`is_directly_constrained`]): does a shape itself
//!   carry a constraint?
//! - **Reachability** ([`ReachabilityAnalyzer`]): can a shape reach a
//!   constrained shape? Cycle-safe, computed once per run.
//! - **Synthesis** ([`unconstrained_symbol`]): the wrapper or builder symbol of
//!   a reachable shape.
//! - **Delegation** ([`UnconstrainedShapeSymbolProvider`]): a drop-in
//!   [`SymbolProvider`] that intercepts reachable shapes and forwards the rest
//!   to the [`BaseSymbolProvider`] unchanged.
//!
//! Generation runs are scoped by [`ServerCodegenContext`], which owns the model,
//! the settings and every cache.

mod constrained;
mod context;
mod delegating;
mod error;
mod provider;
pub mod reachability;
mod rust_type;
pub mod settings;
mod symbol;
mod unconstrained;

pub use constrained::{is_directly_constrained, is_member_constrained};
pub use context::ServerCodegenContext;
pub use delegating::UnconstrainedShapeSymbolProvider;
pub use error::SymbolError;
pub use provider::{BaseSymbolProvider, SymbolProvider};
pub use reachability::{ReachabilityAnalyzer, ReachabilityResult, ReachabilityStrategy};
pub use rust_type::RustType;
pub use settings::{RuntimeConfig, ServerCodegenConfig, ServerRustSettings};
pub use symbol::{Symbol, SymbolKind};
pub use unconstrained::{BUILDER_NAME, UNCONSTRAINED_MODULE, unconstrained_symbol};

#[cfg(test)]
#[path = "../tests/test_utils.rs"]
mod test_utils;

#[cfg(test)]
#[path = "../tests/scenario_tests.rs"]
mod scenario_tests;

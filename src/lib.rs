//! Constraint-aware symbol resolution for Smithy server code generation.
//!
//! The work happens in the member crates; this package re-exports them under
//! short names and carries the `shapegen` command line tool.

pub use shapegen_common as common;
pub use shapegen_model as model;
pub use shapegen_symbols as symbols;

pub mod cli;
pub mod tracing_config;

//! Common utilities for the shapegen code generator.
//!
//! This crate provides foundational helpers used across all shapegen crates:
//! - Identifier casing (`to_snake_case`, `to_pascal_case`) for generated names
//! - Analysis limits and thresholds

// Identifier casing for generated type and module names
pub mod casing;
pub use casing::{split_words, to_pascal_case, to_snake_case};

// Centralized limits and thresholds
pub mod limits;

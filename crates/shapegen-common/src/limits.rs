//! Centralized limits and thresholds for shape-graph analysis.
//!
//! The analyses in this workspace are iterative by construction, so there are
//! no recursion depths to tune here. What remains are upper bounds on loop
//! counts that, when exceeded, indicate an algorithmic bug rather than a
//! large input.

/// Maximum number of full passes the fixpoint reachability strategy may take
/// over a closure of `shape_count` shapes.
///
/// Every pass that changes the result marks at least one new shape, so at most
/// `shape_count` changing passes can happen, followed by one pass that
/// observes no change.
pub const fn max_fixpoint_passes(shape_count: usize) -> usize {
    shape_count.saturating_add(1)
}

/// Initial capacity for the explicit DFS stacks used by graph walks.
pub const WALK_STACK_CAPACITY: usize = 64;

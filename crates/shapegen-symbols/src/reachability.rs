//! Reachability of constrained shapes.
//!
//! A shape *reaches* a constrained shape when it is directly constrained, or
//! when any of its member targets reaches one. This is the least fixpoint of
//! a backward propagation over the shape graph, and the graph may contain
//! cycles (`structure Tree { children: Forest }`, `list Forest { member: Tree }`).
//!
//! # Strategies
//!
//! | Strategy | Algorithm | Bound |
//! |----------|-----------|-------|
//! | [`Condensation`](ReachabilityStrategy::Condensation) | Tarjan SCC, components marked in reverse topological order | one visit per node and edge |
//! | [`Fixpoint`](ReachabilityStrategy::Fixpoint) | repeated full passes until nothing changes | `shapes + 1` passes |
//!
//! Both are iterative: neither uses the call stack to follow edges, so
//! arbitrarily deep or cyclic models cannot overflow it. They always agree.
//!
//! # Caching
//!
//! [`ReachabilityAnalyzer`] computes the result for a service closure on first
//! query and keeps it for the rest of the run. The model is immutable, so the
//! result never needs invalidation.

use crate::constrained::is_directly_constrained;
use crate::error::SymbolError;
use fixedbitset::FixedBitSet;
use once_cell::sync::OnceCell;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use shapegen_common::limits::max_fixpoint_passes;
use shapegen_model::{Model, ShapeClosure, ShapeId};
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::{debug, trace};

/// Algorithm used to compute reachability.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReachabilityStrategy {
    /// Strongly connected component condensation.
    #[default]
    Condensation,
    /// Bounded iterative fixpoint.
    Fixpoint,
}

// ---------------------------------------------------------------------------
// ShapeGraph
// ---------------------------------------------------------------------------

/// Dense adjacency over a closure: node `i` is the closure's `i`-th shape.
#[derive(Debug)]
pub(crate) struct ShapeGraph {
    edges: Vec<SmallVec<[usize; 4]>>,
    seeds: FixedBitSet,
}

impl ShapeGraph {
    fn from_closure(model: &Model, closure: &ShapeClosure) -> Result<Self, SymbolError> {
        let mut edges = Vec::with_capacity(closure.len());
        let mut seeds = FixedBitSet::with_capacity(closure.len());
        for (index, id) in closure.iter().enumerate() {
            let shape = model.expect_shape(id)?;
            let targets = if shape.is_data_shape() {
                shape
                    .member_targets()
                    .into_iter()
                    .filter_map(|target| closure.index_of(target))
                    .collect()
            } else {
                SmallVec::new()
            };
            edges.push(targets);
            if is_directly_constrained(shape) {
                seeds.insert(index);
            }
        }
        Ok(Self { edges, seeds })
    }

    #[cfg(test)]
    pub(crate) fn from_edges(edges: Vec<SmallVec<[usize; 4]>>, seeds: &[usize]) -> Self {
        let mut seed_set = FixedBitSet::with_capacity(edges.len());
        for &seed in seeds {
            seed_set.insert(seed);
        }
        Self {
            edges,
            seeds: seed_set,
        }
    }

    fn len(&self) -> usize {
        self.edges.len()
    }

    fn has_self_loop(&self, node: usize) -> bool {
        self.edges[node].contains(&node)
    }
}

// ---------------------------------------------------------------------------
// Algorithms
// ---------------------------------------------------------------------------

/// Strongly connected components in reverse topological order: a component is
/// emitted only after every component it has an edge into.
///
/// Iterative Tarjan; the DFS call stack is explicit.
pub(crate) fn strongly_connected_components(graph: &ShapeGraph) -> Vec<Vec<usize>> {
    const UNVISITED: usize = usize::MAX;

    let n = graph.len();
    let mut index = vec![UNVISITED; n];
    let mut lowlink = vec![0; n];
    let mut on_stack = FixedBitSet::with_capacity(n);
    let mut stack: Vec<usize> = Vec::new();
    let mut components = Vec::new();
    let mut next_index = 0;
    // (node, next outgoing edge to explore)
    let mut call_stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if index[root] != UNVISITED {
            continue;
        }
        index[root] = next_index;
        lowlink[root] = next_index;
        next_index += 1;
        stack.push(root);
        on_stack.insert(root);
        call_stack.push((root, 0));

        while let Some((node, next_edge)) = call_stack.last_mut() {
            let v = *node;
            if let Some(&w) = graph.edges[v].get(*next_edge) {
                *next_edge += 1;
                if index[w] == UNVISITED {
                    index[w] = next_index;
                    lowlink[w] = next_index;
                    next_index += 1;
                    stack.push(w);
                    on_stack.insert(w);
                    call_stack.push((w, 0));
                } else if on_stack.contains(w) {
                    lowlink[v] = lowlink[v].min(index[w]);
                }
                continue;
            }

            call_stack.pop();
            if let Some(&(parent, _)) = call_stack.last() {
                lowlink[parent] = lowlink[parent].min(lowlink[v]);
            }
            if lowlink[v] == index[v] {
                let mut component = Vec::new();
                while let Some(w) = stack.pop() {
                    on_stack.set(w, false);
                    component.push(w);
                    if w == v {
                        break;
                    }
                }
                component.sort_unstable();
                components.push(component);
            }
        }
    }
    components
}

/// Mark components in the order [`strongly_connected_components`] emits them.
///
/// Every edge leaving a component points into a component that is already
/// final, so one visit per component suffices.
pub(crate) fn mark_by_condensation(graph: &ShapeGraph, components: &[Vec<usize>]) -> FixedBitSet {
    let mut reachable = FixedBitSet::with_capacity(graph.len());
    for component in components {
        let hit = component.iter().any(|&node| {
            graph.seeds.contains(node)
                || graph.edges[node]
                    .iter()
                    .any(|&target| reachable.contains(target))
        });
        if hit {
            for &node in component {
                reachable.insert(node);
            }
        }
        trace!(size = component.len(), hit, "component");
    }
    reachable
}

/// Propagate reachability with full passes until a pass changes nothing.
///
/// Returns the result and the number of passes taken, or
/// [`SymbolError::CycleNonTermination`] when `max_passes` passes were not
/// enough.
pub(crate) fn mark_by_fixpoint(
    graph: &ShapeGraph,
    max_passes: usize,
) -> Result<(FixedBitSet, usize), SymbolError> {
    let mut reachable = graph.seeds.clone();
    let mut passes = 0;
    loop {
        if passes == max_passes {
            return Err(SymbolError::CycleNonTermination {
                passes,
                shapes: graph.len(),
            });
        }
        passes += 1;

        let mut changed = false;
        for node in 0..graph.len() {
            if !reachable.contains(node)
                && graph.edges[node]
                    .iter()
                    .any(|&target| reachable.contains(target))
            {
                reachable.insert(node);
                changed = true;
            }
        }
        trace!(pass = passes, changed, "fixpoint pass");
        if !changed {
            return Ok((reachable, passes));
        }
    }
}

// ---------------------------------------------------------------------------
// ReachabilityResult
// ---------------------------------------------------------------------------

/// Reachability of every shape in a service closure.
#[derive(Debug)]
pub struct ReachabilityResult {
    closure: ShapeClosure,
    reachable: FixedBitSet,
    cycles: Vec<Vec<ShapeId>>,
    cycle_index: FxHashMap<ShapeId, usize>,
    strategy: ReachabilityStrategy,
    passes: usize,
}

impl ReachabilityResult {
    /// Compute reachability for every shape of `closure`.
    pub fn compute(
        model: &Model,
        closure: ShapeClosure,
        strategy: ReachabilityStrategy,
    ) -> Result<Self, SymbolError> {
        let graph = ShapeGraph::from_closure(model, &closure)?;
        let components = strongly_connected_components(&graph);

        let (reachable, passes) = match strategy {
            ReachabilityStrategy::Condensation => (mark_by_condensation(&graph, &components), 1),
            ReachabilityStrategy::Fixpoint => {
                mark_by_fixpoint(&graph, max_fixpoint_passes(graph.len()))?
            }
        };

        let cycles: Vec<Vec<ShapeId>> = components
            .iter()
            .filter(|c| c.len() > 1 || graph.has_self_loop(c[0]))
            .map(|c| {
                c.iter()
                    .filter_map(|&node| closure.get_index(node).cloned())
                    .collect()
            })
            .collect();

        let mut cycle_index = FxHashMap::default();
        for (index, cycle) in cycles.iter().enumerate() {
            for id in cycle {
                cycle_index.insert(id.clone(), index);
            }
        }

        debug!(
            root = %closure.root(),
            ?strategy,
            shapes = graph.len(),
            reachable = reachable.count_ones(..),
            cycles = cycles.len(),
            passes,
            "reachability computed"
        );

        Ok(Self {
            closure,
            reachable,
            cycles,
            cycle_index,
            strategy,
            passes,
        })
    }

    /// Whether `id` can reach a constrained shape. `None` when `id` is not part
    /// of the closure.
    pub fn reaches(&self, id: &ShapeId) -> Option<bool> {
        self.closure
            .index_of(id)
            .map(|index| self.reachable.contains(index))
    }

    /// Shapes that reach a constrained shape, in closure order.
    pub fn reachable_shapes(&self) -> impl Iterator<Item = &ShapeId> {
        self.reachable
            .ones()
            .filter_map(|index| self.closure.get_index(index))
    }

    pub fn reachable_count(&self) -> usize {
        self.reachable.count_ones(..)
    }

    /// Non-trivial strongly connected components (recursive shape groups),
    /// each in closure order.
    pub fn cycles(&self) -> &[Vec<ShapeId>] {
        &self.cycles
    }

    /// The recursive group `id` belongs to, if any.
    pub fn cycle_of(&self, id: &ShapeId) -> Option<&[ShapeId]> {
        self.cycle_index
            .get(id)
            .map(|&index| self.cycles[index].as_slice())
    }

    pub fn closure(&self) -> &ShapeClosure {
        &self.closure
    }

    pub fn strategy(&self) -> ReachabilityStrategy {
        self.strategy
    }

    /// Passes taken by the fixpoint strategy; always 1 for condensation.
    pub fn passes(&self) -> usize {
        self.passes
    }
}

// ---------------------------------------------------------------------------
// ReachabilityAnalyzer
// ---------------------------------------------------------------------------

/// Lazily computed, run-scoped reachability for one service.
///
/// Safe to query from several threads: the first query computes the result
/// exactly once while concurrent callers wait for it.
#[derive(Debug)]
pub struct ReachabilityAnalyzer {
    model: Arc<Model>,
    service: ShapeId,
    strategy: ReachabilityStrategy,
    result: OnceCell<ReachabilityResult>,
}

impl ReachabilityAnalyzer {
    pub fn new(model: Arc<Model>, service: ShapeId, strategy: ReachabilityStrategy) -> Self {
        Self {
            model,
            service,
            strategy,
            result: OnceCell::new(),
        }
    }

    /// The reachability result, computing it on first use.
    pub fn result(&self) -> Result<&ReachabilityResult, SymbolError> {
        self.result.get_or_try_init(|| {
            let closure = self.model.service_closure(&self.service)?;
            ReachabilityResult::compute(&self.model, closure, self.strategy)
        })
    }

    /// Whether `id` can reach a constrained shape.
    ///
    /// Fails with [`SymbolError::UnknownShape`] when `id` is not in the
    /// service closure.
    pub fn reaches(&self, id: &ShapeId) -> Result<bool, SymbolError> {
        self.result()?
            .reaches(id)
            .ok_or_else(|| SymbolError::UnknownShape(id.clone()))
    }

    pub fn is_computed(&self) -> bool {
        self.result.get().is_some()
    }

    pub fn service(&self) -> &ShapeId {
        &self.service
    }

    pub fn strategy(&self) -> ReachabilityStrategy {
        self.strategy
    }
}

#[cfg(test)]
#[path = "../tests/reachability_tests.rs"]
mod tests;

//! The immutable shape graph and its builder.

use crate::error::ModelError;
use crate::shape::{Member, PrimitiveKind, Shape, ShapeKind};
use crate::shape_id::ShapeId;
use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::debug;

/// An immutable, validated shape graph.
///
/// Shapes keep their definition order, so every iteration over a model is
/// deterministic. A `Model` can only be obtained from [`ModelBuilder::build`]
/// (directly or via the JSON loader), which guarantees that every referenced
/// shape exists and that collection recursion passes through a structure or
/// union.
#[derive(Clone, Debug)]
pub struct Model {
    shapes: IndexMap<ShapeId, Shape>,
}

impl Model {
    pub fn builder() -> ModelBuilder {
        ModelBuilder::new()
    }

    /// Get a shape by id.
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Get a shape by id, failing with [`ModelError::UnknownShape`].
    pub fn expect_shape(&self, id: &ShapeId) -> Result<&Shape, ModelError> {
        self.get(id)
            .ok_or_else(|| ModelError::UnknownShape(id.clone()))
    }

    /// Get a service shape by id.
    pub fn expect_service(&self, id: &ShapeId) -> Result<&Shape, ModelError> {
        let shape = self.expect_shape(id)?;
        match shape.kind {
            ShapeKind::Service { .. } => Ok(shape),
            _ => Err(ModelError::UnexpectedShapeType {
                shape: id.clone(),
                expected: "service",
                found: shape.shape_type(),
            }),
        }
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    /// All shapes in definition order, prelude first.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// All service shapes in definition order.
    pub fn services(&self) -> impl Iterator<Item = &Shape> {
        self.shapes()
            .filter(|s| matches!(s.kind, ShapeKind::Service { .. }))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Builder for [`Model`].
///
/// The prelude primitives (`smithy.api#String`, `smithy.api#Integer`, ...) are
/// always present.
///
/// ```ignore
/// let model = ModelBuilder::new()
///     .list(id("test#ListA"), id("test#StructureB"))
///     .structure(id("test#StructureB"), vec![Member::new("s", ShapeId::prelude("String"))])
///     .build()?;
/// ```
#[derive(Clone, Debug)]
pub struct ModelBuilder {
    shapes: IndexMap<ShapeId, Shape>,
    duplicates: Vec<ShapeId>,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBuilder {
    pub fn new() -> Self {
        let mut shapes = IndexMap::with_capacity(PrimitiveKind::ALL.len());
        for kind in PrimitiveKind::ALL {
            let id = ShapeId::prelude(kind.prelude_name());
            shapes.insert(id.clone(), Shape::primitive(id, kind));
        }
        Self {
            shapes,
            duplicates: Vec::new(),
        }
    }

    /// Add a shape. Defining the same id twice is reported by [`build`](Self::build).
    pub fn add_shape(&mut self, shape: Shape) -> &mut Self {
        if self.shapes.contains_key(&shape.id) {
            self.duplicates.push(shape.id.clone());
        } else {
            self.shapes.insert(shape.id.clone(), shape);
        }
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.add_shape(shape);
        self
    }

    pub fn structure(self, id: ShapeId, members: Vec<Member>) -> Self {
        self.shape(Shape::structure(id, members))
    }

    pub fn union(self, id: ShapeId, members: Vec<Member>) -> Self {
        self.shape(Shape::union(id, members))
    }

    pub fn list(self, id: ShapeId, member: ShapeId) -> Self {
        self.shape(Shape::list(id, member))
    }

    pub fn set(self, id: ShapeId, member: ShapeId) -> Self {
        self.shape(Shape::set(id, member))
    }

    pub fn map(self, id: ShapeId, key: ShapeId, value: ShapeId) -> Self {
        self.shape(Shape::map(id, key, value))
    }

    pub fn enumeration(self, id: ShapeId, variants: Vec<String>) -> Self {
        self.shape(Shape::enumeration(id, variants))
    }

    pub fn int_enumeration(self, id: ShapeId, variants: Vec<(String, i32)>) -> Self {
        self.shape(Shape::int_enumeration(id, variants))
    }

    pub fn primitive(self, id: ShapeId, kind: PrimitiveKind) -> Self {
        self.shape(Shape::primitive(id, kind))
    }

    pub fn operation(self, id: ShapeId, input: Option<ShapeId>, output: Option<ShapeId>) -> Self {
        self.shape(Shape::operation(id, input, output))
    }

    pub fn resource(self, id: ShapeId, operations: Vec<ShapeId>, resources: Vec<ShapeId>) -> Self {
        self.shape(Shape::resource(id, operations, resources))
    }

    pub fn service(self, id: ShapeId, operations: Vec<ShapeId>) -> Self {
        self.shape(Shape::service(id, operations))
    }

    /// Validate and freeze the model.
    pub fn build(self) -> Result<Model, ModelError> {
        if let Some(id) = self.duplicates.into_iter().next() {
            return Err(ModelError::DuplicateShape(id));
        }
        for shape in self.shapes.values() {
            for target in shape.referenced_shapes() {
                if !self.shapes.contains_key(target) {
                    return Err(ModelError::UnknownTarget {
                        shape: shape.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        check_collection_recursion(&self.shapes)?;
        debug!(shapes = self.shapes.len(), "model built");
        Ok(Model {
            shapes: self.shapes,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Reject cycles made only of list, set and map edges.
///
/// Such a cycle has no structure or union to break it, so the value type it
/// describes would be infinitely nested. Iterative DFS over the collection
/// subgraph.
fn check_collection_recursion(shapes: &IndexMap<ShapeId, Shape>) -> Result<(), ModelError> {
    let collection_edges = |index: usize| -> SmallVec<[usize; 2]> {
        let shape = &shapes[index];
        if !shape.is_collection() {
            return SmallVec::new();
        }
        shape
            .member_targets()
            .into_iter()
            .filter_map(|target| shapes.get_index_of(target))
            .filter(|&target| shapes[target].is_collection())
            .collect()
    };

    let mut marks = vec![Mark::Unvisited; shapes.len()];
    for root in 0..shapes.len() {
        if marks[root] != Mark::Unvisited || !shapes[root].is_collection() {
            continue;
        }
        marks[root] = Mark::OnPath;
        let mut path: Vec<(usize, SmallVec<[usize; 2]>, usize)> =
            vec![(root, collection_edges(root), 0)];

        while let Some((node, targets, next)) = path.last_mut() {
            if let Some(&target) = targets.get(*next) {
                *next += 1;
                match marks[target] {
                    Mark::Unvisited => {
                        marks[target] = Mark::OnPath;
                        path.push((target, collection_edges(target), 0));
                    }
                    Mark::OnPath => {
                        let start = path
                            .iter()
                            .position(|(n, _, _)| *n == target)
                            .unwrap_or(0);
                        let mut cycle: Vec<ShapeId> = path[start..]
                            .iter()
                            .map(|(n, _, _)| shapes[*n].id.clone())
                            .collect();
                        cycle.push(shapes[target].id.clone());
                        return Err(ModelError::InvalidRecursion { cycle });
                    }
                    Mark::Done => {}
                }
            } else {
                marks[*node] = Mark::Done;
                path.pop();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/model_tests.rs"]
mod tests;

//! Service closure walking.

use crate::error::ModelError;
use crate::model::Model;
use crate::shape_id::ShapeId;
use indexmap::{IndexMap, IndexSet};
use indexmap::map::Entry;
use shapegen_common::casing::to_snake_case;
use shapegen_common::limits::WALK_STACK_CAPACITY;
use tracing::debug;

/// The ordered set of shapes reachable from a root shape.
///
/// Order is depth-first pre-order following references in declaration order,
/// so it only depends on the model, never on hashing.
#[derive(Clone, Debug)]
pub struct ShapeClosure {
    root: ShapeId,
    shapes: IndexSet<ShapeId>,
}

impl ShapeClosure {
    pub fn root(&self) -> &ShapeId {
        &self.root
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.shapes.contains(id)
    }

    /// Dense index of a shape within the closure.
    pub fn index_of(&self, id: &ShapeId) -> Option<usize> {
        self.shapes.get_index_of(id)
    }

    pub fn get_index(&self, index: usize) -> Option<&ShapeId> {
        self.shapes.get_index(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeId> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Model {
    /// Every shape reachable from `root` (inclusive) through member targets,
    /// operation input/output/errors and service operations.
    pub fn walk(&self, root: &ShapeId) -> Result<ShapeClosure, ModelError> {
        self.expect_shape(root)?;
        let mut shapes = IndexSet::new();
        let mut stack = Vec::with_capacity(WALK_STACK_CAPACITY);
        stack.push(root);

        while let Some(id) = stack.pop() {
            if !shapes.insert(id.clone()) {
                continue;
            }
            let shape = self.expect_shape(id)?;
            // Reverse so the first reference is visited first.
            for target in shape.referenced_shapes().into_iter().rev() {
                if !shapes.contains(target) {
                    stack.push(target);
                }
            }
        }

        Ok(ShapeClosure {
            root: root.clone(),
            shapes,
        })
    }

    /// The closure of a service shape.
    ///
    /// Fails with [`ModelError::ConflictingShapeNames`] when two non-prelude
    /// shapes in the closure would generate the same Rust type or module name.
    pub fn service_closure(&self, service: &ShapeId) -> Result<ShapeClosure, ModelError> {
        self.expect_service(service)?;
        let closure = self.walk(service)?;
        check_name_conflicts(&closure)?;
        debug!(service = %service, shapes = closure.len(), "service closure");
        Ok(closure)
    }
}

/// Key under which generated names collide: `ListA`, `List_A` and `lista`
/// all become `lista`.
fn name_key(id: &ShapeId) -> String {
    to_snake_case(id.name()).replace('_', "")
}

fn check_name_conflicts(closure: &ShapeClosure) -> Result<(), ModelError> {
    let mut seen: IndexMap<String, &ShapeId> = IndexMap::with_capacity(closure.len());
    for id in closure.iter().filter(|id| !id.is_prelude()) {
        match seen.entry(name_key(id)) {
            Entry::Occupied(first) => {
                return Err(ModelError::ConflictingShapeNames {
                    first: (*first.get()).clone(),
                    second: id.clone(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/walker_tests.rs"]
mod tests;

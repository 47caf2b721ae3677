//! Direct constraint classification.

use shapegen_model::{Member, Shape};

/// Whether a member carries a constraint trait of its own.
pub fn is_member_constrained(member: &Member) -> bool {
    !member.constraints.is_empty()
}

/// Whether a shape is *directly* constrained: it carries a constraint trait
/// itself (an enum's allowed values, `@length` on a string, ...), or one of
/// its members does (`@required` on a structure member, ...).
///
/// Whether a member's target is constrained does not matter here; that is
/// what reachability is for. Operations, resources and services describe no
/// values and are never constrained.
pub fn is_directly_constrained(shape: &Shape) -> bool {
    if !shape.is_data_shape() {
        return false;
    }
    !shape.constraints.is_empty() || shape.members().into_iter().any(is_member_constrained)
}

#[cfg(test)]
#[path = "../tests/constrained_tests.rs"]
mod tests;

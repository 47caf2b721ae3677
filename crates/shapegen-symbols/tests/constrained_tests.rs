use super::*;
use shapegen_model::{ConstraintTrait, PrimitiveKind, ShapeId};

fn id(s: &str) -> ShapeId {
    s.parse().unwrap()
}

#[test]
fn test_structure_with_required_member_is_constrained() {
    let shape = Shape::structure(
        id("test#StructureC"),
        vec![Member::new("string", ShapeId::prelude("String")).required()],
    );
    assert!(is_directly_constrained(&shape));
    assert!(is_member_constrained(&shape.members()[0]));
}

#[test]
fn test_plain_structure_is_not_constrained() {
    let shape = Shape::structure(
        id("test#StructureB"),
        vec![Member::new("string", ShapeId::prelude("String"))],
    );
    assert!(!is_directly_constrained(&shape));
}

#[test]
fn test_constrained_member_target_does_not_count() {
    // The member points at a constrained shape but carries nothing itself.
    let shape = Shape::structure(
        id("test#Outer"),
        vec![Member::new("inner", id("test#ConstrainedInner"))],
    );
    assert!(!is_directly_constrained(&shape));
}

#[test]
fn test_shape_level_constraints() {
    let length = Shape::primitive(id("test#Name"), PrimitiveKind::String).with_constraint(
        ConstraintTrait::Length {
            min: Some(1),
            max: None,
        },
    );
    assert!(is_directly_constrained(&length));

    let range = Shape::primitive(id("test#Port"), PrimitiveKind::Integer).with_constraint(
        ConstraintTrait::Range {
            min: Some(0.0),
            max: Some(65535.0),
        },
    );
    assert!(is_directly_constrained(&range));

    let unique = Shape::list(id("test#Tags"), ShapeId::prelude("String"))
        .with_constraint(ConstraintTrait::UniqueItems);
    assert!(is_directly_constrained(&unique));

    let enumeration = Shape::enumeration(id("test#Suit"), vec!["CLUBS".into()]);
    assert!(is_directly_constrained(&enumeration));

    assert!(!is_directly_constrained(&Shape::primitive(
        id("test#Plain"),
        PrimitiveKind::String
    )));
}

#[test]
fn test_collection_member_constraint_counts() {
    let mut list = Shape::list(id("test#Names"), ShapeId::prelude("String"));
    if let shapegen_model::ShapeKind::List { member } = &mut list.kind {
        member
            .constraints
            .push(ConstraintTrait::Pattern("^[a-z]+$".to_string()));
    }
    assert!(is_directly_constrained(&list));
}

#[test]
fn test_operations_and_services_are_never_constrained() {
    let operation = Shape::operation(id("test#Op"), Some(id("test#Input")), None)
        .with_constraint(ConstraintTrait::Required);
    assert!(!is_directly_constrained(&operation));

    let service = Shape::service(id("test#Service"), vec![id("test#Op")]);
    assert!(!is_directly_constrained(&service));

    let resource = Shape::resource(id("test#Ticket"), vec![id("test#Op")], vec![])
        .with_constraint(ConstraintTrait::Required);
    assert!(!is_directly_constrained(&resource));
}

#[test]
fn test_int_enum_is_constrained() {
    let shape = Shape::int_enumeration(id("test#Priority"), vec![("LOW".into(), 1)]);
    assert!(is_directly_constrained(&shape));
}

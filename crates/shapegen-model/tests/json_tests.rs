use super::*;
use crate::ShapeType;

fn id(s: &str) -> ShapeId {
    s.parse().expect("valid shape id")
}

const MODEL: &str = r##"{
    "smithy": "1.0",
    "shapes": {
        "test#TestService": {
            "type": "service",
            "version": "123",
            "operations": [{ "target": "test#TestOperation" }]
        },
        "test#TestOperation": {
            "type": "operation",
            "input": { "target": "test#TestInputOutput" },
            "output": { "target": "test#TestInputOutput" },
            "errors": [{ "target": "test#Oops" }]
        },
        "test#TestInputOutput": {
            "type": "structure",
            "members": {
                "list": { "target": "test#ListA" },
                "name": {
                    "target": "test#Name",
                    "traits": { "smithy.api#documentation": "ignored" }
                }
            }
        },
        "test#Oops": {
            "type": "structure",
            "members": {},
            "traits": { "smithy.api#error": "client" }
        },
        "test#ListA": {
            "type": "list",
            "member": { "target": "test#StructureC" },
            "traits": { "smithy.api#length": { "min": 1 }, "smithy.api#uniqueItems": {} }
        },
        "test#StructureC": {
            "type": "structure",
            "members": {
                "string": {
                    "target": "smithy.api#String",
                    "traits": { "smithy.api#required": {} }
                },
                "count": {
                    "target": "smithy.api#Integer",
                    "traits": { "smithy.api#range": { "min": 0, "max": 10.5 } }
                }
            }
        },
        "test#Name": {
            "type": "string",
            "traits": { "smithy.api#pattern": "^[a-z]+$" }
        },
        "test#Suit": {
            "type": "string",
            "traits": { "smithy.api#enum": [{ "value": "CLUBS" }, { "value": "HEARTS", "name": "H" }] }
        },
        "test#Color": {
            "type": "enum",
            "members": {
                "RED": { "target": "smithy.api#Unit", "traits": { "smithy.api#enumValue": "red" } },
                "BLUE": { "target": "smithy.api#Unit" }
            }
        }
    }
}"##;

#[test]
fn test_load_json_ast() {
    let model = Model::from_json_str(MODEL).unwrap();

    let service = model.expect_service(&id("test#TestService")).unwrap();
    assert_eq!(service.referenced_shapes().as_slice(), [&id("test#TestOperation")]);

    let op = model.get(&id("test#TestOperation")).unwrap();
    match &op.kind {
        ShapeKind::Operation {
            input,
            output,
            errors,
        } => {
            assert_eq!(input.as_ref(), Some(&id("test#TestInputOutput")));
            assert_eq!(output.as_ref(), Some(&id("test#TestInputOutput")));
            assert_eq!(errors, &vec![id("test#Oops")]);
        }
        other => panic!("expected operation, got {other:?}"),
    }
}

#[test]
fn test_constraint_traits_are_read() {
    let model = Model::from_json_str(MODEL).unwrap();

    let list = model.get(&id("test#ListA")).unwrap();
    assert_eq!(
        list.constraints,
        vec![
            ConstraintTrait::Length {
                min: Some(1),
                max: None
            },
            ConstraintTrait::UniqueItems,
        ]
    );

    let structure = model.get(&id("test#StructureC")).unwrap();
    let string = structure.member("string").unwrap();
    assert_eq!(string.constraints, vec![ConstraintTrait::Required]);
    let count = structure.member("count").unwrap();
    assert_eq!(
        count.constraints,
        vec![ConstraintTrait::Range {
            min: Some(0.0),
            max: Some(10.5)
        }]
    );

    let name = model.get(&id("test#Name")).unwrap();
    assert_eq!(name.shape_type(), ShapeType::Primitive(PrimitiveKind::String));
    assert_eq!(
        name.constraints,
        vec![ConstraintTrait::Pattern("^[a-z]+$".to_string())]
    );
}

#[test]
fn test_non_constraint_traits_are_ignored() {
    let model = Model::from_json_str(MODEL).unwrap();
    let io = model.get(&id("test#TestInputOutput")).unwrap();
    assert!(io.member("name").unwrap().constraints.is_empty());
    assert!(model.get(&id("test#Oops")).unwrap().constraints.is_empty());
}

#[test]
fn test_enum_trait_string_becomes_enum() {
    let model = Model::from_json_str(MODEL).unwrap();
    let suit = model.get(&id("test#Suit")).unwrap();
    assert_eq!(
        suit.kind,
        ShapeKind::Enum {
            variants: vec!["CLUBS".to_string(), "HEARTS".to_string()]
        }
    );
}

#[test]
fn test_idl2_enum_shape() {
    let model = Model::from_json_str(MODEL).unwrap();
    let color = model.get(&id("test#Color")).unwrap();
    assert_eq!(
        color.kind,
        ShapeKind::Enum {
            variants: vec!["red".to_string(), "BLUE".to_string()]
        }
    );
    assert!(matches!(color.constraints.as_slice(), [ConstraintTrait::Enum(_)]));
}

#[test]
fn test_unsupported_shape_type() {
    let err = Model::from_json_str(
        r#"{ "smithy": "2.0", "shapes": { "test#A": { "type": "apply" } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::UnsupportedShapeType { ref shape_type, .. } if shape_type == "apply"));
}

const RESOURCE_MODEL: &str = r##"{
    "smithy": "2.0",
    "shapes": {
        "test#Tickets": {
            "type": "service",
            "version": "1",
            "operations": [{ "target": "test#Ping" }],
            "resources": [{ "target": "test#Ticket" }]
        },
        "test#Ticket": {
            "type": "resource",
            "identifiers": { "ticketId": { "target": "smithy.api#String" } },
            "create": { "target": "test#CreateTicket" },
            "read": { "target": "test#GetTicket" },
            "list": { "target": "test#ListTickets" },
            "operations": [{ "target": "test#Escalate" }],
            "collectionOperations": [{ "target": "test#Purge" }],
            "resources": [{ "target": "test#Comment" }]
        },
        "test#Comment": {
            "type": "resource",
            "read": { "target": "test#GetComment" }
        },
        "test#Ping": { "type": "operation" },
        "test#CreateTicket": { "type": "operation", "input": { "target": "test#TicketInput" } },
        "test#GetTicket": { "type": "operation" },
        "test#ListTickets": { "type": "operation" },
        "test#Escalate": { "type": "operation" },
        "test#Purge": { "type": "operation" },
        "test#GetComment": { "type": "operation", "output": { "target": "test#CommentBody" } },
        "test#TicketInput": {
            "type": "structure",
            "members": {
                "priority": { "target": "test#Priority" },
                "budget": { "target": "test#Budget" },
                "serial": { "target": "smithy.api#BigInteger" }
            }
        },
        "test#CommentBody": {
            "type": "structure",
            "members": { "text": { "target": "smithy.api#String" } }
        },
        "test#Priority": {
            "type": "intEnum",
            "members": {
                "LOW": { "target": "smithy.api#Unit", "traits": { "smithy.api#enumValue": 1 } },
                "HIGH": { "target": "smithy.api#Unit", "traits": { "smithy.api#enumValue": 10 } }
            }
        },
        "test#Budget": {
            "type": "bigDecimal",
            "traits": { "smithy.api#range": { "min": 0 } }
        }
    }
}"##;

#[test]
fn test_big_number_shapes() {
    let model = Model::from_json_str(RESOURCE_MODEL).unwrap();
    let budget = model.get(&id("test#Budget")).unwrap();
    assert_eq!(budget.kind, ShapeKind::Primitive(PrimitiveKind::BigDecimal));
    assert_eq!(budget.shape_type().to_string(), "bigDecimal");
    assert_eq!(
        budget.constraints,
        vec![ConstraintTrait::Range {
            min: Some(0.0),
            max: None
        }]
    );
    let serial = model.get(&ShapeId::prelude("BigInteger")).unwrap();
    assert_eq!(serial.kind, ShapeKind::Primitive(PrimitiveKind::BigInteger));
}

#[test]
fn test_int_enum_shape() {
    let model = Model::from_json_str(RESOURCE_MODEL).unwrap();
    let priority = model.get(&id("test#Priority")).unwrap();
    assert_eq!(
        priority.kind,
        ShapeKind::IntEnum {
            variants: vec![("LOW".to_string(), 1), ("HIGH".to_string(), 10)]
        }
    );
    assert_eq!(priority.constraints, vec![ConstraintTrait::IntEnum(vec![1, 10])]);
    assert_eq!(priority.shape_type(), ShapeType::IntEnum);
    assert!(priority.is_data_shape());
}

#[test]
fn test_int_enum_member_needs_integer_value() {
    let err = Model::from_json_str(
        r#"{ "smithy": "2.0", "shapes": { "test#P": {
            "type": "intEnum",
            "members": { "LOW": { "target": "smithy.api#Unit", "traits": { "smithy.api#enumValue": "low" } } }
        } } }"#,
    )
    .unwrap_err();
    assert!(
        matches!(err, ModelError::InvalidTrait { ref shape, .. } if shape == "test#P$LOW"),
        "{err}"
    );
}

#[test]
fn test_resource_bindings() {
    let model = Model::from_json_str(RESOURCE_MODEL).unwrap();

    let service = model.expect_service(&id("test#Tickets")).unwrap();
    assert_eq!(
        service.referenced_shapes().as_slice(),
        [&id("test#Ping"), &id("test#Ticket")]
    );

    let ticket = model.get(&id("test#Ticket")).unwrap();
    assert!(!ticket.is_data_shape());
    match &ticket.kind {
        ShapeKind::Resource {
            identifiers,
            operations,
            resources,
        } => {
            assert_eq!(identifiers, &vec![ShapeId::prelude("String")]);
            assert_eq!(
                operations,
                &vec![
                    id("test#CreateTicket"),
                    id("test#GetTicket"),
                    id("test#ListTickets"),
                    id("test#Escalate"),
                    id("test#Purge"),
                ]
            );
            assert_eq!(resources, &vec![id("test#Comment")]);
        }
        other => panic!("expected resource, got {other:?}"),
    }
}

#[test]
fn test_service_closure_follows_resources() {
    let model = Model::from_json_str(RESOURCE_MODEL).unwrap();
    let closure = model.service_closure(&id("test#Tickets")).unwrap();
    for reached in [
        "test#Ticket",
        "test#Comment",
        "test#Purge",
        "test#GetComment",
        "test#CommentBody",
        "test#TicketInput",
        "test#Priority",
        "test#Budget",
    ] {
        assert!(closure.contains(&id(reached)), "{reached}");
    }
    assert!(closure.contains(&ShapeId::prelude("BigInteger")));
}

#[test]
fn test_resource_with_unknown_operation() {
    let err = Model::from_json_str(
        r#"{ "smithy": "2.0", "shapes": { "test#R": {
            "type": "resource",
            "update": { "target": "test#Gone" }
        } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::UnknownTarget { ref target, .. } if target == &id("test#Gone")));
}

#[test]
fn test_malformed_trait_value() {
    let err = Model::from_json_str(
        r#"{ "smithy": "1.0", "shapes": { "test#S": {
            "type": "string",
            "traits": { "smithy.api#length": { "min": "one" } }
        } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::InvalidTrait { .. }), "{err}");
}

#[test]
fn test_missing_collection_member() {
    let err = Model::from_json_str(r#"{ "smithy": "1.0", "shapes": { "test#L": { "type": "list" } } }"#)
        .unwrap_err();
    assert!(err.to_string().contains("member"), "{err}");
}

#[test]
fn test_invalid_json() {
    let err = Model::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ModelError::Json(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_unknown_target_in_json() {
    let err = Model::from_json_str(
        r#"{ "smithy": "1.0", "shapes": { "test#L": { "type": "list", "member": { "target": "test#Gone" } } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::UnknownTarget { .. }));
}

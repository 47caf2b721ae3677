use super::*;
use crate::provider::BaseSymbolProvider;
use crate::settings::RuntimeConfig;
use crate::test_utils::*;
use shapegen_model::{ConstraintTrait, Member, Model, ModelError, PrimitiveKind, ShapeId, ShapeType};
use std::sync::Arc;

fn model() -> Arc<Model> {
    let model = base_service()
        .list(id("test#ListA"), id("test#HTTPHeaderMap"))
        .map(id("test#HTTPHeaderMap"), ShapeId::prelude("String"), id("test#Ec2Filter"))
        .union(id("test#Ec2Filter"), vec![Member::new("byName", id("test#ShortName"))])
        .shape(
            Shape::primitive(id("test#ShortName"), PrimitiveKind::String)
                .with_constraint(ConstraintTrait::Length { min: None, max: Some(8) }),
        )
        .set(id("test#TagSet"), id("test#ShortName"))
        .enumeration(id("test#Suit"), vec!["CLUBS".into()])
        .int_enumeration(id("test#Priority"), vec![("LOW".into(), 1), ("HIGH".into(), 2)])
        .structure(id("test#PersonRecord"), vec![required_string("name")])
        .resource(id("test#Ticket"), vec![id("test#TestOperation")], vec![])
        .build()
        .unwrap();
    Arc::new(model)
}

fn synthesize(model: &Arc<Model>, shape: &str) -> Result<Symbol, SymbolError> {
    let base = BaseSymbolProvider::new(Arc::clone(model), RuntimeConfig::default());
    unconstrained_symbol(model.get(&id(shape)).unwrap(), &base)
}

#[test]
fn test_collection_and_union_wrappers() {
    let model = model();
    let cases = [
        ("test#ListA", "ListAUnconstrained", "crate::unconstrained::list_a_unconstrained"),
        (
            "test#HTTPHeaderMap",
            "HttpHeaderMapUnconstrained",
            "crate::unconstrained::http_header_map_unconstrained",
        ),
        ("test#Ec2Filter", "Ec2FilterUnconstrained", "crate::unconstrained::ec2_filter_unconstrained"),
        ("test#TagSet", "TagSetUnconstrained", "crate::unconstrained::tag_set_unconstrained"),
    ];
    for (shape, name, namespace) in cases {
        let symbol = synthesize(&model, shape).unwrap();
        assert_eq!(symbol.rust_type, RustType::opaque(name, namespace), "{shape}");
        assert_eq!(symbol.kind, SymbolKind::UnconstrainedWrapper);
        assert_eq!(symbol.definition_file.as_deref(), Some("src/unconstrained.rs"));
        assert_eq!(symbol.module_path()[0], UNCONSTRAINED_MODULE);
    }
}

#[test]
fn test_structure_uses_builder() {
    let model = model();
    let symbol = synthesize(&model, "test#PersonRecord").unwrap();
    assert_eq!(
        symbol.rust_type,
        RustType::opaque(BUILDER_NAME, "crate::model::person_record")
    );
    assert_eq!(symbol.kind, SymbolKind::DeferredBuilder);
    assert_eq!(symbol.definition_file.as_deref(), Some("src/model.rs"));
}

#[test]
fn test_simple_shapes_keep_unvalidated_base_type() {
    let model = model();
    let suit = synthesize(&model, "test#Suit").unwrap();
    assert_eq!(suit.full_name(), "std::string::String");
    assert_eq!(suit.kind, SymbolKind::Unvalidated);
    assert!(suit.definition_file.is_none());

    let short_name = synthesize(&model, "test#ShortName").unwrap();
    assert_eq!(short_name.rust_type, RustType::String);
    assert_eq!(short_name.kind, SymbolKind::Unvalidated);
    assert!(short_name.kind.is_unconstrained());

    let priority = synthesize(&model, "test#Priority").unwrap();
    assert_eq!(priority.rust_type, RustType::Integer(32));
    assert_eq!(priority.kind, SymbolKind::Unvalidated);
}

#[test]
fn test_operation_and_service_are_unhandled() {
    let model = model();
    let err = synthesize(&model, "test#TestOperation").unwrap_err();
    assert!(matches!(
        err,
        SymbolError::UnhandledShapeKind {
            kind: ShapeType::Operation,
            ..
        }
    ));
    assert!(err.to_string().contains("test#TestOperation"));

    let err = synthesize(&model, "test#TestService").unwrap_err();
    assert!(matches!(
        err,
        SymbolError::UnhandledShapeKind {
            kind: ShapeType::Service,
            ..
        }
    ));
}

#[test]
fn test_resource_is_unhandled() {
    let model = model();
    assert!(matches!(
        synthesize(&model, "test#Ticket"),
        Err(SymbolError::UnhandledShapeKind {
            kind: ShapeType::Resource,
            ..
        })
    ));
}

#[test]
fn test_shapes_sharing_a_wrapper_name_are_rejected() {
    // Both names give `ListAUnconstrained` in `list_a_unconstrained`.
    let colliding = service_with_input(vec![
        Member::new("first", id("test#ListA")),
        Member::new("second", id("test#List_A")),
    ])
    .list(id("test#ListA"), id("test#ShortName"))
    .list(id("test#List_A"), id("test#ShortName"))
    .shape(
        Shape::primitive(id("test#ShortName"), PrimitiveKind::String)
            .with_constraint(ConstraintTrait::Length { min: None, max: Some(8) }),
    );
    let model = Arc::new(colliding.clone().build().unwrap());
    assert_eq!(
        synthesize(&model, "test#ListA").unwrap().rust_type,
        synthesize(&model, "test#List_A").unwrap().rust_type
    );

    let ctx = context(colliding);
    let provider = ctx.symbol_provider();
    match provider.to_symbol(&id("test#List_A")) {
        Err(SymbolError::Model(ModelError::ConflictingShapeNames { first, second })) => {
            assert_eq!(first, id("test#ListA"));
            assert_eq!(second, id("test#List_A"));
        }
        other => panic!("expected a name conflict, got {other:?}"),
    }
}

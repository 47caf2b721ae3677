use super::*;

#[test]
fn test_render_nested_types() {
    let structure = RustType::opaque("StructureB", "crate::model");
    let nested = RustType::hash_map(
        RustType::String,
        RustType::vec(RustType::vec(structure)),
    );
    assert_eq!(
        nested.render(true),
        "std::collections::HashMap<std::string::String, \
         std::vec::Vec<std::vec::Vec<crate::model::StructureB>>>"
    );
    assert_eq!(nested.render(false), "HashMap<String, Vec<Vec<StructureB>>>");
    assert_eq!(nested.to_string(), nested.render(true));
}

#[test]
fn test_primitives_have_no_namespace() {
    for ty in [RustType::Bool, RustType::Integer(32), RustType::Float(64)] {
        assert_eq!(ty.namespace(), None);
        assert_eq!(ty.render(true), ty.render(false));
    }
    assert_eq!(RustType::Integer(16).name(), "i16");
    assert_eq!(RustType::String.namespace(), Some("std::string"));
}

#[test]
fn test_runtime_types_render_with_their_crate() {
    let big = RustType::opaque("BigDecimal", "aws_smithy_types");
    assert_eq!(big.name(), "BigDecimal");
    assert_eq!(big.render(true), "aws_smithy_types::BigDecimal");
    assert_eq!(
        RustType::vec(big).render(true),
        "std::vec::Vec<aws_smithy_types::BigDecimal>"
    );
}

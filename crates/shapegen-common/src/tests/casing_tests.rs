use super::*;

#[test]
fn test_split_simple_pascal() {
    assert_eq!(split_words("StructureC").as_slice(), ["Structure", "C"]);
    assert_eq!(split_words("ListA").as_slice(), ["List", "A"]);
}

#[test]
fn test_split_acronym_and_digits() {
    assert_eq!(split_words("HTTPServer").as_slice(), ["HTTP", "Server"]);
    assert_eq!(split_words("Ec2Instance").as_slice(), ["Ec2", "Instance"]);
    assert_eq!(split_words("ABC").as_slice(), ["ABC"]);
}

#[test]
fn test_split_separators() {
    assert_eq!(split_words("my_shape-name").as_slice(), ["my", "shape", "name"]);
    assert!(split_words("__").is_empty());
}

#[test]
fn test_snake_case() {
    assert_eq!(to_snake_case("ListA"), "list_a");
    assert_eq!(to_snake_case("StructureC"), "structure_c");
    assert_eq!(to_snake_case("HTTPServer"), "http_server");
    assert_eq!(to_snake_case("already_snake"), "already_snake");
}

#[test]
fn test_pascal_case() {
    assert_eq!(to_pascal_case("ListA"), "ListA");
    assert_eq!(to_pascal_case("list_b"), "ListB");
    assert_eq!(to_pascal_case("HTTPServer"), "HttpServer");
}

#[test]
fn test_casings_agree_on_boundaries() {
    for name in ["ListA", "MapOfStructures", "Ec2Instance", "IOError"] {
        assert_eq!(to_snake_case(&to_pascal_case(name)), to_snake_case(name), "{name}");
    }
}

use crate::expansion::ExpansionError;
use crate::schema::TypeOracle;
use crate::test::DOCUMENT_SCHEMA;
use crate::test::INTERFACE_SCHEMA;
use crate::test::UNION_SCHEMA;
use crate::test::build_schema;
use crate::types::GraphQLTypeKind;

#[test]
fn possible_types_of_an_object() {
    let schema = build_schema(DOCUMENT_SCHEMA);
    assert_eq!(schema.possible_concrete_types("Image").unwrap(), vec!["Image"]);
}

#[test]
fn possible_types_of_an_interface_lead_with_the_interface() {
    let schema = build_schema(INTERFACE_SCHEMA);
    assert_eq!(
        schema.possible_concrete_types("IBar").unwrap(),
        vec!["IBar", "Bar1", "Bar2"],
    );

    let schema = build_schema(DOCUMENT_SCHEMA);
    assert_eq!(
        schema.possible_concrete_types("Node").unwrap(),
        vec!["Node", "Tag", "Image", "Video"],
    );
}

#[test]
fn possible_types_of_an_interface_include_transitive_implementations() {
    let schema = build_schema("
        type Query { n: Node }
        interface Node { id: ID! }
        interface Named implements Node { id: ID! name: String }
        type Person implements Named & Node { id: ID! name: String }
    ");
    assert_eq!(
        schema.possible_concrete_types("Node").unwrap(),
        vec!["Node", "Person"],
    );
    assert_eq!(
        schema.possible_concrete_types("Named").unwrap(),
        vec!["Named", "Person"],
    );
}

#[test]
fn possible_types_of_an_unimplemented_interface() {
    let schema = build_schema("
        type Query { l: Lonely }
        interface Lonely { id: ID! }
    ");
    assert_eq!(schema.possible_concrete_types("Lonely").unwrap(), vec!["Lonely"]);
}

#[test]
fn possible_types_of_a_union_exclude_the_union() {
    let schema = build_schema(UNION_SCHEMA);
    assert_eq!(schema.possible_concrete_types("Baz").unwrap(), vec!["Foo", "Bar"]);
}

#[test]
fn possible_types_of_a_leaf() {
    let schema = build_schema(DOCUMENT_SCHEMA);
    assert_eq!(
        schema.possible_concrete_types("VideoSource"),
        Err(ExpansionError::TypeMismatch {
            type_name: "VideoSource".to_string(),
            type_kind: GraphQLTypeKind::Enum,
            expected: "an object, interface, or union type",
        }),
    );
}

#[test]
fn possible_types_of_an_unknown_type() {
    let schema = build_schema(DOCUMENT_SCHEMA);
    assert_eq!(
        schema.possible_concrete_types("Nope"),
        Err(ExpansionError::SchemaIntegrity {
            type_name: "Nope".to_string(),
        }),
    );
}

#[test]
fn return_type_names_strip_wrappers() {
    let schema = build_schema(DOCUMENT_SCHEMA);
    assert_eq!(schema.field_return_type_name("Query", "node").unwrap(), "Node");
    assert_eq!(
        schema.field_return_type_name("Query", "elements").unwrap(),
        "DocumentElement",
    );
    assert_eq!(schema.field_return_type_name("Media", "tags").unwrap(), "Tag");
    assert_eq!(schema.field_return_type_name("Video", "source").unwrap(), "VideoSource");
}

#[test]
fn return_type_name_of_an_unknown_field() {
    let schema = build_schema(DOCUMENT_SCHEMA);
    assert_eq!(
        schema.field_return_type_name("Image", "height"),
        Err(ExpansionError::FieldNotFound {
            parent_type_name: "Image".to_string(),
            field_name: "height".to_string(),
        }),
    );
}

#[test]
fn fields_of_a_union_are_a_type_mismatch() {
    let schema = build_schema(DOCUMENT_SCHEMA);
    assert_eq!(
        schema.field_definition("DocumentElement", "id").unwrap_err(),
        ExpansionError::TypeMismatch {
            type_name: "DocumentElement".to_string(),
            type_kind: GraphQLTypeKind::Union,
            expected: "an object or interface type",
        },
    );
}

#[test]
fn leaf_types() {
    let schema = build_schema(DOCUMENT_SCHEMA);
    for leaf in ["Boolean", "Float", "ID", "Int", "String", "VideoSource"] {
        assert!(schema.is_leaf_type(leaf).unwrap(), "`{leaf}` should be a leaf");
    }
    for composite in ["Query", "Node", "DocumentElement"] {
        assert!(!schema.is_leaf_type(composite).unwrap(), "`{composite}` is composite");
    }
    assert!(schema.is_leaf_type("Nope").is_err());
}

#[test]
fn type_kinds() {
    let schema = build_schema(DOCUMENT_SCHEMA);
    assert_eq!(schema.type_kind("Media").unwrap(), GraphQLTypeKind::Interface);
    assert_eq!(schema.type_kind("DocumentElement").unwrap(), GraphQLTypeKind::Union);
    assert_eq!(schema.type_kind("Div").unwrap(), GraphQLTypeKind::Object);
}

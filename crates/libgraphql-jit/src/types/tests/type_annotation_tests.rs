use crate::test::DOCUMENT_SCHEMA;
use crate::test::build_schema;
use crate::types::TypeAnnotation;

fn field_annotation(type_name: &str, field_name: &str) -> TypeAnnotation {
    let schema = build_schema(DOCUMENT_SCHEMA);
    schema.get_type(type_name).unwrap()
        .fields().unwrap()
        .get(field_name).unwrap()
        .type_annotation()
        .to_owned()
}

#[test]
fn display_round_trips_sdl_syntax() {
    assert_eq!(field_annotation("Query", "node").to_string(), "Node!");
    assert_eq!(
        field_annotation("Query", "elements").to_string(),
        "[DocumentElement!]!",
    );
    assert_eq!(field_annotation("Image", "tags").to_string(), "[Tag!]");
    assert_eq!(field_annotation("Image", "width").to_string(), "Int");
}

#[test]
fn nullability() {
    assert!(!field_annotation("Query", "elements").nullable());
    assert!(field_annotation("Image", "tags").nullable());

    let tags = field_annotation("Image", "tags");
    let inner = tags.as_list_annotation().unwrap().inner_type_annotation();
    assert!(!inner.nullable());
    assert!(inner.as_list_annotation().is_none());
}

#[test]
fn innermost_named_type() {
    let elements = field_annotation("Query", "elements");
    let named = elements.innermost_named_type_annotation();
    assert_eq!(named.type_name(), "DocumentElement");
    assert!(!named.nullable());
    assert!(elements.as_named_annotation().is_none());
}

#[test]
fn field_arguments_are_recorded() {
    let schema = build_schema(DOCUMENT_SCHEMA);
    let media = &schema.query_type().fields().unwrap()["media"];
    assert_eq!(media.parent_type_name(), "Query");
    assert_eq!(media.parameters()["tags"].to_string(), "[String!]!");
}

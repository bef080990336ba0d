use crate::compile::CompileError;
use crate::compile::CompiledQuery;
use crate::expansion::ExpansionError;
use crate::operation::FragmentTableBuildError;
use crate::schema::GraphQLOperationType;
use crate::test::DOCUMENT_SCHEMA;
use crate::test::INTERFACE_SCHEMA;
use crate::test::SIMPLE_SCHEMA;
use crate::test::UNION_SCHEMA;
use crate::test::build_schema;
use crate::test::compile_query;
use crate::test::parse_query;
use crate::test::position_expansion_json;
use serde_json::json;
use std::sync::Arc;

fn compile_err(sdl: &str, query_src: &str, operation_name: Option<&str>) -> CompileError {
    CompiledQuery::compile(
        Arc::new(build_schema(sdl)),
        &parse_query(query_src),
        operation_name,
    ).unwrap_err()
}

#[test]
fn every_field_gets_a_position() {
    let compiled = compile_query(SIMPLE_SCHEMA, "{ foo { a d { e f } } }");

    assert_eq!(compiled.field_positions().collect::<Vec<_>>(), vec![
        "Query.foo",
        "Query.foo/Foo.a",
        "Query.foo/Foo.d",
        "Query.foo/Foo.d/Bar.e",
        "Query.foo/Foo.d/Bar.f",
    ]);
    assert_eq!(compiled.root_type_name(), "Query");
    assert_eq!(compiled.operation_type(), GraphQLOperationType::Query);
}

#[test]
fn nested_positions_carry_their_own_expansion() {
    assert_eq!(
        position_expansion_json(SIMPLE_SCHEMA, "{ foo { a d { e } } }", "Query.foo/Foo.d"),
        json!({ "Bar": { "e": true } }),
    );
    assert_eq!(
        position_expansion_json(SIMPLE_SCHEMA, "{ foo { a d { e } } }", "Query.foo/Foo.a"),
        json!({}),
    );
}

#[test]
fn repeated_root_fields_share_one_position() {
    let query_src = "query { foo { a } foo { b } foo { c } }";
    let compiled = compile_query(SIMPLE_SCHEMA, query_src);

    let thunk = compiled.resolve_info_thunk("Query.foo").unwrap();
    assert_eq!(thunk.context().field_nodes.len(), 3);
    assert_eq!(
        position_expansion_json(SIMPLE_SCHEMA, query_src, "Query.foo"),
        json!({ "Foo": { "a": true, "b": true, "c": true } }),
    );
}

#[test]
fn fragments_with_repeated_fields() {
    let query_src = "
        query {
            foo {
                ...fooFragment1
                a
                b
                ... on Foo {
                    c
                    ...fooFragment1
                }
            }
        }
        fragment fooFragment1 on Foo {
            a
            b
        }
    ";
    assert_eq!(
        position_expansion_json(SIMPLE_SCHEMA, query_src, "Query.foo"),
        json!({ "Foo": { "a": true, "b": true, "c": true } }),
    );

    let compiled = compile_query(SIMPLE_SCHEMA, query_src);
    let a = compiled.resolve_info_thunk("Query.foo/Foo.a").unwrap();
    // Once directly, once from the first spread. The second spread of the same
    // fragment is not collected again.
    assert_eq!(a.context().field_nodes.len(), 2);
}

#[test]
fn interface_fields_aggregated_across_root_selections() {
    let query_src = "
        query {
            iBar { id }
            iBar { title }
            iBar { ... on Bar1 { b1 } }
            iBar { ... on Bar2 { b2 } }
        }
    ";
    assert_eq!(
        position_expansion_json(INTERFACE_SCHEMA, query_src, "Query.iBar"),
        json!({
            "IBar": { "id": true, "title": true },
            "Bar1": { "id": true, "title": true, "b1": true },
            "Bar2": { "id": true, "title": true, "b2": true },
        }),
    );

    let compiled = compile_query(INTERFACE_SCHEMA, query_src);
    assert!(compiled.resolve_info_thunk("Query.iBar/Bar1.b1").is_some());
    assert!(compiled.resolve_info_thunk("Query.iBar/Bar2.b2").is_some());
    assert!(compiled.resolve_info_thunk("Query.iBar/Bar1.b2").is_none());
    assert!(compiled.resolve_info_thunk("Query.iBar/IBar.id").is_none());
}

#[test]
fn union_fields_aggregated_through_an_unconditioned_inline_fragment() {
    let query_src = "
        query {
            uBaz {
                ...bar
            }
            ... {
                uBaz {
                    ...foo
                }
            }
        }
        fragment foo on Foo {
            foo
        }
        fragment bar on Bar {
            bar
        }
    ";
    assert_eq!(
        position_expansion_json(UNION_SCHEMA, query_src, "Query.uBaz"),
        json!({
            "Foo": { "foo": true },
            "Bar": { "bar": true },
        }),
    );
}

#[test]
fn typename_has_no_position() {
    let compiled = compile_query(UNION_SCHEMA, "{ __typename uBaz { __typename } }");
    assert_eq!(compiled.field_positions().collect::<Vec<_>>(), vec!["Query.uBaz"]);
}

#[test]
fn positions_follow_only_applicable_conditions() {
    let query_src = r#"
        query {
            node(id: "root") {
                id
                ... on Image {
                    width
                }
                ... on DocumentElement {
                    ... on Image {
                        tags {
                            name
                        }
                    }
                    ... on Media {
                        tags {
                            id
                        }
                    }
                }
            }
        }
    "#;
    let compiled = compile_query(DOCUMENT_SCHEMA, query_src);

    assert_eq!(compiled.field_positions().collect::<Vec<_>>(), vec![
        "Query.node",
        "Query.node/Tag.id",
        "Query.node/Image.id",
        "Query.node/Image.width",
        "Query.node/Image.tags",
        "Query.node/Image.tags/Tag.name",
        "Query.node/Image.tags/Tag.id",
        "Query.node/Video.id",
        "Query.node/Video.tags",
        "Query.node/Video.tags/Tag.id",
    ]);

    assert_eq!(
        position_expansion_json(DOCUMENT_SCHEMA, query_src, "Query.node/Image.tags"),
        json!({ "Tag": { "id": true, "name": true } }),
    );
    assert_eq!(
        position_expansion_json(DOCUMENT_SCHEMA, query_src, "Query.node/Video.tags"),
        json!({ "Tag": { "id": true } }),
    );
}

#[test]
fn named_operation_is_selected() {
    let compiled = CompiledQuery::compile(
        Arc::new(build_schema(SIMPLE_SCHEMA)),
        &parse_query("query A { foo { a } } query B { foo { b } }"),
        Some("B"),
    ).unwrap();

    let foo = compiled.resolve_info_thunk("Query.foo").unwrap();
    assert!(foo.field_expansion().get("Foo").unwrap().contains_key("b"));
    assert!(!foo.field_expansion().get("Foo").unwrap().contains_key("a"));
}

#[test]
fn operation_selection_errors() {
    assert_eq!(
        compile_err(SIMPLE_SCHEMA, "fragment F on Foo { a }", None),
        CompileError::NoOperations,
    );
    assert_eq!(
        compile_err(SIMPLE_SCHEMA, "query A { foo { a } } query B { foo { b } }", None),
        CompileError::OperationNameRequired { operation_count: 2 },
    );
    assert_eq!(
        compile_err(SIMPLE_SCHEMA, "query A { foo { a } }", Some("C")),
        CompileError::UnknownOperation { operation_name: "C".to_string() },
    );
}

#[test]
fn mutation_without_a_mutation_root() {
    assert_eq!(
        compile_err(SIMPLE_SCHEMA, "mutation { foo { a } }", None),
        CompileError::MissingRootOperationType {
            operation_type: GraphQLOperationType::Mutation,
        },
    );
}

#[test]
fn mutation_root_from_schema_definition() {
    let sdl = "
        schema { query: Query mutation: Ops }
        type Query { foo: Foo }
        type Ops { setA(a: String): Foo }
        type Foo { a: String }
    ";
    let compiled = compile_query(sdl, "mutation { setA(a: \"x\") { a } }");
    assert_eq!(compiled.root_type_name(), "Ops");
    assert_eq!(compiled.operation_type(), GraphQLOperationType::Mutation);
    assert!(compiled.resolve_info_thunk("Ops.setA/Foo.a").is_some());
}

#[test]
fn invalid_fragments_abort_compilation() {
    let err = compile_err(
        SIMPLE_SCHEMA,
        "{ foo { ...A } } fragment A on Foo { ...A }",
        None,
    );
    assert_eq!(err, CompileError::InvalidFragments(vec![
        FragmentTableBuildError::FragmentCycleDetected {
            cycle_path: vec!["A".to_string(), "A".to_string()],
        },
    ]));
}

#[test]
fn fragment_table_errors_convert_into_compile_errors() {
    let errors = vec![FragmentTableBuildError::FragmentCycleDetected {
        cycle_path: vec!["A".to_string(), "A".to_string()],
    }];
    let err = CompileError::from(errors.clone());
    assert_eq!(err, CompileError::InvalidFragments(errors.clone()));
    assert!(std::error::Error::source(&err).is_none());
    assert_eq!(
        err.to_string(),
        format!("Invalid fragment definitions: {}", errors[0]),
    );
}

#[test]
fn spread_of_an_undefined_fragment_in_the_operation() {
    assert_eq!(
        compile_err(SIMPLE_SCHEMA, "{ foo { ...Missing } }", None),
        CompileError::Expansion(ExpansionError::UnknownFragment {
            fragment_name: "Missing".to_string(),
        }),
    );
}

#[test]
fn unknown_root_field() {
    assert_eq!(
        compile_err(SIMPLE_SCHEMA, "{ bar }", None),
        CompileError::Expansion(ExpansionError::FieldNotFound {
            parent_type_name: "Query".to_string(),
            field_name: "bar".to_string(),
        }),
    );
}

#[test]
fn compiled_query_is_shareable_across_threads() {
    use rayon::prelude::*;

    let compiled = compile_query(SIMPLE_SCHEMA, "{ foo { a d { e } } }");
    let positions = compiled.field_positions().collect::<Vec<_>>();
    let expansion_sizes = positions
        .par_iter()
        .map(|position| compiled.resolve_info_thunk(position).unwrap().field_expansion().len())
        .collect::<Vec<_>>();

    assert_eq!(expansion_sizes, vec![1, 0, 1, 0]);
}

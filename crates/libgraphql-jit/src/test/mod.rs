use crate::ast;
use crate::compile::CompiledQuery;
use crate::expansion::FieldExpansion;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use std::sync::Arc;

mod value_tests;

pub(crate) const SIMPLE_SCHEMA: &str = "
    type Query {
        foo: Foo
    }
    type Foo {
        a: String
        b: Int
        c: Boolean!
        d: Bar
    }
    type Bar {
        e: String!
        f: Boolean!
    }
";

pub(crate) const INTERFACE_SCHEMA: &str = "
    type Query {
        iBar: IBar
    }
    interface IBar {
        id: ID!
        title: String
    }
    type Bar1 implements IBar {
        id: ID!
        title: String
        b1: Int!
    }
    type Bar2 implements IBar {
        id: ID!
        title: String
        b2: Boolean!
    }
";

pub(crate) const UNION_SCHEMA: &str = "
    type Query {
        uBaz: Baz
    }
    union Baz = Foo | Bar
    type Foo {
        foo: String
    }
    type Bar {
        bar: Int
    }
";

pub(crate) const DOCUMENT_SCHEMA: &str = "
    type Query {
        node(id: ID!): Node!
        elements(like: String!): [DocumentElement!]!
        media(tags: [String!]!): [Media!]!
    }
    interface Node {
        id: ID!
    }
    interface Media {
        url: String!
        tags: [Tag!]
    }
    type Tag implements Node {
        id: ID!
        name: String!
    }
    union DocumentElement = Image | Video | Div
    type Div {
        children: [DocumentElement!]
    }
    type Image implements Node & Media {
        id: ID!
        url: String!
        tags: [Tag!]
        width: Int
    }
    type Video implements Node & Media {
        id: ID!
        url: String!
        tags: [Tag!]
        source: VideoSource
    }
    enum VideoSource {
        YOUTUBE
        VIMEO
    }
";

pub(crate) fn build_schema(sdl: &str) -> Schema {
    SchemaBuilder::from_str(None, sdl)
        .unwrap()
        .build()
        .unwrap()
}

pub(crate) fn parse_query(query_src: &str) -> ast::query::Document {
    ast::query::parse(query_src).unwrap()
}

pub(crate) fn compile_query(sdl: &str, query_src: &str) -> CompiledQuery {
    CompiledQuery::compile(
        Arc::new(build_schema(sdl)),
        &parse_query(query_src),
        None,
    ).unwrap()
}

/// The expansion computed for one field position of `query_src`.
pub(crate) fn position_expansion_json(
    sdl: &str,
    query_src: &str,
    position: &str,
) -> serde_json::Value {
    let compiled = compile_query(sdl, query_src);
    let thunk = compiled
        .resolve_info_thunk(position)
        .unwrap_or_else(|| panic!("no field position named `{position}`"));
    expansion_json(thunk.field_expansion())
}

pub(crate) fn expansion_json(expansion: &FieldExpansion) -> serde_json::Value {
    serde_json::to_value(expansion).unwrap()
}

/// The field nodes selected directly in the root selection set of the
/// document's first operation under `response_key`.
pub(crate) fn root_field_nodes<'a>(
    document: &'a ast::query::Document,
    response_key: &str,
) -> Vec<&'a ast::query::Field> {
    let operation = document
        .definitions
        .iter()
        .find_map(|def| match def {
            ast::query::Definition::Operation(op) => Some(op),
            ast::query::Definition::Fragment(_) => None,
        })
        .unwrap();

    ast::query::operation_selection_set(operation)
        .items
        .iter()
        .filter_map(|selection| match selection {
            ast::query::Selection::Field(field)
                if ast::query::response_key(field) == response_key => Some(field),
            _ => None,
        })
        .collect()
}

pub mod query {
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type Field = graphql_parser::query::Field<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
    pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;

    pub fn parse(query_src: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::parse_query::<String>(query_src)?.into_static())
    }

    /// The name under which a field's value appears in the response: its
    /// alias if one was given, otherwise the field name.
    pub fn response_key(field: &Field) -> &str {
        field.alias.as_deref().unwrap_or(field.name.as_str())
    }

    /// Meta-fields (`__typename`, `__schema`, `__type`) have no definition in
    /// the schema's own types.
    pub fn is_meta_field(field: &Field) -> bool {
        field.name.starts_with("__")
    }

    /// The operation's name, if it was given one. Shorthand `{ ... }`
    /// operations are always anonymous.
    pub fn operation_name(op: &OperationDefinition) -> Option<&str> {
        use graphql_parser::query::OperationDefinition as Op;
        match op {
            Op::Mutation(mutation) => mutation.name.as_deref(),
            Op::Query(query) => query.name.as_deref(),
            Op::SelectionSet(_) => None,
            Op::Subscription(subscription) => subscription.name.as_deref(),
        }
    }

    pub fn operation_selection_set(op: &OperationDefinition) -> &SelectionSet {
        use graphql_parser::query::OperationDefinition as Op;
        match op {
            Op::Mutation(mutation) => &mutation.selection_set,
            Op::Query(query) => &query.selection_set,
            Op::SelectionSet(selection_set) => selection_set,
            Op::Subscription(subscription) => &subscription.selection_set,
        }
    }

    pub fn operation_type(op: &OperationDefinition) -> crate::schema::GraphQLOperationType {
        use crate::schema::GraphQLOperationType;
        use graphql_parser::query::OperationDefinition as Op;
        match op {
            Op::Mutation(_) => GraphQLOperationType::Mutation,
            Op::Query(_) | Op::SelectionSet(_) => GraphQLOperationType::Query,
            Op::Subscription(_) => GraphQLOperationType::Subscription,
        }
    }

    pub fn type_condition_name(cond: &TypeCondition) -> &str {
        match cond {
            graphql_parser::query::TypeCondition::On(type_name) => type_name.as_str(),
        }
    }
}

pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type UnionType = graphql_parser::schema::UnionType<'static, String>;

    pub fn parse(schema_src: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::parse_schema::<String>(schema_src)?.into_static())
    }
}

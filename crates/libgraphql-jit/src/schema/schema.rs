use crate::schema::GraphQLOperationType;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Represents an immutable GraphQL schema whose type references have all
/// been checked to resolve.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) interface_implementations: HashMap<String, Vec<String>>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`], in definition order.
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as the built-in scalar types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// The names of every object type that implements the named interface,
    /// directly or transitively through another interface, in the order those
    /// object types were defined.
    ///
    /// Returns an empty list for names that are not interfaces.
    pub fn implementing_object_type_names(&self, interface_name: &str) -> Vec<&str> {
        self.interface_implementations
            .get(interface_name)
            .map(|names| names.iter().map(|name| name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    ///
    /// This factors in any `schema { mutation: ... }` override, so prefer it
    /// over looking for a type named `"Mutation"`.
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type
            .as_ref()
            .and_then(|type_name| self.types.get(type_name))
    }

    /// Returns this [`Schema`]'s Query root operation type.
    pub fn query_type(&self) -> &GraphQLType {
        // SchemaBuilder::build() refuses to produce a Schema whose query type
        // is missing.
        &self.types[self.query_type.as_str()]
    }

    /// The name of the root type for `operation_type` operations, if the
    /// schema defines one.
    pub fn root_operation_type_name(
        &self,
        operation_type: GraphQLOperationType,
    ) -> Option<&str> {
        match operation_type {
            GraphQLOperationType::Mutation => self.mutation_type.as_deref(),
            GraphQLOperationType::Query => Some(self.query_type.as_str()),
            GraphQLOperationType::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type
            .as_ref()
            .and_then(|type_name| self.types.get(type_name))
    }
}

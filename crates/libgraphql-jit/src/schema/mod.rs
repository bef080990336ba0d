#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod type_oracle;
mod type_validation_error;

pub use schema::Schema;
pub use schema_builder::GraphQLOperationType;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use type_oracle::TypeOracle;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;

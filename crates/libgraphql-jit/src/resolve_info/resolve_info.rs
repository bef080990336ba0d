use crate::Value;
use crate::VariableValues;
use crate::ast;
use crate::expansion::FieldExpansion;
use crate::operation::FragmentTable;
use crate::resolve_info::ResolveInfoContext;
use crate::resolve_info::ResponsePath;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use std::sync::Arc;

/// The context record handed to a field resolver.
#[derive(Clone, Debug)]
pub struct ResolveInfo {
    pub(super) context: Arc<ResolveInfoContext>,
    pub(super) field_expansion: Arc<FieldExpansion>,
    pub(super) path: ResponsePath,
    pub(super) root_value: Arc<Value>,
    pub(super) variable_values: Arc<VariableValues>,
}
impl ResolveInfo {
    /// The sub-fields requested below this field, per possible concrete type
    /// of its return type. Empty for leaf-typed fields.
    pub fn field_expansion(&self) -> &FieldExpansion {
        &self.field_expansion
    }

    pub fn field_name(&self) -> &str {
        &self.context.field_name
    }

    pub fn field_nodes(&self) -> &[ast::query::Field] {
        &self.context.field_nodes
    }

    pub fn fragments(&self) -> &FragmentTable {
        &self.context.fragments
    }

    pub fn operation(&self) -> &ast::query::OperationDefinition {
        &self.context.operation
    }

    pub fn parent_type(&self) -> Option<&GraphQLType> {
        self.context.schema.get_type(&self.context.parent_type_name)
    }

    pub fn parent_type_name(&self) -> &str {
        &self.context.parent_type_name
    }

    pub fn path(&self) -> &ResponsePath {
        &self.path
    }

    pub fn return_type(&self) -> &TypeAnnotation {
        &self.context.return_type
    }

    pub fn root_value(&self) -> &Value {
        &self.root_value
    }

    pub fn schema(&self) -> &Schema {
        &self.context.schema
    }

    pub fn variable_values(&self) -> &VariableValues {
        &self.variable_values
    }
}

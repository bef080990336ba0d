use crate::ast;
use crate::operation::FragmentTable;
use crate::schema::Schema;
use crate::types::TypeAnnotation;
use std::sync::Arc;

/// Everything about a field position that is fixed at compile time.
#[derive(Clone, Debug)]
pub struct ResolveInfoContext {
    pub schema: Arc<Schema>,
    pub fragments: Arc<FragmentTable>,
    pub operation: Arc<ast::query::OperationDefinition>,

    /// The object type the field is being resolved on.
    pub parent_type_name: String,
    pub field_name: String,

    /// The field's declared return type, wrappers included.
    pub return_type: TypeAnnotation,

    /// Every field node that selects this position's response key.
    pub field_nodes: Arc<Vec<ast::query::Field>>,
}

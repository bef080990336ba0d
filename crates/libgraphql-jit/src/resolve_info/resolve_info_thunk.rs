use crate::Value;
use crate::VariableValues;
use crate::expansion::ExpansionError;
use crate::expansion::FieldExpansion;
use crate::expansion::SelectionExpander;
use crate::resolve_info::ResolveInfo;
use crate::resolve_info::ResolveInfoContext;
use crate::resolve_info::ResponsePath;
use crate::schema::TypeOracle;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ExpansionError>;

/// Compile-time half of [`ResolveInfo`] construction for one field position.
///
/// [`ResolveInfoThunk::new()`] runs the type lookups and selection expansion;
/// [`ResolveInfoThunk::resolve_info()`] then only assembles a record, so it
/// is safe to call once per resolver invocation (including once per list
/// element).
#[derive(Clone, Debug)]
pub struct ResolveInfoThunk {
    context: Arc<ResolveInfoContext>,
    field_expansion: Arc<FieldExpansion>,
}
impl ResolveInfoThunk {
    pub fn new(context: ResolveInfoContext) -> Result<Self> {
        let schema = context.schema.as_ref();

        // Fails for a field the parent type does not define.
        schema.field_definition(&context.parent_type_name, &context.field_name)?;

        let return_type_name = schema.resolve_return_type_name(&context.return_type)?;
        let field_expansion = SelectionExpander::new(schema, context.fragments.as_ref())
            .expand_field(return_type_name, context.field_nodes.iter())?;

        log::debug!(
            "Expanded `{}.{}` over {} possible type(s)",
            context.parent_type_name,
            context.field_name,
            field_expansion.len(),
        );

        Ok(Self {
            context: Arc::new(context),
            field_expansion: Arc::new(field_expansion),
        })
    }

    pub fn context(&self) -> &ResolveInfoContext {
        &self.context
    }

    pub fn field_expansion(&self) -> &FieldExpansion {
        &self.field_expansion
    }

    pub fn resolve_info(
        &self,
        root_value: Arc<Value>,
        variable_values: Arc<VariableValues>,
        path: ResponsePath,
    ) -> ResolveInfo {
        ResolveInfo {
            context: Arc::clone(&self.context),
            field_expansion: Arc::clone(&self.field_expansion),
            path,
            root_value,
            variable_values,
        }
    }
}

/// Free-function form of [`ResolveInfoThunk::new()`].
pub fn create_resolve_info_thunk(context: ResolveInfoContext) -> Result<ResolveInfoThunk> {
    ResolveInfoThunk::new(context)
}

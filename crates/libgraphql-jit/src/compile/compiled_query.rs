use crate::ast;
use crate::compile::CompileError;
use crate::compile::field_collector::FieldCollector;
use crate::operation::FragmentTable;
use crate::resolve_info::ResolveInfoContext;
use crate::resolve_info::ResolveInfoThunk;
use crate::schema::GraphQLOperationType;
use crate::schema::Schema;
use crate::schema::TypeOracle;
use crate::types::GraphQLTypeKind;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, CompileError>;

/// One operation of a document, compiled against a schema into a
/// [`ResolveInfoThunk`] per field position.
///
/// Field positions are keyed by the object type and response key of every
/// field along the way from the root, joined by `/`. For example
/// `Query.me/User.friends/User.name` is the position of `name` in
/// `{ me { friends { name } } }`.
///
/// ```
/// use libgraphql_jit::ast;
/// use libgraphql_jit::compile::CompiledQuery;
/// use libgraphql_jit::schema::SchemaBuilder;
/// use std::sync::Arc;
///
/// let schema = SchemaBuilder::from_str(None, "
///     type Query { me: User }
///     type User { name: String, friends: [User!] }
/// ").unwrap().build().unwrap();
///
/// let document = ast::query::parse("{ me { friends { name } } }").unwrap();
/// let compiled = CompiledQuery::compile(Arc::new(schema), &document, None).unwrap();
///
/// let me = compiled.resolve_info_thunk("Query.me").unwrap();
/// let user = me.field_expansion().get("User").unwrap();
/// assert!(user.get("friends").unwrap().as_nested().is_some());
/// assert!(compiled.resolve_info_thunk("Query.me/User.friends/User.name").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct CompiledQuery {
    fragments: Arc<FragmentTable>,
    operation: Arc<ast::query::OperationDefinition>,
    operation_type: GraphQLOperationType,
    root_type_name: String,
    schema: Arc<Schema>,
    thunks: IndexMap<String, ResolveInfoThunk>,
}
impl CompiledQuery {
    /// Compile the operation named `operation_name` (or the document's only
    /// operation when no name is given).
    ///
    /// Any failure aborts the whole compilation.
    pub fn compile(
        schema: Arc<Schema>,
        document: &ast::query::Document,
        operation_name: Option<&str>,
    ) -> Result<Self> {
        let operation = Arc::new(select_operation(document, operation_name)?.clone());
        let fragments = Arc::new(FragmentTable::from_document(document)?);

        let operation_type = ast::query::operation_type(&operation);
        let root_type_name = schema
            .root_operation_type_name(operation_type)
            .ok_or(CompileError::MissingRootOperationType { operation_type })?
            .to_string();

        log::debug!(
            "Compiling {} operation `{}` rooted at `{root_type_name}`",
            operation_type.keyword(),
            ast::query::operation_name(&operation).unwrap_or("<anonymous>"),
        );

        let mut thunks = IndexMap::new();
        let walker = PositionWalker {
            collector: FieldCollector::new(&schema, &fragments),
            fragments: &fragments,
            operation: &operation,
            schema: &schema,
        };
        walker.walk(
            &root_type_name,
            &[ast::query::operation_selection_set(&operation)],
            None,
            &mut thunks,
        )?;

        log::debug!("Compiled {} field position(s)", thunks.len());
        Ok(Self {
            fragments,
            operation,
            operation_type,
            root_type_name,
            schema,
            thunks,
        })
    }

    pub fn field_positions(&self) -> impl Iterator<Item = &str> {
        self.thunks.keys().map(String::as_str)
    }

    pub fn fragments(&self) -> &Arc<FragmentTable> {
        &self.fragments
    }

    pub fn operation(&self) -> &Arc<ast::query::OperationDefinition> {
        &self.operation
    }

    pub fn operation_type(&self) -> GraphQLOperationType {
        self.operation_type
    }

    pub fn resolve_info_thunk(&self, position: &str) -> Option<&ResolveInfoThunk> {
        self.thunks.get(position)
    }

    pub fn resolve_info_thunks(&self) -> impl Iterator<Item = (&str, &ResolveInfoThunk)> {
        self.thunks.iter().map(|(position, thunk)| (position.as_str(), thunk))
    }

    pub fn root_type_name(&self) -> &str {
        &self.root_type_name
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }
}

fn select_operation<'d>(
    document: &'d ast::query::Document,
    operation_name: Option<&str>,
) -> Result<&'d ast::query::OperationDefinition> {
    let operations = document
        .definitions
        .iter()
        .filter_map(|def| match def {
            ast::query::Definition::Operation(op) => Some(op),
            ast::query::Definition::Fragment(_) => None,
        })
        .collect::<Vec<_>>();

    if operations.is_empty() {
        return Err(CompileError::NoOperations);
    }

    match operation_name {
        Some(operation_name) => operations
            .into_iter()
            .find(|op| ast::query::operation_name(op) == Some(operation_name))
            .ok_or_else(|| CompileError::UnknownOperation {
                operation_name: operation_name.to_string(),
            }),

        None => match operations.as_slice() {
            [op] => Ok(*op),
            _ => Err(CompileError::OperationNameRequired {
                operation_count: operations.len(),
            }),
        },
    }
}

struct PositionWalker<'a> {
    collector: FieldCollector<'a>,
    fragments: &'a Arc<FragmentTable>,
    operation: &'a Arc<ast::query::OperationDefinition>,
    schema: &'a Arc<Schema>,
}
impl<'a> PositionWalker<'a> {
    fn walk(
        &self,
        object_type_name: &str,
        selection_sets: &[&'a ast::query::SelectionSet],
        parent_position: Option<&str>,
        thunks: &mut IndexMap<String, ResolveInfoThunk>,
    ) -> Result<()> {
        let schema: &Schema = self.schema;
        let grouped = self.collector.collect_fields(object_type_name, selection_sets)?;

        for (response_key, field_nodes) in grouped {
            let Some(first_node) = field_nodes.first() else {
                continue;
            };
            let field_name = first_node.name.as_str();
            let field_def = schema.field_definition(object_type_name, field_name)?;
            let position = match parent_position {
                Some(parent_position) =>
                    format!("{parent_position}/{object_type_name}.{response_key}"),
                None => format!("{object_type_name}.{response_key}"),
            };

            let thunk = ResolveInfoThunk::new(ResolveInfoContext {
                schema: Arc::clone(self.schema),
                fragments: Arc::clone(self.fragments),
                operation: Arc::clone(self.operation),
                parent_type_name: object_type_name.to_string(),
                field_name: field_name.to_string(),
                return_type: field_def.type_annotation().clone(),
                field_nodes: Arc::new(
                    field_nodes.iter().map(|field| (*field).clone()).collect(),
                ),
            })?;
            thunks.insert(position.clone(), thunk);

            let return_type_name = schema.resolve_return_type_name(field_def.type_annotation())?;
            if schema.is_leaf_type(return_type_name)? {
                continue;
            }

            let sub_selection_sets = field_nodes
                .iter()
                .copied()
                .map(|field| &field.selection_set)
                .collect::<Vec<_>>();
            for type_name in schema.possible_concrete_types(return_type_name)? {
                if !matches!(schema.type_kind(type_name)?, GraphQLTypeKind::Object) {
                    continue;
                }
                self.walk(type_name, &sub_selection_sets, Some(&position), thunks)?;
            }
        }
        Ok(())
    }
}

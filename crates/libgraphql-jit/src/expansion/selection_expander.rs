use crate::ast;
use crate::expansion::ExpansionError;
use crate::expansion::FieldExpansion;
use crate::expansion::SelectionExpansion;
use crate::operation::FragmentTable;
use crate::schema::TypeOracle;

type Result<T> = std::result::Result<T, ExpansionError>;

/// Walks the selection sets of a field (and, recursively, of its sub-fields)
/// and attributes every selected response key to the concrete types it
/// applies to.
///
/// ```
/// use libgraphql_jit::ast;
/// use libgraphql_jit::expansion::SelectionExpander;
/// use libgraphql_jit::operation::FragmentTable;
/// use libgraphql_jit::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { me: User } type User { id: ID, name: String }")
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let document = ast::query::parse("{ me { id name } }").unwrap();
/// let ast::query::Definition::Operation(
///     ast::query::OperationDefinition::SelectionSet(root),
/// ) = &document.definitions[0] else { unreachable!() };
/// let ast::query::Selection::Field(me) = &root.items[0] else {
///     unreachable!()
/// };
///
/// let expander = SelectionExpander::new(&schema, FragmentTable::empty());
/// let expansion = expander.expand_field("User", [me]).unwrap();
///
/// let user = expansion.get("User").unwrap();
/// assert!(user.get("id").unwrap().is_leaf());
/// assert!(user.get("name").unwrap().is_leaf());
/// ```
pub struct SelectionExpander<'a, TOracle: TypeOracle + ?Sized> {
    fragments: &'a FragmentTable,
    oracle: &'a TOracle,
}
impl<'a, TOracle: TypeOracle + ?Sized> SelectionExpander<'a, TOracle> {
    pub fn new(oracle: &'a TOracle, fragments: &'a FragmentTable) -> Self {
        Self {
            fragments,
            oracle,
        }
    }

    /// Expands the merged selection sets of `field_nodes` (every AST node
    /// that contributes to one response key) for a field returning
    /// `return_type_name`.
    ///
    /// The result carries an entry for every possible concrete type of
    /// `return_type_name`, even types no selection applies to. Leaf return
    /// types expand to an empty [`FieldExpansion`].
    pub fn expand_field<'f>(
        &self,
        return_type_name: &str,
        field_nodes: impl IntoIterator<Item = &'f ast::query::Field>,
    ) -> Result<FieldExpansion> {
        if self.oracle.is_leaf_type(return_type_name)? {
            return Ok(FieldExpansion::new());
        }

        let possible_types = self.oracle.possible_concrete_types(return_type_name)?;
        let mut expansion = FieldExpansion::with_type_names(possible_types.iter().copied());

        for field_node in field_nodes {
            if field_node.selection_set.items.is_empty() {
                return Err(ExpansionError::MissingSelectionSet {
                    type_name: return_type_name.to_string(),
                    field_name: field_node.name.to_string(),
                });
            }
            self.expand_selection_set(
                &possible_types,
                &field_node.selection_set,
                &mut expansion,
            )?;
        }

        Ok(expansion)
    }

    /// Attributes each selection in `selection_set` to the `candidate_types`
    /// it applies to, writing into `expansion`.
    ///
    /// Type conditions (on inline fragments and fragment definitions)
    /// replace the candidate set for their sub-selections. Only concrete
    /// types already present in `expansion` are ever written to.
    pub fn expand_selection_set(
        &self,
        candidate_types: &[&str],
        selection_set: &ast::query::SelectionSet,
        expansion: &mut FieldExpansion,
    ) -> Result<()> {
        for selection in &selection_set.items {
            match selection {
                ast::query::Selection::Field(field) =>
                    self.expand_field_selection(candidate_types, field, expansion)?,

                ast::query::Selection::InlineFragment(inline_fragment) =>
                    match &inline_fragment.type_condition {
                        Some(type_condition) => {
                            let narrowed_types = self.oracle.possible_concrete_types(
                                ast::query::type_condition_name(type_condition),
                            )?;
                            self.expand_selection_set(
                                &narrowed_types,
                                &inline_fragment.selection_set,
                                expansion,
                            )?;
                        },
                        None => self.expand_selection_set(
                            candidate_types,
                            &inline_fragment.selection_set,
                            expansion,
                        )?,
                    },

                ast::query::Selection::FragmentSpread(fragment_spread) => {
                    let fragment_name = fragment_spread.fragment_name.as_str();
                    let fragment = self.fragments.get(fragment_name).ok_or_else(|| {
                        ExpansionError::UnknownFragment {
                            fragment_name: fragment_name.to_string(),
                        }
                    })?;
                    let narrowed_types = self.oracle.possible_concrete_types(
                        ast::query::type_condition_name(&fragment.type_condition),
                    )?;
                    self.expand_selection_set(
                        &narrowed_types,
                        &fragment.selection_set,
                        expansion,
                    )?;
                },
            }
        }
        Ok(())
    }

    fn expand_field_selection(
        &self,
        candidate_types: &[&str],
        field: &ast::query::Field,
        expansion: &mut FieldExpansion,
    ) -> Result<()> {
        if ast::query::is_meta_field(field) {
            log::trace!("Skipping meta-field `{}` during expansion", field.name);
            return Ok(());
        }

        let response_key = ast::query::response_key(field);
        let selection = if field.selection_set.items.is_empty() {
            SelectionExpansion::Leaf
        } else {
            // Fields of the same name on every candidate share a return type
            // in a valid document, so any one candidate can answer for all.
            let Some(representative_type) = candidate_types.first() else {
                return Ok(());
            };
            let return_type_name = self.oracle.field_return_type_name(
                representative_type,
                field.name.as_str(),
            )?;
            SelectionExpansion::Nested(self.expand_field(return_type_name, [field])?)
        };

        for type_name in candidate_types {
            match expansion.type_expansion_mut(type_name) {
                Some(type_expansion) =>
                    type_expansion.absorb_selection(response_key, selection.clone())?,
                None => log::trace!(
                    "`{type_name}` is not a possible type at this position; dropping \
                    selection of `{response_key}`",
                ),
            }
        }
        Ok(())
    }
}

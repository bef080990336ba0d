use crate::ast;
use crate::expansion::ExpansionError;
use crate::operation::FragmentTable;
use crate::schema::Schema;
use crate::schema::TypeOracle;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, ExpansionError>;

/// Field nodes grouped by response key, in first-seen order.
pub(super) type GroupedFields<'a> = IndexMap<&'a str, Vec<&'a ast::query::Field>>;

/// Groups the fields a set of selection sets requests on one concrete object
/// type, following inline fragments and fragment spreads whose type condition
/// applies to that object type.
pub(super) struct FieldCollector<'a> {
    fragments: &'a FragmentTable,
    schema: &'a Schema,
}
impl<'a> FieldCollector<'a> {
    pub fn new(schema: &'a Schema, fragments: &'a FragmentTable) -> Self {
        Self {
            fragments,
            schema,
        }
    }

    pub fn collect_fields(
        &self,
        object_type_name: &str,
        selection_sets: &[&'a ast::query::SelectionSet],
    ) -> Result<GroupedFields<'a>> {
        let mut grouped = IndexMap::new();
        let mut visited_fragments = HashSet::new();
        for selection_set in selection_sets.iter().copied() {
            self.collect_from_selection_set(
                object_type_name,
                selection_set,
                &mut grouped,
                &mut visited_fragments,
            )?;
        }
        Ok(grouped)
    }

    fn collect_from_selection_set(
        &self,
        object_type_name: &str,
        selection_set: &'a ast::query::SelectionSet,
        grouped: &mut GroupedFields<'a>,
        visited_fragments: &mut HashSet<&'a str>,
    ) -> Result<()> {
        for selection in &selection_set.items {
            match selection {
                ast::query::Selection::Field(field) => {
                    if ast::query::is_meta_field(field) {
                        log::trace!(
                            "No field position for meta-field `{}` on `{object_type_name}`",
                            field.name,
                        );
                        continue;
                    }
                    grouped
                        .entry(ast::query::response_key(field))
                        .or_insert_with(Vec::new)
                        .push(field);
                },

                ast::query::Selection::FragmentSpread(spread) => {
                    let fragment_name = spread.fragment_name.as_str();
                    if !visited_fragments.insert(fragment_name) {
                        continue;
                    }
                    let fragment = self.fragments.get(fragment_name).ok_or_else(|| {
                        ExpansionError::UnknownFragment {
                            fragment_name: fragment_name.to_string(),
                        }
                    })?;
                    let type_condition =
                        ast::query::type_condition_name(&fragment.type_condition);
                    if self.type_condition_applies(object_type_name, type_condition)? {
                        self.collect_from_selection_set(
                            object_type_name,
                            &fragment.selection_set,
                            grouped,
                            visited_fragments,
                        )?;
                    }
                },

                ast::query::Selection::InlineFragment(inline_fragment) => {
                    let applies = match &inline_fragment.type_condition {
                        Some(type_condition) => self.type_condition_applies(
                            object_type_name,
                            ast::query::type_condition_name(type_condition),
                        )?,
                        None => true,
                    };
                    if applies {
                        self.collect_from_selection_set(
                            object_type_name,
                            &inline_fragment.selection_set,
                            grouped,
                            visited_fragments,
                        )?;
                    }
                },
            }
        }
        Ok(())
    }

    /// An object type satisfies a type condition naming itself, an interface
    /// it implements, or a union it belongs to.
    fn type_condition_applies(
        &self,
        object_type_name: &str,
        type_condition: &str,
    ) -> Result<bool> {
        let applies = self
            .schema
            .possible_concrete_types(type_condition)?
            .into_iter()
            .any(|type_name| type_name == object_type_name);
        if !applies {
            log::trace!("`{type_condition}` does not apply to `{object_type_name}`");
        }
        Ok(applies)
    }
}

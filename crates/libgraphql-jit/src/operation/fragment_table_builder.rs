use crate::ast;
use crate::loc;
use crate::operation::FragmentTable;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<FragmentTableBuildError>>;

/// Collects fragment definitions and validates them into a
/// [`FragmentTable`].
///
/// ```
/// use libgraphql_jit::ast;
/// use libgraphql_jit::operation::FragmentTableBuilder;
///
/// let document = ast::query::parse(
///     "fragment UserFields on User { id ...Names } \
///      fragment Names on User { name }",
/// ).unwrap();
///
/// let mut builder = FragmentTableBuilder::new();
/// builder.add_from_document(&document, None).unwrap();
/// let table = builder.build().unwrap();
///
/// assert_eq!(table.fragments().len(), 2);
/// assert!(table.get("Names").is_some());
/// ```
#[derive(Debug)]
pub struct FragmentTableBuilder {
    def_locations: IndexMap<String, loc::FilePosition>,
    fragments: IndexMap<String, ast::query::FragmentDefinition>,
}

impl FragmentTableBuilder {
    pub fn new() -> Self {
        Self {
            def_locations: IndexMap::new(),
            fragments: IndexMap::new(),
        }
    }

    /// Add a single fragment definition.
    ///
    /// Returns an error if a fragment with the same name was already added.
    pub fn add_fragment(
        &mut self,
        fragment_def: ast::query::FragmentDefinition,
        file_path: Option<&Path>,
    ) -> std::result::Result<(), FragmentTableBuildError> {
        let def_location = loc::FilePosition::from_pos(file_path, fragment_def.position);

        if let Some(first_def_location) = self.def_locations.get(&fragment_def.name) {
            return Err(FragmentTableBuildError::DuplicateFragmentDefinition {
                fragment_name: fragment_def.name,
                first_def_location: first_def_location.clone(),
                second_def_location: def_location,
            });
        }

        self.def_locations.insert(fragment_def.name.to_string(), def_location);
        self.fragments.insert(fragment_def.name.to_string(), fragment_def);
        Ok(())
    }

    /// Add every fragment definition in `document`. Operation definitions are
    /// ignored.
    pub fn add_from_document(
        &mut self,
        document: &ast::query::Document,
        file_path: Option<&Path>,
    ) -> Result<()> {
        let mut errors = vec![];
        for def in &document.definitions {
            if let ast::query::Definition::Fragment(fragment_def) = def
                && let Err(err) = self.add_fragment(fragment_def.clone(), file_path) {
                errors.push(err);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(())
    }

    /// Validate the collected fragments and produce the [`FragmentTable`].
    ///
    /// All cycle and undefined-reference errors are reported at once. Cycles
    /// that are rotations of one another (`A → B → A` and `B → A → B`) are
    /// reported once.
    pub fn build(self) -> Result<FragmentTable> {
        let mut errors = self.validate_no_cycles();
        errors.extend(self.validate_fragment_references());

        if !errors.is_empty() {
            return Err(errors);
        }

        log::debug!("Built a fragment table with {} fragment(s)", self.fragments.len());
        Ok(FragmentTable {
            fragments: self.fragments,
        })
    }

    fn validate_no_cycles(&self) -> Vec<FragmentTableBuildError> {
        let mut errors = vec![];
        let mut seen_normalized_cycles = HashSet::new();

        for fragment_name in self.fragments.keys() {
            let mut path = vec![];
            let mut visiting = HashSet::new();
            self.check_fragment_cycles(
                fragment_name,
                &mut path,
                &mut visiting,
                &mut errors,
                &mut seen_normalized_cycles,
            );
        }

        errors
    }

    fn check_fragment_cycles(
        &self,
        fragment_name: &str,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        errors: &mut Vec<FragmentTableBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        if visiting.contains(fragment_name) {
            path.push(fragment_name.to_string());
            let cycle = Self::trim_to_cycle(path);
            if seen_normalized.insert(Self::normalize_cycle(&cycle)) {
                errors.push(FragmentTableBuildError::FragmentCycleDetected {
                    cycle_path: cycle,
                });
            }
            path.pop();
            return;
        }

        // Undefined; reported by validate_fragment_references()
        let Some(fragment) = self.fragments.get(fragment_name) else {
            return;
        };

        path.push(fragment_name.to_string());
        visiting.insert(fragment_name.to_string());
        self.check_selection_set_cycles(
            &fragment.selection_set,
            path,
            visiting,
            errors,
            seen_normalized,
        );
        visiting.remove(fragment_name);
        path.pop();
    }

    fn check_selection_set_cycles(
        &self,
        selection_set: &ast::query::SelectionSet,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        errors: &mut Vec<FragmentTableBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::query::Selection::Field(field) => self.check_selection_set_cycles(
                    &field.selection_set,
                    path,
                    visiting,
                    errors,
                    seen_normalized,
                ),

                ast::query::Selection::FragmentSpread(spread) => self.check_fragment_cycles(
                    spread.fragment_name.as_str(),
                    path,
                    visiting,
                    errors,
                    seen_normalized,
                ),

                ast::query::Selection::InlineFragment(inline) => self.check_selection_set_cycles(
                    &inline.selection_set,
                    path,
                    visiting,
                    errors,
                    seen_normalized,
                ),
            }
        }
    }

    fn validate_fragment_references(&self) -> Vec<FragmentTableBuildError> {
        let mut errors = vec![];
        for (fragment_name, fragment) in &self.fragments {
            self.check_fragment_refs_in_selection_set(
                fragment_name,
                &fragment.selection_set,
                &mut errors,
            );
        }
        errors
    }

    fn check_fragment_refs_in_selection_set(
        &self,
        parent_fragment: &str,
        selection_set: &ast::query::SelectionSet,
        errors: &mut Vec<FragmentTableBuildError>,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::query::Selection::Field(field) => self.check_fragment_refs_in_selection_set(
                    parent_fragment,
                    &field.selection_set,
                    errors,
                ),

                ast::query::Selection::FragmentSpread(spread) => {
                    if !self.fragments.contains_key(&spread.fragment_name) {
                        errors.push(FragmentTableBuildError::UndefinedFragmentReference {
                            fragment_name: parent_fragment.to_string(),
                            undefined_fragment: spread.fragment_name.to_string(),
                            reference_location: loc::FilePosition::from_pos(
                                None,
                                spread.position,
                            ),
                        });
                    }
                },

                ast::query::Selection::InlineFragment(inline) =>
                    self.check_fragment_refs_in_selection_set(
                        parent_fragment,
                        &inline.selection_set,
                        errors,
                    ),
            }
        }
    }

    /// `path` ends with a name that appears earlier in it; drop everything
    /// before that earlier occurrence so only the cycle itself remains.
    fn trim_to_cycle(path: &[String]) -> Vec<String> {
        let Some(last) = path.last() else {
            return vec![];
        };
        let start = path.iter().position(|name| name == last).unwrap_or(0);
        path[start..].to_vec()
    }

    /// Rotate a closed cycle (`[A, B, C, A]`) so it starts at its
    /// lexicographically smallest name.
    fn normalize_cycle(cycle: &[String]) -> Vec<String> {
        if cycle.is_empty() {
            return vec![];
        }

        let without_repeat = &cycle[..cycle.len() - 1];
        let min_idx = without_repeat
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        let mut normalized = Vec::with_capacity(cycle.len());
        normalized.extend_from_slice(&without_repeat[min_idx..]);
        normalized.extend_from_slice(&without_repeat[..min_idx]);
        if let Some(first) = normalized.first().cloned() {
            normalized.push(first);
        }
        normalized
    }
}

impl Default for FragmentTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentTableBuildError {
    #[error("Duplicate fragment definition: `{fragment_name}`")]
    DuplicateFragmentDefinition {
        fragment_name: String,
        first_def_location: loc::FilePosition,
        second_def_location: loc::FilePosition,
    },

    #[error("Fragment cycle detected: {}", .cycle_path.join(" → "))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error("Fragment `{fragment_name}` spreads undefined fragment `{undefined_fragment}`")]
    UndefinedFragmentReference {
        fragment_name: String,
        undefined_fragment: String,
        reference_location: loc::FilePosition,
    },
}

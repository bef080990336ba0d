use crate::ast;
use crate::operation::FragmentTableBuildError;
use crate::operation::FragmentTableBuilder;
use indexmap::IndexMap;
use std::sync::OnceLock;

fn empty_fragment_table() -> &'static FragmentTable {
    static EMPTY_FRAGMENT_TABLE: OnceLock<FragmentTable> = OnceLock::new();
    EMPTY_FRAGMENT_TABLE.get_or_init(|| FragmentTable {
        fragments: IndexMap::new(),
    })
}

/// Immutable fragment name -> fragment definition lookup for one document.
///
/// A `FragmentTable` produced by [`FragmentTableBuilder::build()`] has no
/// duplicate names, no spreads of undefined fragments, and no spread cycles.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentTable {
    pub(super) fragments: IndexMap<String, ast::query::FragmentDefinition>,
}

impl FragmentTable {
    pub fn builder() -> FragmentTableBuilder {
        FragmentTableBuilder::new()
    }

    pub fn empty() -> &'static FragmentTable {
        empty_fragment_table()
    }

    pub fn fragments(&self) -> &IndexMap<String, ast::query::FragmentDefinition> {
        &self.fragments
    }

    /// Collect and validate every fragment definition in `document`.
    pub fn from_document(
        document: &ast::query::Document,
    ) -> Result<Self, Vec<FragmentTableBuildError>> {
        let mut builder = FragmentTableBuilder::new();
        builder.add_from_document(document, None)?;
        builder.build()
    }

    pub fn get(&self, fragment_name: &str) -> Option<&ast::query::FragmentDefinition> {
        self.fragments.get(fragment_name)
    }
}

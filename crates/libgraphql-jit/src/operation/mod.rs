mod fragment_table;
mod fragment_table_builder;

pub use fragment_table::FragmentTable;
pub use fragment_table_builder::FragmentTableBuildError;
pub use fragment_table_builder::FragmentTableBuilder;

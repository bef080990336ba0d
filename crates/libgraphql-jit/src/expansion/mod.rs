//! Compile-time expansion of a field's selections into a per-concrete-type
//! tree of requested sub-fields.
//!
//! A [`FieldExpansion`] is computed once per field position by the
//! [`SelectionExpander`] and is then shared, read-only, by every resolver
//! invocation for that position.

mod expansion_error;
mod field_expansion;
mod selection_expander;

pub use expansion_error::ExpansionError;
pub use field_expansion::FieldExpansion;
pub use field_expansion::SelectionExpansion;
pub use field_expansion::TypeExpansion;
pub use field_expansion::merge_field_expansions;
pub use selection_expander::SelectionExpander;

#[cfg(test)]
mod tests;

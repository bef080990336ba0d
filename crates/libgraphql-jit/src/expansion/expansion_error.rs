use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// Internal-consistency failures raised while expanding selections.
///
/// None of these can occur when the document was validated against the
/// schema; each one aborts compilation of the enclosing query.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExpansionError {
    #[error("The `{field_name}` field is not defined on the `{parent_type_name}` type")]
    FieldNotFound {
        parent_type_name: String,
        field_name: String,
    },

    #[error(
        "Cannot merge a leaf selection with a nested selection under the \
        `{response_key}` response key"
    )]
    MismatchedSelectionShape {
        response_key: String,
    },

    #[error(
        "The `{field_name}` field returns the composite type `{type_name}` but \
        was selected without a selection set"
    )]
    MissingSelectionSet {
        type_name: String,
        field_name: String,
    },

    #[error("Reference to a type named `{type_name}` that is not defined in the schema")]
    SchemaIntegrity {
        type_name: String,
    },

    #[error("Expected `{type_name}` to be {expected}, but it is a {type_kind} type")]
    TypeMismatch {
        type_name: String,
        type_kind: GraphQLTypeKind,
        expected: &'static str,
    },

    #[error("Fragment spread references an undefined fragment: `{fragment_name}`")]
    UnknownFragment {
        fragment_name: String,
    },
}

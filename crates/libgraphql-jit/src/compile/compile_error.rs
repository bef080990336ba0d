use crate::expansion::ExpansionError;
use crate::operation::FragmentTableBuildError;
use crate::schema::GraphQLOperationType;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CompileError {
    #[error(transparent)]
    Expansion(#[from] ExpansionError),

    #[error("Invalid fragment definitions: {}", format_fragment_errors(.0))]
    InvalidFragments(Vec<FragmentTableBuildError>),

    #[error("The schema does not define a root type for {} operations", .operation_type.keyword())]
    MissingRootOperationType {
        operation_type: GraphQLOperationType,
    },

    #[error("The document does not contain any operations")]
    NoOperations,

    #[error(
        "The document contains {operation_count} operations, so the operation \
        to compile must be named"
    )]
    OperationNameRequired {
        operation_count: usize,
    },

    #[error("The document does not contain an operation named `{operation_name}`")]
    UnknownOperation {
        operation_name: String,
    },
}

impl From<Vec<FragmentTableBuildError>> for CompileError {
    fn from(errors: Vec<FragmentTableBuildError>) -> Self {
        Self::InvalidFragments(errors)
    }
}

fn format_fragment_errors(errors: &[FragmentTableBuildError]) -> String {
    errors
        .iter()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

use crate::loc;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The `{type_name}` type implements `{non_interface_type_name}`, which \
        is not an interface type"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
        loc: loc::FilePosition,
    },

    #[error(
        "The `{type_name}` type implements `{undefined_interface_name}`, which \
        is not defined in the schema"
    )]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
        loc: loc::FilePosition,
    },

    #[error(
        "Union members must be object types, but the `{union_type_name}` union \
        lists `{member_type_name}` which is a {member_type_kind} type"
    )]
    InvalidUnionMemberTypeKind {
        location: loc::FilePosition,
        union_type_name: String,
        member_type_name: String,
        member_type_kind: GraphQLTypeKind,
    },

    #[error("Reference to a type named `{undefined_type_name}` that is not defined ({ref_location})")]
    UndefinedTypeName {
        ref_location: loc::FilePosition,
        undefined_type_name: String,
    },
}

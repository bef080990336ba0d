use crate::loc;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    /// If this type is an [`InterfaceType`], unwrap and return it.
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// If this type is an [`ObjectType`], unwrap and return it.
    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// If this type is a [`UnionType`], unwrap and return it.
    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String =>
                loc::SchemaDefLocation::GraphQLBuiltIn,
            Self::Enum(t) =>
                loc::SchemaDefLocation::Schema(t.def_location.clone()),
            Self::InputObject(t) =>
                loc::SchemaDefLocation::Schema(t.def_location.clone()),
            Self::Interface(t) =>
                loc::SchemaDefLocation::Schema(t.def_location().clone()),
            Self::Object(t) =>
                loc::SchemaDefLocation::Schema(t.def_location().clone()),
            Self::Scalar(t) =>
                loc::SchemaDefLocation::Schema(t.def_location.clone()),
            Self::Union(t) =>
                loc::SchemaDefLocation::Schema(t.def_location.clone()),
        }
    }

    /// The fields selectable on this type, if it is one of the two kinds
    /// (object and interface) that carry fields.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(iface_t) => Some(iface_t.fields()),
            Self::Object(obj_t) => Some(obj_t.fields()),

            Self::Bool
                | Self::Enum(_)
                | Self::Float
                | Self::ID
                | Self::InputObject(_)
                | Self::Int
                | Self::Scalar(_)
                | Self::String
                | Self::Union(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.type_kind().is_leaf()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name.as_str(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name.as_str(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name.as_str(),
            Self::String => "String",
            Self::Union(t) => t.name.as_str(),
        }
    }

    pub fn type_kind(&self) -> GraphQLTypeKind {
        self.into()
    }
}

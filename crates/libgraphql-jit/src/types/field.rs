use crate::loc;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a field defined on an
/// [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, TypeAnnotation>,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The field's arguments, keyed by name, with their declared types.
    pub fn parameters(&self) -> &IndexMap<String, TypeAnnotation> {
        &self.parameters
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    /// The declared return type of this field, including list and non-null
    /// wrappers.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

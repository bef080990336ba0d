use crate::loc;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
///
/// Input objects never appear as the return type of a selected field; they
/// are kept in the schema so that type references resolve.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, TypeAnnotation>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, TypeAnnotation> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

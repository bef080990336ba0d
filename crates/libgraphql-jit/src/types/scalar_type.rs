use crate::loc;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars). The
/// built-in scalars are represented by their own [`GraphQLType`](crate::types::GraphQLType)
/// variants.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

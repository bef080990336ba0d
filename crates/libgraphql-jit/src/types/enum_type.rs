use crate::loc;
use indexmap::IndexSet;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: IndexSet<String>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The names of this enum's values, in definition order.
    pub fn value_names(&self) -> Vec<&str> {
        self.values.iter().map(|v| v.as_str()).collect()
    }
}

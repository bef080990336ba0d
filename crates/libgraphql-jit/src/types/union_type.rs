use crate::loc;
use indexmap::IndexSet;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) description: Option<String>,
    pub(crate) members: IndexSet<String>,
    pub(crate) name: String,
}
impl UnionType {
    /// The [`FilePosition`](loc::FilePosition) indicating where this
    /// [`UnionType`] was defined within the schema.
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains(type_name)
    }

    /// An ordered list of the names of each
    /// [`GraphQLType`](crate::types::GraphQLType) defined as a member
    /// of this union.
    ///
    /// The order retains the order in which members were listed on the union
    /// definition. Members added from type extensions follow, in the order
    /// the extensions were loaded.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members
            .iter()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

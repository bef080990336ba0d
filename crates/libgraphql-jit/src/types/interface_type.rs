use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    /// The [`loc::FilePosition`] indicating where this [`InterfaceType`] was
    /// defined in the schema.
    pub fn def_location(&self) -> &loc::FilePosition {
        self.0.def_location()
    }

    /// The description of this [`InterfaceType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`] in the schema.
    ///
    /// Entries retain the order in which fields were defined on the type.
    /// Fields added by type extensions are appended in the order the
    /// extensions were loaded.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// Whether this [`InterfaceType`] implements the named interface, either
    /// directly or through one of the interfaces it implements.
    pub fn implements_interface(
        &self,
        schema: &Schema,
        interface_name: &str,
    ) -> bool {
        self.0.implements_interface(schema, interface_name)
    }

    /// The names of all interfaces this [`InterfaceType`] directly declares
    /// that it implements.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`InterfaceType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}

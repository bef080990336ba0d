use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn implements_interface(
        &self,
        schema: &Schema,
        interface_name: &str,
    ) -> bool {
        // Interfaces may implement other interfaces, so an implementation is
        // satisfied transitively.
        self.interfaces
            .iter()
            .any(|iface_name| {
                iface_name == interface_name
                    || schema.all_types()
                        .get(iface_name)
                        .and_then(|type_| type_.as_interface())
                        .is_some_and(|iface| {
                            iface.implements_interface(schema, interface_name)
                        })
            })
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_name| iface_name.as_str())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

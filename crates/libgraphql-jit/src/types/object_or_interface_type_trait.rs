use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use indexmap::IndexMap;

/// Accessors shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType): the two kinds of type that
/// carry fields.
pub trait ObjectOrInterfaceTypeTrait {
    fn def_location(&self) -> &loc::FilePosition;
    fn description(&self) -> Option<&str>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn implements_interface(&self, schema: &Schema, interface_name: &str) -> bool;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}

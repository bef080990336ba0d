use crate::inspect::Inspect;
use indexmap::IndexMap;
use std::sync::Arc;

/// Variable name -> coerced runtime value for one execution.
pub type VariableValues = IndexMap<String, Value>;

/// A runtime value flowing through execution (root values, variable values,
/// resolver results).
///
/// Containers are held behind [`Arc`] so values can be shared across
/// resolver invocations and threads without copying.
#[derive(Clone, Debug)]
pub enum Value {
    Bool(bool),
    Custom(Arc<dyn Inspect>),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Arc<Vec<Value>>),
    Null,
    Object(Arc<ObjectValue>),
    String(String),
}
impl Value {
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Self::List(Arc::new(items.into_iter().collect()))
    }

    /// An object with no runtime type name.
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self::Object(Arc::new(ObjectValue::new(None, fields)))
    }

    /// An object attributed to the runtime type `type_name`.
    pub fn typed_object<K: Into<String>>(
        type_name: impl Into<String>,
        fields: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Self::Object(Arc::new(ObjectValue::new(Some(type_name.into()), fields)))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(Arc::new(value))
    }
}
impl From<ObjectValue> for Value {
    fn from(value: ObjectValue) -> Self {
        Self::Object(Arc::new(value))
    }
}

#[derive(Clone, Debug, Default)]
pub struct ObjectValue {
    fields: IndexMap<String, Value>,
    type_name: Option<String>,
}
impl ObjectValue {
    pub fn new<K: Into<String>>(
        type_name: Option<String>,
        fields: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Self {
            fields: fields.into_iter().map(|(key, value)| (key.into(), value)).collect(),
            type_name,
        }
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn get(&self, field_name: &str) -> Option<&Value> {
        self.fields.get(field_name)
    }

    /// The runtime object type this value was attributed to, if any.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}

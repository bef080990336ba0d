#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}

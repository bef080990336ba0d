use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type_ref: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}

use crate::ast;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type of a [`Field`](crate::types::Field) or of one
/// of its parameters.
///
/// Non-null wrappers are folded into the `nullable` flag of the annotation
/// they wrap, so every chain of [`TypeAnnotation::List`]s bottoms out in
/// exactly one [`TypeAnnotation::Named`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::schema::Type, nullable: bool) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type_ref: Box::new(Self::from_ast_type_impl(inner, true)),
                    nullable,
                }),

            ast::schema::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_name: name.to_owned(),
                }),

            ast::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            Self::Named(named_annot)
                => named_annot,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            Self::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}

use crate::expansion::ExpansionError;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, ExpansionError>;

/// Read-only questions the
/// [`SelectionExpander`](crate::expansion::SelectionExpander) asks of a
/// schema.
///
/// Every failure is an [`ExpansionError`]: for a schema and document that
/// were validated against each other none of them can occur.
pub trait TypeOracle {
    /// Look up the definition of `field_name` on an object or interface type.
    fn field_definition(&self, parent_type_name: &str, field_name: &str) -> Result<&Field>;

    /// The named return type of `field_name` on `parent_type_name`, with all
    /// list and non-null wrappers stripped.
    fn field_return_type_name(&self, parent_type_name: &str, field_name: &str) -> Result<&str> {
        let field = self.field_definition(parent_type_name, field_name)?;
        self.resolve_return_type_name(field.type_annotation())
    }

    /// Scalars (built-in or custom) and enums.
    fn is_leaf_type(&self, type_name: &str) -> Result<bool> {
        Ok(self.type_kind(type_name)?.is_leaf())
    }

    /// The types a value of `type_name` may be attributed to before its
    /// runtime type is known:
    ///
    /// * object: the object itself;
    /// * interface: the interface itself followed by every implementing object
    ///   type;
    /// * union: its member object types, never the union itself.
    fn possible_concrete_types(&self, type_name: &str) -> Result<Vec<&str>>;

    /// Strip list wrappers from `type_annotation` and return the innermost
    /// named type, checking that it names a type of this schema.
    fn resolve_return_type_name<'a>(
        &'a self,
        type_annotation: &'a TypeAnnotation,
    ) -> Result<&'a str>;

    fn type_kind(&self, type_name: &str) -> Result<GraphQLTypeKind>;
}

impl Schema {
    fn lookup_type(&self, type_name: &str) -> Result<&GraphQLType> {
        self.types
            .get(type_name)
            .ok_or_else(|| ExpansionError::SchemaIntegrity {
                type_name: type_name.to_string(),
            })
    }
}

impl TypeOracle for Schema {
    fn field_definition(&self, parent_type_name: &str, field_name: &str) -> Result<&Field> {
        let parent_type = self.lookup_type(parent_type_name)?;
        let fields = parent_type.fields().ok_or_else(|| ExpansionError::TypeMismatch {
            type_name: parent_type_name.to_string(),
            type_kind: parent_type.type_kind(),
            expected: "an object or interface type",
        })?;

        fields.get(field_name).ok_or_else(|| ExpansionError::FieldNotFound {
            parent_type_name: parent_type_name.to_string(),
            field_name: field_name.to_string(),
        })
    }

    fn possible_concrete_types(&self, type_name: &str) -> Result<Vec<&str>> {
        match self.lookup_type(type_name)? {
            GraphQLType::Object(obj_t) => Ok(vec![obj_t.name()]),

            GraphQLType::Interface(iface_t) => {
                let mut possible_types = vec![iface_t.name()];
                possible_types.extend(self.implementing_object_type_names(type_name));
                Ok(possible_types)
            },

            GraphQLType::Union(union_t) => Ok(union_t.member_type_names()),

            other @ (GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::InputObject(_)
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String) => Err(ExpansionError::TypeMismatch {
                type_name: type_name.to_string(),
                type_kind: other.type_kind(),
                expected: "an object, interface, or union type",
            }),
        }
    }

    fn resolve_return_type_name<'a>(
        &'a self,
        type_annotation: &'a TypeAnnotation,
    ) -> Result<&'a str> {
        let type_name = type_annotation.innermost_named_type_annotation().type_name();
        self.lookup_type(type_name)?;
        Ok(type_name)
    }

    fn type_kind(&self, type_name: &str) -> Result<GraphQLTypeKind> {
        Ok(self.lookup_type(type_name)?.type_kind())
    }
}

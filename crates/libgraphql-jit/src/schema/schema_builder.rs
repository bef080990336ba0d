use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLOperationType {
    Mutation,
    Query,
    Subscription,
}
impl GraphQLOperationType {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    fn default_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}

/// Utility for building a [`Schema`] from one or more SDL documents.
///
/// Type extensions are applied at [`SchemaBuilder::build()`] time, so an
/// extension may be loaded before the definition it extends.
///
/// ```
/// use libgraphql_jit::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")
///     .unwrap()
///     .build()
///     .unwrap();
/// assert!(schema.all_types().contains_key("Query"));
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    pending_extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    root_operation_types: HashMap<GraphQLOperationType, (String, loc::FilePosition)>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        let mut types = IndexMap::new();
        for builtin in [
            GraphQLType::Bool,
            GraphQLType::Float,
            GraphQLType::ID,
            GraphQLType::Int,
            GraphQLType::String,
        ] {
            types.insert(builtin.name().to_string(), builtin);
        }

        Self {
            pending_extensions: vec![],
            root_operation_types: HashMap::new(),
            types,
        }
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load_file(file_path)
    }

    pub fn from_files<P: AsRef<Path>>(file_paths: &[P]) -> Result<Self> {
        let mut builder = Self::new();
        for file_path in file_paths {
            builder = builder.load_file(file_path)?;
        }
        Ok(builder)
    }

    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn build(mut self) -> Result<Schema> {
        let pending_extensions = std::mem::take(&mut self.pending_extensions);
        for (file_path, ext) in pending_extensions {
            self.apply_type_extension(file_path.as_deref(), ext)?;
        }

        let query_type = self.resolve_root_operation_type(GraphQLOperationType::Query)?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type =
            self.resolve_root_operation_type(GraphQLOperationType::Mutation)?;
        let subscription_type =
            self.resolve_root_operation_type(GraphQLOperationType::Subscription)?;

        let errors = self.validate_type_references();
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors(errors));
        }

        let interface_implementations = self.collect_interface_implementations();
        log::debug!(
            "Built schema with {} types ({} interfaces).",
            self.types.len(),
            interface_implementations.len(),
        );

        Ok(Schema {
            interface_implementations,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn load_ast(
        mut self,
        file_path: Option<&Path>,
        doc: ast::schema::Document,
    ) -> Result<Self> {
        for def in doc.definitions {
            match def {
                ast::schema::Definition::SchemaDefinition(schema_def) =>
                    self.visit_schema_def(file_path, schema_def)?,

                ast::schema::Definition::TypeDefinition(type_def) =>
                    self.visit_type_def(file_path, type_def)?,

                ast::schema::Definition::TypeExtension(type_ext) =>
                    self.pending_extensions.push((
                        file_path.map(|p| p.to_path_buf()),
                        type_ext,
                    )),

                ast::schema::Definition::DirectiveDefinition(directive_def) =>
                    log::trace!(
                        "Ignoring definition of directive `@{}`.",
                        directive_def.name,
                    ),
            }
        }

        Ok(self)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        log::debug!("Loading schema file {file_path:?}.");
        let content = file_reader::read_content(file_path)
            .map_err(|err| SchemaBuildError::SchemaFileReadError(Arc::new(err)))?;
        self.load_str(Some(file_path), content)
    }

    pub fn load_str(
        self,
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let doc = ast::schema::parse(content.as_ref())
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;
        self.load_ast(file_path, doc)
    }

    fn add_type(&mut self, new_type: GraphQLType) -> Result<()> {
        let type_name = new_type.name().to_string();
        if let Some(existing) = self.types.get(&type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                def1: existing.def_location(),
                def2: new_type.def_location(),
            });
        }
        self.types.insert(type_name, new_type);
        Ok(())
    }

    fn apply_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use graphql_parser::schema::TypeExtension as Ext;

        let (type_name, ext_pos) = match &ext {
            Ext::Enum(e) => (e.name.to_owned(), e.position),
            Ext::InputObject(e) => (e.name.to_owned(), e.position),
            Ext::Interface(e) => (e.name.to_owned(), e.position),
            Ext::Object(e) => (e.name.to_owned(), e.position),
            Ext::Scalar(e) => (e.name.to_owned(), e.position),
            Ext::Union(e) => (e.name.to_owned(), e.position),
        };
        let ext_loc = loc::FilePosition::from_pos(file_path, ext_pos);

        let Some(schema_type) = self.types.get_mut(&type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_loc: ext_loc,
            });
        };

        match (schema_type, ext) {
            (GraphQLType::Enum(enum_t), Ext::Enum(ext)) => {
                for value in ext.values {
                    if !enum_t.values.insert(value.name.to_owned()) {
                        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                            enum_name: type_name,
                            value_name: value.name,
                            value_def: loc::FilePosition::from_pos(
                                file_path,
                                value.position,
                            ),
                        });
                    }
                }
            },

            (GraphQLType::InputObject(input_t), Ext::InputObject(ext)) => {
                for input_value in ext.fields {
                    input_t.fields.insert(
                        input_value.name,
                        TypeAnnotation::from_ast_type(&input_value.value_type),
                    );
                }
            },

            (GraphQLType::Interface(InterfaceType(data)), Ext::Interface(ext)) => {
                extend_object_or_interface(
                    file_path,
                    data,
                    ext.implements_interfaces,
                    ext.fields,
                )?;
            },

            (GraphQLType::Object(ObjectType(data)), Ext::Object(ext)) => {
                extend_object_or_interface(
                    file_path,
                    data,
                    ext.implements_interfaces,
                    ext.fields,
                )?;
            },

            (GraphQLType::Scalar(_), Ext::Scalar(_)) => (),

            (GraphQLType::Union(union_t), Ext::Union(ext)) => {
                for member_name in ext.types {
                    if !union_t.members.insert(member_name.to_owned()) {
                        return Err(SchemaBuildError::DuplicatedUnionMember {
                            type_name,
                            member_name,
                            location: ext_loc,
                        });
                    }
                }
            },

            (schema_type, _) => return Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                type_kind: schema_type.type_kind(),
                extension_loc: ext_loc,
            }),
        }

        Ok(())
    }

    fn collect_interface_implementations(&self) -> HashMap<String, Vec<String>> {
        let mut implementations: HashMap<String, Vec<String>> =
            self.types.values()
                .filter_map(|type_| type_.as_interface())
                .map(|iface| (iface.name().to_string(), vec![]))
                .collect();

        for obj_type in self.types.values().filter_map(|type_| type_.as_object()) {
            let mut implemented = IndexSet::new();
            self.collect_implemented_interfaces(obj_type.interface_names(), &mut implemented);
            for iface_name in implemented {
                if let Some(impls) = implementations.get_mut(iface_name) {
                    impls.push(obj_type.name().to_string());
                }
            }
        }

        implementations
    }

    fn collect_implemented_interfaces<'a>(
        &'a self,
        iface_names: Vec<&'a str>,
        implemented: &mut IndexSet<&'a str>,
    ) {
        for iface_name in iface_names {
            if !implemented.insert(iface_name) {
                continue;
            }
            if let Some(iface) = self.types.get(iface_name).and_then(|t| t.as_interface()) {
                self.collect_implemented_interfaces(iface.interface_names(), implemented);
            }
        }
    }

    fn resolve_root_operation_type(
        &self,
        operation: GraphQLOperationType,
    ) -> Result<Option<String>> {
        match self.root_operation_types.get(&operation) {
            Some((type_name, location)) => match self.types.get(type_name) {
                Some(GraphQLType::Object(_)) => Ok(Some(type_name.to_owned())),
                Some(_) | None => Err(SchemaBuildError::InvalidRootOperationType {
                    operation,
                    type_name: type_name.to_owned(),
                    location: location.to_owned(),
                }),
            },

            None => {
                let default_name = operation.default_type_name();
                Ok(match self.types.get(default_name) {
                    Some(GraphQLType::Object(_)) => Some(default_name.to_string()),
                    _ => None,
                })
            },
        }
    }

    fn validate_type_references(&self) -> Vec<TypeValidationError> {
        let mut errors = vec![];

        for schema_type in self.types.values() {
            match schema_type {
                GraphQLType::Interface(InterfaceType(data))
                    | GraphQLType::Object(ObjectType(data)) => {
                    for iface_name in &data.interfaces {
                        match self.types.get(iface_name) {
                            Some(GraphQLType::Interface(_)) => (),
                            Some(non_iface) => errors.push(
                                TypeValidationError::ImplementsNonInterfaceType {
                                    type_name: data.name.to_owned(),
                                    non_interface_type_name: non_iface.name().to_string(),
                                    loc: data.def_location.to_owned(),
                                }
                            ),
                            None => errors.push(
                                TypeValidationError::ImplementsUndefinedInterface {
                                    type_name: data.name.to_owned(),
                                    undefined_interface_name: iface_name.to_owned(),
                                    loc: data.def_location.to_owned(),
                                }
                            ),
                        }
                    }

                    for field in data.fields.values() {
                        let return_type_name =
                            field.type_annotation().innermost_named_type_annotation().type_name();
                        if !self.types.contains_key(return_type_name) {
                            errors.push(TypeValidationError::UndefinedTypeName {
                                ref_location: field.def_location().to_owned(),
                                undefined_type_name: return_type_name.to_string(),
                            });
                        }
                    }
                },

                GraphQLType::Union(union_t) => {
                    for member_name in &union_t.members {
                        match self.types.get(member_name) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(member_type) => errors.push(
                                TypeValidationError::InvalidUnionMemberTypeKind {
                                    location: union_t.def_location.to_owned(),
                                    union_type_name: union_t.name.to_owned(),
                                    member_type_name: member_name.to_owned(),
                                    member_type_kind: member_type.type_kind(),
                                }
                            ),
                            None => errors.push(TypeValidationError::UndefinedTypeName {
                                ref_location: union_t.def_location.to_owned(),
                                undefined_type_name: member_name.to_owned(),
                            }),
                        }
                    }
                },

                GraphQLType::InputObject(input_t) => {
                    for annot in input_t.fields.values() {
                        let type_name = annot.innermost_named_type_annotation().type_name();
                        if !self.types.contains_key(type_name) {
                            errors.push(TypeValidationError::UndefinedTypeName {
                                ref_location: input_t.def_location.to_owned(),
                                undefined_type_name: type_name.to_string(),
                            });
                        }
                    }
                },

                GraphQLType::Bool
                    | GraphQLType::Enum(_)
                    | GraphQLType::Float
                    | GraphQLType::ID
                    | GraphQLType::Int
                    | GraphQLType::Scalar(_)
                    | GraphQLType::String => (),
            }
        }

        errors
    }

    fn visit_schema_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let location = loc::FilePosition::from_pos(file_path, schema_def.position);
        for (operation, type_name) in [
            (GraphQLOperationType::Query, schema_def.query),
            (GraphQLOperationType::Mutation, schema_def.mutation),
            (GraphQLOperationType::Subscription, schema_def.subscription),
        ] {
            let Some(type_name) = type_name else {
                continue;
            };
            if let Some((_, location1)) = self.root_operation_types.get(&operation) {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: location1.to_owned(),
                    location2: location,
                });
            }
            self.root_operation_types.insert(operation, (type_name, location.to_owned()));
        }
        Ok(())
    }

    fn visit_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use graphql_parser::schema::TypeDefinition as Def;

        let new_type = match type_def {
            Def::Enum(def) => {
                let def_location = loc::FilePosition::from_pos(file_path, def.position);
                let mut values = IndexSet::new();
                for value in def.values {
                    if !values.insert(value.name.to_owned()) {
                        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                            enum_name: def.name,
                            value_name: value.name,
                            value_def: loc::FilePosition::from_pos(file_path, value.position),
                        });
                    }
                }
                GraphQLType::Enum(EnumType {
                    def_location,
                    description: def.description,
                    name: def.name,
                    values,
                })
            },

            Def::InputObject(def) => GraphQLType::InputObject(InputObjectType {
                def_location: loc::FilePosition::from_pos(file_path, def.position),
                description: def.description,
                fields: def.fields
                    .iter()
                    .map(|input_value| (
                        input_value.name.to_owned(),
                        TypeAnnotation::from_ast_type(&input_value.value_type),
                    ))
                    .collect(),
                name: def.name,
            }),

            Def::Interface(def) => {
                let mut data = ObjectOrInterfaceTypeData {
                    def_location: loc::FilePosition::from_pos(file_path, def.position),
                    description: def.description,
                    fields: IndexMap::new(),
                    interfaces: vec![],
                    name: def.name,
                };
                extend_object_or_interface(
                    file_path,
                    &mut data,
                    def.implements_interfaces,
                    def.fields,
                )?;
                GraphQLType::Interface(InterfaceType(data))
            },

            Def::Object(def) => {
                let mut data = ObjectOrInterfaceTypeData {
                    def_location: loc::FilePosition::from_pos(file_path, def.position),
                    description: def.description,
                    fields: IndexMap::new(),
                    interfaces: vec![],
                    name: def.name,
                };
                extend_object_or_interface(
                    file_path,
                    &mut data,
                    def.implements_interfaces,
                    def.fields,
                )?;
                GraphQLType::Object(ObjectType(data))
            },

            Def::Scalar(def) => GraphQLType::Scalar(ScalarType {
                def_location: loc::FilePosition::from_pos(file_path, def.position),
                description: def.description,
                name: def.name,
            }),

            Def::Union(def) => {
                let location = loc::FilePosition::from_pos(file_path, def.position);
                let mut members = IndexSet::new();
                for member_name in def.types {
                    if !members.insert(member_name.to_owned()) {
                        return Err(SchemaBuildError::DuplicatedUnionMember {
                            type_name: def.name,
                            member_name,
                            location,
                        });
                    }
                }
                GraphQLType::Union(UnionType {
                    def_location: location,
                    description: def.description,
                    members,
                    name: def.name,
                })
            },
        };

        self.add_type(new_type)
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn extend_object_or_interface(
    file_path: Option<&Path>,
    data: &mut ObjectOrInterfaceTypeData,
    implements_interfaces: Vec<String>,
    fields: Vec<ast::schema::Field>,
) -> Result<()> {
    for iface_name in implements_interfaces {
        if data.interfaces.contains(&iface_name) {
            return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                def_location: data.def_location.to_owned(),
                duplicated_interface_name: iface_name,
                type_name: data.name.to_owned(),
            });
        }
        data.interfaces.push(iface_name);
    }

    for ast_field in fields {
        let def_location = loc::FilePosition::from_pos(file_path, ast_field.position);
        if let Some(existing) = data.fields.get(&ast_field.name) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: data.name.to_owned(),
                field_name: ast_field.name,
                field_def1: existing.def_location().to_owned(),
                field_def2: def_location,
            });
        }

        let parameters = ast_field.arguments
            .iter()
            .map(|input_value| (
                input_value.name.to_owned(),
                TypeAnnotation::from_ast_type(&input_value.value_type),
            ))
            .collect();

        data.fields.insert(ast_field.name.to_owned(), Field {
            def_location,
            description: ast_field.description,
            name: ast_field.name,
            parameters,
            parent_type_name: data.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
        });
    }

    Ok(())
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("The `{enum_name}` enum defines the `{value_name}` value more than once ({value_def})")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        value_def: loc::FilePosition,
    },

    #[error("Multiple fields named `{field_name}` were defined on the `{type_name}` type")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::FilePosition,
        field_def2: loc::FilePosition,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::FilePosition,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("The {operation:?} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        operation: GraphQLOperationType,
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined ({def1} and {def2})")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("The `{type_name}` union lists `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
        location: loc::FilePosition,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined ({extension_loc})")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: loc::FilePosition,
    },

    #[error(
        "Attempted to extend the {type_kind} type `{type_name}` with an \
        extension of a different kind ({extension_loc})"
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: crate::types::GraphQLTypeKind,
        extension_loc: loc::FilePosition,
    },

    #[error(
        "The {operation:?} root operation type is declared as `{type_name}`, \
        which is not an object type defined in the schema"
    )]
    InvalidRootOperationType {
        operation: GraphQLOperationType,
        type_name: String,
        location: loc::FilePosition,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema document {file:?}: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Arc<file_reader::ReadContentError>),

    #[error("Schema contains invalid type references: {0:?}")]
    TypeValidationErrors(Vec<TypeValidationError>),
}

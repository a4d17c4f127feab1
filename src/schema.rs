//! Immutable, name-indexed view of an SDL type system.
//!
//! The parsed `graphql-parser` document is flattened into an arena of
//! [`TypeDef`] nodes keyed by type name. Types refer to each other through
//! [`TypeRef::Named`], so cyclic schemas (`User.friends: [User!]!`) need no
//! pointers and no special handling here; callers bound their own traversal.

use std::collections::HashMap;
use std::fmt;

use graphql_parser::schema::{
    Definition, Document, Field, InputValue, Type, TypeDefinition, TypeExtension,
};

use crate::error::SchemaError;
use crate::operation::OperationKind;

pub const BUILTIN_SCALARS: &[&str] = &["String", "Int", "Float", "Boolean", "ID"];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Strips every `List`/`NonNull` wrapper, leaving the innermost `Named` ref.
    pub fn named_type(&self) -> &TypeRef {
        match self {
            TypeRef::Named(_) => self,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }

    /// Name of the type under every wrapper.
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(n) => f.write_str(n),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl<'a> From<&Type<'a, String>> for TypeRef {
    fn from(ty: &Type<'a, String>) -> Self {
        match ty {
            Type::NamedType(n) => TypeRef::Named(n.clone()),
            Type::ListType(inner) => TypeRef::list(TypeRef::from(&**inner)),
            Type::NonNullType(inner) => TypeRef::non_null(TypeRef::from(&**inner)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Scalar,
    Enum,
    Object,
    Interface,
    Union,
    InputObject,
    List,
    NonNull,
}

impl Category {
    /// Leaf categories never take a sub-selection.
    pub fn is_leaf(self) -> bool {
        matches!(self, Category::Scalar | Category::Enum)
    }

    pub fn is_composite(self) -> bool {
        matches!(
            self,
            Category::Object | Category::Interface | Category::Union
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDef {
    pub name: String,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub ty: TypeRef,
    pub args: Vec<ArgumentDef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDef {
    Scalar,
    Enum,
    Object(Vec<FieldDef>),
    Interface(Vec<FieldDef>),
    Union(Vec<String>),
    InputObject,
}

impl TypeDef {
    pub fn category(&self) -> Category {
        match self {
            TypeDef::Scalar => Category::Scalar,
            TypeDef::Enum => Category::Enum,
            TypeDef::Object(_) => Category::Object,
            TypeDef::Interface(_) => Category::Interface,
            TypeDef::Union(_) => Category::Union,
            TypeDef::InputObject => Category::InputObject,
        }
    }

    /// Declared fields of an object or interface; empty for everything else.
    pub fn fields(&self) -> &[FieldDef] {
        match self {
            TypeDef::Object(fields) | TypeDef::Interface(fields) => fields,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    types: HashMap<String, TypeDef>,
    query: Option<String>,
    mutation: Option<String>,
    subscription: Option<String>,
}

impl Schema {
    pub fn parse(sdl: &str) -> Result<Self, SchemaError> {
        Self::parse_with_scalars(sdl, &[])
    }

    /// Like [`Schema::parse`], but `implicit_scalars` are known as scalars
    /// even when the document never declares them.
    pub fn parse_with_scalars(sdl: &str, implicit_scalars: &[&str]) -> Result<Self, SchemaError> {
        let doc: Document<String> =
            graphql_parser::parse_schema(sdl).map_err(|e| SchemaError::Parse(e.to_string()))?;
        let schema = Self::from_document(&doc, implicit_scalars)?;
        schema.validate()?;
        Ok(schema)
    }

    fn from_document(
        doc: &Document<'_, String>,
        implicit_scalars: &[&str],
    ) -> Result<Self, SchemaError> {
        let mut schema = Schema::default();
        for name in BUILTIN_SCALARS {
            schema.types.insert((*name).to_string(), TypeDef::Scalar);
        }

        for def in &doc.definitions {
            match def {
                Definition::SchemaDefinition(roots) => {
                    schema.query = roots.query.clone();
                    schema.mutation = roots.mutation.clone();
                    schema.subscription = roots.subscription.clone();
                }
                Definition::TypeDefinition(td) => {
                    let (name, node) = convert_type_definition(td);
                    if BUILTIN_SCALARS.contains(&name.as_str()) && node == TypeDef::Scalar {
                        continue;
                    }
                    if schema.types.insert(name.clone(), node).is_some() {
                        return Err(SchemaError::DuplicateType { name });
                    }
                }
                Definition::TypeExtension(_) | Definition::DirectiveDefinition(_) => {}
            }
        }

        // Extensions may precede the type they extend, so apply them last.
        for def in &doc.definitions {
            if let Definition::TypeExtension(ext) = def {
                schema.apply_extension(ext)?;
            }
        }

        for name in implicit_scalars {
            schema
                .types
                .entry((*name).to_string())
                .or_insert(TypeDef::Scalar);
        }

        if schema.query.is_none() && schema.mutation.is_none() && schema.subscription.is_none() {
            for kind in OperationKind::ALL {
                let conventional = kind.root_type_name();
                if schema.types.contains_key(conventional) {
                    schema.set_root(kind, conventional.to_string());
                }
            }
        }

        Ok(schema)
    }

    fn apply_extension(&mut self, ext: &TypeExtension<'_, String>) -> Result<(), SchemaError> {
        let (name, extra_fields, extra_members) = match ext {
            TypeExtension::Object(o) => (&o.name, convert_fields(&o.fields), Vec::new()),
            TypeExtension::Interface(i) => (&i.name, convert_fields(&i.fields), Vec::new()),
            TypeExtension::Union(u) => (&u.name, Vec::new(), u.types.clone()),
            TypeExtension::Scalar(s) => (&s.name, Vec::new(), Vec::new()),
            TypeExtension::Enum(e) => (&e.name, Vec::new(), Vec::new()),
            TypeExtension::InputObject(i) => (&i.name, Vec::new(), Vec::new()),
        };

        let node = self
            .types
            .get_mut(name)
            .ok_or_else(|| SchemaError::UndefinedExtension { name: name.clone() })?;
        match node {
            TypeDef::Object(fields) | TypeDef::Interface(fields) => fields.extend(extra_fields),
            TypeDef::Union(members) => members.extend(extra_members),
            TypeDef::Scalar | TypeDef::Enum | TypeDef::InputObject => {}
        }
        Ok(())
    }

    fn set_root(&mut self, kind: OperationKind, name: String) {
        match kind {
            OperationKind::Query => self.query = Some(name),
            OperationKind::Mutation => self.mutation = Some(name),
            OperationKind::Subscription => self.subscription = Some(name),
        }
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let mut names: Vec<&String> = self.types.keys().collect();
        names.sort();

        for owner in names {
            match &self.types[owner] {
                TypeDef::Object(fields) | TypeDef::Interface(fields) => {
                    for field in fields {
                        self.require(owner, field.ty.base_name())?;
                        for arg in &field.args {
                            self.require(owner, arg.ty.base_name())?;
                        }
                    }
                }
                TypeDef::Union(members) => {
                    for member in members {
                        self.require(owner, member)?;
                        if !matches!(self.types.get(member), Some(TypeDef::Object(_))) {
                            return Err(SchemaError::InvalidUnionMember {
                                union: owner.clone(),
                                member: member.clone(),
                            });
                        }
                    }
                }
                TypeDef::Scalar | TypeDef::Enum | TypeDef::InputObject => {}
            }
        }

        for kind in OperationKind::ALL {
            if let Some(root) = self.root_type_name(kind) {
                self.require("schema", root)?;
            }
        }
        Ok(())
    }

    fn require(&self, owner: &str, name: &str) -> Result<(), SchemaError> {
        if self.types.contains_key(name) {
            Ok(())
        } else {
            Err(SchemaError::UndefinedType {
                owner: owner.to_string(),
                name: name.to_string(),
            })
        }
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Category of a possibly wrapped type. Wrappers classify as themselves;
    /// use [`TypeRef::named_type`] first to classify the underlying named type.
    pub fn classify(&self, ty: &TypeRef) -> Option<Category> {
        match ty {
            TypeRef::List(_) => Some(Category::List),
            TypeRef::NonNull(_) => Some(Category::NonNull),
            TypeRef::Named(name) => self.get(name).map(TypeDef::category),
        }
    }

    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => self.query.as_deref(),
            OperationKind::Mutation => self.mutation.as_deref(),
            OperationKind::Subscription => self.subscription.as_deref(),
        }
    }

    /// Fields of the root object type for `kind`, if the schema has one.
    pub fn root_fields(&self, kind: OperationKind) -> Option<&[FieldDef]> {
        match self.get(self.root_type_name(kind)?)? {
            TypeDef::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

fn convert_type_definition(td: &TypeDefinition<'_, String>) -> (String, TypeDef) {
    match td {
        TypeDefinition::Scalar(s) => (s.name.clone(), TypeDef::Scalar),
        TypeDefinition::Enum(e) => (e.name.clone(), TypeDef::Enum),
        TypeDefinition::Object(o) => (o.name.clone(), TypeDef::Object(convert_fields(&o.fields))),
        TypeDefinition::Interface(i) => {
            (i.name.clone(), TypeDef::Interface(convert_fields(&i.fields)))
        }
        TypeDefinition::Union(u) => (u.name.clone(), TypeDef::Union(u.types.clone())),
        TypeDefinition::InputObject(i) => (i.name.clone(), TypeDef::InputObject),
    }
}

fn convert_fields(fields: &[Field<'_, String>]) -> Vec<FieldDef> {
    fields
        .iter()
        .map(|f| FieldDef {
            name: f.name.clone(),
            ty: (&f.field_type).into(),
            args: f.arguments.iter().map(convert_argument).collect(),
        })
        .collect()
}

fn convert_argument(arg: &InputValue<'_, String>) -> ArgumentDef {
    ArgumentDef {
        name: arg.name.clone(),
        ty: (&arg.value_type).into(),
    }
}

//! Type model definitions.
//!
//! This module contains the language-neutral data structures handed over by
//! the front-end: enumerations, records, their members and the type
//! references that link them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Underlying primitive an enum's values are stored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackingKind {
    /// Integer-backed enum.
    Integer,
    /// String-backed enum.
    String,
}

impl BackingKind {
    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
        }
    }
}

/// Literal value of an enum case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// Integer literal.
    Integer(i64),
    /// String literal.
    String(String),
}

impl EnumValue {
    /// Returns the backing kind this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> BackingKind {
        match self {
            Self::Integer(_) => BackingKind::Integer,
            Self::String(_) => BackingKind::String,
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// A single enum case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumCase {
    /// Case name, unique within its enum.
    pub name: String,
    /// Case value, unique within its enum.
    pub value: EnumValue,
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Backing kind shared by every case.
    pub backing_kind: BackingKind,
    /// Cases in declaration order.
    #[serde(default)]
    pub cases: Vec<EnumCase>,
}

impl EnumDef {
    /// Creates an enum with no cases.
    #[must_use]
    pub fn new(name: impl Into<String>, backing_kind: BackingKind) -> Self {
        Self {
            name: name.into(),
            backing_kind,
            cases: Vec::new(),
        }
    }

    /// Creates an empty integer-backed enum.
    #[must_use]
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, BackingKind::Integer)
    }

    /// Creates an empty string-backed enum.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, BackingKind::String)
    }

    /// Appends a case.
    #[must_use]
    pub fn case(mut self, name: impl Into<String>, value: impl Into<EnumValue>) -> Self {
        self.cases.push(EnumCase {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// Built-in scalar types a field can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    /// Text.
    String,
    /// Whole number.
    Integer,
    /// Floating point number.
    Float,
    /// True or false.
    Boolean,
    /// Point in time, carried on the wire as a string.
    DateTime,
    /// Any value.
    Mixed,
}

/// Reference to the type of a record field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeRef {
    /// Built-in scalar.
    Primitive(Primitive),
    /// Enum or record of the same model, by name.
    Named(String),
    /// Homogeneous sequence.
    List(Box<TypeRef>),
    /// Value that may be null.
    Nullable(Box<TypeRef>),
    /// One of several types.
    Union(Vec<TypeRef>),
}

impl TypeRef {
    /// Shorthand for `Primitive(String)`.
    #[must_use]
    pub const fn string() -> Self {
        Self::Primitive(Primitive::String)
    }

    /// Shorthand for `Primitive(Integer)`.
    #[must_use]
    pub const fn integer() -> Self {
        Self::Primitive(Primitive::Integer)
    }

    /// Shorthand for `Primitive(Float)`.
    #[must_use]
    pub const fn float() -> Self {
        Self::Primitive(Primitive::Float)
    }

    /// Shorthand for `Primitive(Boolean)`.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::Primitive(Primitive::Boolean)
    }

    /// Shorthand for `Primitive(DateTime)`.
    #[must_use]
    pub const fn datetime() -> Self {
        Self::Primitive(Primitive::DateTime)
    }

    /// Reference to a named enum or record.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps the type in a list.
    #[must_use]
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps the type as nullable.
    #[must_use]
    pub fn nullable(inner: TypeRef) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Calls `f` for every named reference inside this type, depth first.
    pub fn for_each_named<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            Self::Primitive(_) => {}
            Self::Named(name) => f(name),
            Self::List(inner) | Self::Nullable(inner) => inner.for_each_named(f),
            Self::Union(members) => {
                for member in members {
                    member.for_each_named(f);
                }
            }
        }
    }
}

/// Record field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FieldRepr")]
pub struct FieldDef {
    /// In-memory field identifier.
    pub name: String,
    /// Field type.
    pub type_ref: TypeRef,
    /// Wire name used when the record is serialized.
    pub serialized_key: String,
}

impl FieldDef {
    /// Creates a field whose serialized key equals its name.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        let name = name.into();
        Self {
            serialized_key: name.clone(),
            name,
            type_ref,
        }
    }

    /// Overrides the serialized key.
    #[must_use]
    pub fn serialized_as(mut self, key: impl Into<String>) -> Self {
        self.serialized_key = key.into();
        self
    }
}

/// Wire form of [`FieldDef`]; the serialized key is optional there.
#[derive(Deserialize)]
struct FieldRepr {
    name: String,
    type_ref: TypeRef,
    #[serde(default)]
    serialized_key: Option<String>,
}

impl From<FieldRepr> for FieldDef {
    fn from(repr: FieldRepr) -> Self {
        Self {
            serialized_key: repr.serialized_key.unwrap_or_else(|| repr.name.clone()),
            name: repr.name,
            type_ref: repr.type_ref,
        }
    }
}

/// Record (structure) definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDef {
    /// Record name.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl RecordDef {
    /// Creates a record with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// Type definition variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeDef {
    /// Enum type definition.
    Enum(EnumDef),
    /// Record type definition.
    Record(RecordDef),
}

impl TypeDef {
    /// Returns the name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(e) => &e.name,
            Self::Record(r) => &r.name,
        }
    }

    /// Returns true if this is an enum type.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns true if this is a record type.
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }
}

impl From<EnumDef> for TypeDef {
    fn from(def: EnumDef) -> Self {
        Self::Enum(def)
    }
}

impl From<RecordDef> for TypeDef {
    fn from(def: RecordDef) -> Self {
        Self::Record(def)
    }
}

//! Error types for type model construction and validation.

use thiserror::Error;

/// Error type for a malformed type model.
///
/// Every variant names the owning type so the schema can be fixed at the
/// source. These errors are fatal to the whole generation request.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Model JSON could not be deserialized.
    #[error("invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A type, case, field or serialized key has an empty name.
    #[error("empty {kind} name in '{owner}'")]
    EmptyName {
        /// What was unnamed (type, case, field, serialized key).
        kind: &'static str,
        /// Owning type name, or `<schema>` for a top-level type.
        owner: String,
    },

    /// Two types share a name.
    #[error("duplicate type definition: '{name}'")]
    DuplicateType {
        /// Name of the duplicate.
        name: String,
    },

    /// Two cases of one enum share a name.
    #[error("duplicate case name '{case}' in enum '{enum_name}'")]
    DuplicateCase {
        /// Enum name.
        enum_name: String,
        /// Case name.
        case: String,
    },

    /// Two cases of one enum share a value.
    #[error("duplicate value {value} for case '{case}' in enum '{enum_name}'")]
    DuplicateValue {
        /// Enum name.
        enum_name: String,
        /// Case carrying the repeated value.
        case: String,
        /// Rendered value.
        value: String,
    },

    /// A case value does not match the enum's backing kind.
    #[error("case '{case}' in enum '{enum_name}' has a {found} value, expected {expected}")]
    BackingKindMismatch {
        /// Enum name.
        enum_name: String,
        /// Case name.
        case: String,
        /// Declared backing kind.
        expected: &'static str,
        /// Kind of the offending value.
        found: &'static str,
    },

    /// Two fields of one record share a name.
    #[error("duplicate field '{field}' in record '{record}'")]
    DuplicateField {
        /// Record name.
        record: String,
        /// Field name.
        field: String,
    },

    /// Two fields of one record share a serialized key.
    #[error("duplicate serialized key '{key}' on field '{field}' in record '{record}'")]
    DuplicateSerializedKey {
        /// Record name.
        record: String,
        /// Field carrying the repeated key.
        field: String,
        /// Serialized key.
        key: String,
    },

    /// A field references a type that is not part of the model.
    #[error("unknown type '{type_name}' referenced by field '{field}' in record '{record}'")]
    UnknownType {
        /// Record name.
        record: String,
        /// Field name.
        field: String,
        /// Dangling type name.
        type_name: String,
    },

    /// A union type with fewer than two members.
    #[error("union on field '{field}' in record '{record}' needs at least two members")]
    InvalidUnion {
        /// Record name.
        record: String,
        /// Field name.
        field: String,
    },
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

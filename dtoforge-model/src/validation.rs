//! Type model validation.
//!
//! This module checks a list of type definitions for the structural rules
//! every renderer relies on: unique names, unique case values of the right
//! kind, unique serialized keys and resolvable type references.

use crate::error::SchemaError;
use crate::types::{EnumDef, RecordDef, TypeDef, TypeRef};
use std::collections::HashSet;

/// Validates type definitions for correctness.
///
/// # Arguments
/// * `types` - Type definitions in schema declaration order
///
/// # Errors
/// Returns the first `SchemaError` found, in declaration order.
pub fn validate_types(types: &[TypeDef]) -> Result<(), SchemaError> {
    let mut seen_types = HashSet::new();

    for type_def in types {
        if type_def.name().is_empty() {
            return Err(SchemaError::EmptyName {
                kind: "type",
                owner: "<schema>".to_string(),
            });
        }
        if !seen_types.insert(type_def.name()) {
            return Err(SchemaError::DuplicateType {
                name: type_def.name().to_string(),
            });
        }
    }

    for type_def in types {
        match type_def {
            TypeDef::Enum(enum_def) => validate_enum(enum_def)?,
            TypeDef::Record(record) => validate_record(record, &seen_types)?,
        }
    }

    Ok(())
}

/// Validates an enum type definition.
fn validate_enum(enum_def: &EnumDef) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();
    let mut seen_values = HashSet::new();

    for case in &enum_def.cases {
        if case.name.is_empty() {
            return Err(SchemaError::EmptyName {
                kind: "case",
                owner: enum_def.name.clone(),
            });
        }

        if case.value.kind() != enum_def.backing_kind {
            return Err(SchemaError::BackingKindMismatch {
                enum_name: enum_def.name.clone(),
                case: case.name.clone(),
                expected: enum_def.backing_kind.as_str(),
                found: case.value.kind().as_str(),
            });
        }

        if !seen_names.insert(&case.name) {
            return Err(SchemaError::DuplicateCase {
                enum_name: enum_def.name.clone(),
                case: case.name.clone(),
            });
        }

        if !seen_values.insert(&case.value) {
            return Err(SchemaError::DuplicateValue {
                enum_name: enum_def.name.clone(),
                case: case.name.clone(),
                value: case.value.to_string(),
            });
        }
    }

    Ok(())
}

/// Validates a record type definition against the set of known type names.
fn validate_record(record: &RecordDef, known: &HashSet<&str>) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();
    let mut seen_keys = HashSet::new();

    for field in &record.fields {
        if field.name.is_empty() {
            return Err(SchemaError::EmptyName {
                kind: "field",
                owner: record.name.clone(),
            });
        }
        if field.serialized_key.is_empty() {
            return Err(SchemaError::EmptyName {
                kind: "serialized key",
                owner: record.name.clone(),
            });
        }

        if !seen_names.insert(&field.name) {
            return Err(SchemaError::DuplicateField {
                record: record.name.clone(),
                field: field.name.clone(),
            });
        }

        if !seen_keys.insert(&field.serialized_key) {
            return Err(SchemaError::DuplicateSerializedKey {
                record: record.name.clone(),
                field: field.name.clone(),
                key: field.serialized_key.clone(),
            });
        }

        validate_type_ref(record, &field.name, &field.type_ref, known)?;
    }

    Ok(())
}

/// Validates a field type: named references must exist, unions need two members.
fn validate_type_ref(
    record: &RecordDef,
    field: &str,
    type_ref: &TypeRef,
    known: &HashSet<&str>,
) -> Result<(), SchemaError> {
    match type_ref {
        TypeRef::Primitive(_) => Ok(()),
        TypeRef::Named(name) => {
            if known.contains(name.as_str()) {
                Ok(())
            } else {
                Err(SchemaError::UnknownType {
                    record: record.name.clone(),
                    field: field.to_string(),
                    type_name: name.clone(),
                })
            }
        }
        TypeRef::List(inner) | TypeRef::Nullable(inner) => {
            validate_type_ref(record, field, inner, known)
        }
        TypeRef::Union(members) => {
            if members.len() < 2 {
                return Err(SchemaError::InvalidUnion {
                    record: record.name.clone(),
                    field: field.to_string(),
                });
            }
            for member in members {
                validate_type_ref(record, field, member, known)?;
            }
            Ok(())
        }
    }
}

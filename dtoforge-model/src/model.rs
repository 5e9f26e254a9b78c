//! The validated, immutable type model.

use crate::error::SchemaError;
use crate::types::{EnumDef, RecordDef, TypeDef};
use crate::validation::validate_types;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete, validated set of enum and record definitions.
///
/// The model is immutable once built; declaration order of types, cases and
/// fields is preserved and drives the order of every rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeModel {
    /// Type definitions in schema declaration order.
    types: Vec<TypeDef>,
    /// Type lookup map (built during construction).
    #[serde(skip)]
    type_map: HashMap<String, usize>,
}

/// Wire form of a model.
#[derive(Deserialize)]
struct ModelRepr {
    #[serde(default)]
    types: Vec<TypeDef>,
}

impl TypeModel {
    /// Builds a model from type definitions, validating them first.
    ///
    /// # Errors
    /// Returns `SchemaError` if the definitions are malformed.
    pub fn new(types: Vec<TypeDef>) -> Result<Self, SchemaError> {
        validate_types(&types)?;

        let type_map = types
            .iter()
            .enumerate()
            .map(|(idx, type_def)| (type_def.name().to_string(), idx))
            .collect();

        Ok(Self { types, type_map })
    }

    /// Returns a builder for assembling a model incrementally.
    #[must_use]
    pub fn builder() -> TypeModelBuilder {
        TypeModelBuilder::default()
    }

    /// Deserializes and validates a model from JSON.
    ///
    /// The expected shape is `{"types": [{"kind": "enum", ...}, {"kind": "record", ...}]}`.
    ///
    /// # Errors
    /// Returns `SchemaError::Json` for malformed JSON and any validation error
    /// for a malformed model.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let repr: ModelRepr = serde_json::from_str(json)?;
        Self::new(repr.types)
    }

    /// Re-runs validation.
    ///
    /// # Errors
    /// Returns `SchemaError` if the model is malformed.
    pub fn validate(&self) -> Result<(), SchemaError> {
        validate_types(&self.types)
    }

    /// Returns all types in declaration order.
    #[must_use]
    pub fn types(&self) -> &[TypeDef] {
        &self.types
    }

    /// Iterates over the enums in declaration order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.types.iter().filter_map(|t| match t {
            TypeDef::Enum(e) => Some(e),
            TypeDef::Record(_) => None,
        })
    }

    /// Iterates over the records in declaration order.
    pub fn records(&self) -> impl Iterator<Item = &RecordDef> {
        self.types.iter().filter_map(|t| match t {
            TypeDef::Record(r) => Some(r),
            TypeDef::Enum(_) => None,
        })
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Returns the number of types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the model has no types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Incremental builder for [`TypeModel`].
#[derive(Debug, Default)]
pub struct TypeModelBuilder {
    types: Vec<TypeDef>,
}

impl TypeModelBuilder {
    /// Appends an enum definition.
    #[must_use]
    pub fn enum_type(mut self, def: EnumDef) -> Self {
        self.types.push(TypeDef::Enum(def));
        self
    }

    /// Appends a record definition.
    #[must_use]
    pub fn record(mut self, def: RecordDef) -> Self {
        self.types.push(TypeDef::Record(def));
        self
    }

    /// Validates and builds the model.
    ///
    /// # Errors
    /// Returns `SchemaError` if the definitions are malformed.
    pub fn build(self) -> Result<TypeModel, SchemaError> {
        TypeModel::new(self.types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BackingKind, EnumValue, FieldDef, Primitive, TypeRef};

    const USER_MODEL_JSON: &str = r#"{
        "types": [
            {
                "kind": "enum",
                "name": "ColorEnum",
                "backing_kind": "integer",
                "cases": [
                    {"name": "RED", "value": 0},
                    {"name": "GREEN", "value": 1}
                ]
            },
            {
                "kind": "enum",
                "name": "RoleEnum",
                "backing_kind": "string",
                "cases": [{"name": "ADMIN", "value": "admin"}]
            },
            {
                "kind": "record",
                "name": "User",
                "fields": [
                    {"name": "id", "type_ref": {"primitive": "string"}},
                    {"name": "themeColor", "type_ref": {"named": "ColorEnum"}, "serialized_key": "theme_color"},
                    {"name": "tags", "type_ref": {"list": {"primitive": "string"}}}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_builder_keeps_declaration_order() {
        let model = TypeModel::builder()
            .record(RecordDef::new("User"))
            .enum_type(EnumDef::integer("Color"))
            .enum_type(EnumDef::string("Role"))
            .build()
            .expect("valid model");

        let names: Vec<_> = model.types().iter().map(TypeDef::name).collect();
        assert_eq!(names, ["User", "Color", "Role"]);
        assert_eq!(model.enums().count(), 2);
        assert_eq!(model.records().count(), 1);
        assert_eq!(model.len(), 3);
    }

    #[test]
    fn test_lookup() {
        let model = TypeModel::builder()
            .enum_type(EnumDef::integer("Color").case("RED", 0))
            .build()
            .expect("valid model");

        assert!(model.has_type("Color"));
        assert!(!model.has_type("Role"));
        assert!(model.get_type("Color").is_some_and(TypeDef::is_enum));
    }

    #[test]
    fn test_new_rejects_invalid_model() {
        let result = TypeModel::builder()
            .enum_type(EnumDef::integer("Color"))
            .enum_type(EnumDef::integer("Color"))
            .build();
        assert!(matches!(result, Err(SchemaError::DuplicateType { .. })));
    }

    #[test]
    fn test_empty_model() {
        let model = TypeModel::new(Vec::new()).expect("valid model");
        assert!(model.is_empty());
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let model = TypeModel::from_json(USER_MODEL_JSON).expect("valid model");
        assert_eq!(model.len(), 3);

        let Some(TypeDef::Enum(role)) = model.get_type("RoleEnum") else {
            panic!("RoleEnum should be an enum");
        };
        assert_eq!(role.backing_kind, BackingKind::String);
        assert_eq!(role.cases[0].value, EnumValue::String("admin".to_string()));

        let user = model.records().next().expect("User record");
        assert_eq!(user.fields[0].serialized_key, "id");
        assert_eq!(user.fields[1].serialized_key, "theme_color");
        assert_eq!(user.fields[1].type_ref, TypeRef::named("ColorEnum"));
        assert_eq!(
            user.fields[2],
            FieldDef::new("tags", TypeRef::list(TypeRef::Primitive(Primitive::String)))
        );
    }

    #[test]
    fn test_from_json_malformed() {
        let result = TypeModel::from_json("{\"types\": [");
        assert!(matches!(result, Err(SchemaError::Json(_))));
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"{"types": [{"kind": "record", "name": "User", "fields": [
            {"name": "role", "type_ref": {"named": "Role"}}
        ]}]}"#;
        let result = TypeModel::from_json(json);
        assert!(matches!(result, Err(SchemaError::UnknownType { .. })));
    }
}

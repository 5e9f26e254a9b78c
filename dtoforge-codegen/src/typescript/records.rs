//! Object type generation for TypeScript.
//!
//! A record describes the serialized payload, so each property is named by
//! the field's serialized key rather than its in-memory name.

use super::syntax::{is_type_identifier, property_name};
use super::types::TypeMapper;
use crate::error::RenderError;
use crate::target::TargetKind;
use dtoforge_model::{RecordDef, TypeModel};

/// Generator for TypeScript object type aliases.
pub struct RecordGenerator<'a> {
    types: TypeMapper<'a>,
}

impl<'a> RecordGenerator<'a> {
    /// Creates a new record generator.
    #[must_use]
    pub fn new(model: &'a TypeModel) -> Self {
        Self {
            types: TypeMapper::new(model),
        }
    }

    /// Generates the declaration for one record.
    ///
    /// # Errors
    /// Returns `RenderError` for an undeclarable record name or a dangling
    /// field type.
    pub fn generate(&self, record: &RecordDef) -> Result<String, RenderError> {
        if !is_type_identifier(&record.name) {
            return Err(RenderError::invalid_identifier(
                TargetKind::TypeScript,
                &record.name,
                &record.name,
            ));
        }

        if record.fields.is_empty() {
            return Ok(format!("export type {} = {{}};\n", record.name));
        }

        let mut output = format!("export type {} = {{\n", record.name);
        for field in &record.fields {
            let ts_type = self.types.ts_type(&record.name, &field.name, &field.type_ref)?;
            output.push_str(&format!(
                "  {}: {};\n",
                property_name(&field.serialized_key),
                ts_type
            ));
        }
        output.push_str("};\n");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtoforge_model::{EnumDef, FieldDef, TypeDef, TypeRef};

    fn render(model: &TypeModel, name: &str) -> Result<String, RenderError> {
        let Some(TypeDef::Record(record)) = model.get_type(name) else {
            panic!("{name} should be a record");
        };
        RecordGenerator::new(model).generate(record)
    }

    #[test]
    fn test_record() {
        let model = TypeModel::builder()
            .enum_type(EnumDef::integer("Color"))
            .record(
                RecordDef::new("User")
                    .field(FieldDef::new("id", TypeRef::string()))
                    .field(FieldDef::new("themeColor", TypeRef::named("Color")))
                    .field(FieldDef::new("name", TypeRef::nullable(TypeRef::string()))),
            )
            .build()
            .expect("valid model");

        assert_eq!(
            render(&model, "User").expect("renders"),
            "export type User = {\n  id: string;\n  themeColor: Color;\n  name: string | null;\n};\n"
        );
    }

    #[test]
    fn test_properties_use_serialized_keys() {
        let model = TypeModel::builder()
            .record(
                RecordDef::new("User")
                    .field(FieldDef::new("createdAt", TypeRef::string()).serialized_as("created_at"))
                    .field(FieldDef::new("fcmToken", TypeRef::string()).serialized_as("fcm-token")),
            )
            .build()
            .expect("valid model");

        let output = render(&model, "User").expect("renders");
        assert!(output.contains("  created_at: string;\n"));
        assert!(output.contains("  \"fcm-token\": string;\n"));
        assert!(!output.contains("createdAt"));
    }

    #[test]
    fn test_empty_record() {
        let model = TypeModel::builder()
            .record(RecordDef::new("Empty"))
            .build()
            .expect("valid model");
        assert_eq!(render(&model, "Empty").expect("renders"), "export type Empty = {};\n");
    }

    #[test]
    fn test_invalid_record_name() {
        let model = TypeModel::builder()
            .record(RecordDef::new("user-create"))
            .build()
            .expect("valid model");
        assert!(matches!(
            render(&model, "user-create"),
            Err(RenderError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_strict_mode_word_is_rejected() {
        let model = TypeModel::builder()
            .record(RecordDef::new("let"))
            .build()
            .expect("valid model");
        assert!(matches!(
            render(&model, "let"),
            Err(RenderError::InvalidIdentifier { ref name, .. }) if name == "let"
        ));
    }

    #[test]
    fn test_datetime_property() {
        let model = TypeModel::builder()
            .record(
                RecordDef::new("Event")
                    .field(FieldDef::new("startsAt", TypeRef::datetime()))
                    .field(FieldDef::new("endsAt", TypeRef::nullable(TypeRef::datetime()))),
            )
            .build()
            .expect("valid model");
        assert_eq!(
            render(&model, "Event").expect("renders"),
            "export type Event = {\n  startsAt: string;\n  endsAt: string | null;\n};\n"
        );
    }
}

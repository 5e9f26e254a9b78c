//! Enum code generation for TypeScript.

use super::syntax::{is_numeric_name, is_type_identifier, property_name, quote_string};
use crate::error::RenderError;
use crate::target::{EnumStyle, TargetKind};
use dtoforge_model::{EnumDef, EnumValue};

/// Generator for TypeScript enum declarations.
pub struct EnumGenerator {
    style: EnumStyle,
}

impl EnumGenerator {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(style: EnumStyle) -> Self {
        Self { style }
    }

    /// Generates the declaration for one enum.
    ///
    /// # Errors
    /// Returns `RenderError::InvalidIdentifier` if the enum name cannot be
    /// declared as a type, or if a member name is numeric.
    pub fn generate(&self, enum_def: &EnumDef) -> Result<String, RenderError> {
        if !is_type_identifier(&enum_def.name) {
            return Err(RenderError::invalid_identifier(
                TargetKind::TypeScript,
                &enum_def.name,
                &enum_def.name,
            ));
        }

        match self.style {
            EnumStyle::Enum => generate_enum(enum_def),
            EnumStyle::UnionType => Ok(generate_union(enum_def)),
        }
    }
}

fn literal(value: &EnumValue) -> String {
    match value {
        EnumValue::Integer(v) => v.to_string(),
        EnumValue::String(s) => quote_string(s),
    }
}

/// `export enum Name { MEMBER = literal, ... }`
fn generate_enum(enum_def: &EnumDef) -> Result<String, RenderError> {
    if enum_def.cases.is_empty() {
        return Ok(format!("export enum {} {{}}\n", enum_def.name));
    }

    let mut output = format!("export enum {} {{\n", enum_def.name);
    for case in &enum_def.cases {
        if is_numeric_name(&case.name) {
            return Err(RenderError::invalid_identifier(
                TargetKind::TypeScript,
                &enum_def.name,
                &case.name,
            ));
        }
        output.push_str(&format!(
            "  {} = {},\n",
            property_name(&case.name),
            literal(&case.value)
        ));
    }
    output.push_str("}\n");
    Ok(output)
}

/// `export type Name = literal | literal;`
fn generate_union(enum_def: &EnumDef) -> String {
    let body = if enum_def.cases.is_empty() {
        "never".to_string()
    } else {
        enum_def
            .cases
            .iter()
            .map(|case| literal(&case.value))
            .collect::<Vec<_>>()
            .join(" | ")
    };
    format!("export type {} = {};\n", enum_def.name, body)
}

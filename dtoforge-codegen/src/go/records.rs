//! Struct code generation for Go.

use super::layout::{align_rows, is_go_identifier, is_package_identifier};
use super::types::TypeMapper;
use crate::error::RenderError;
use crate::naming::capitalize_first;
use crate::resolver::ResolvedSymbols;
use crate::target::TargetKind;
use dtoforge_model::{RecordDef, TypeModel};
use std::collections::HashSet;

/// Generator for Go struct declarations with `json` tags.
pub struct StructGenerator<'a> {
    symbols: &'a ResolvedSymbols,
    types: TypeMapper<'a>,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(model: &'a TypeModel, symbols: &'a ResolvedSymbols) -> Self {
        Self {
            symbols,
            types: TypeMapper::new(model, symbols),
        }
    }

    /// Generates the struct declaration for one record.
    ///
    /// # Errors
    /// Returns `RenderError` for invalid identifiers, fields that export to
    /// the same Go name, keys that cannot sit in a struct tag, and field types
    /// Go cannot express.
    pub fn generate(&self, record: &RecordDef) -> Result<String, RenderError> {
        let type_name = self
            .symbols
            .type_name(&record.name)
            .ok_or_else(|| RenderError::MissingSymbol {
                target: TargetKind::Go,
                owner: record.name.clone(),
                local: record.name.clone(),
            })?;
        if !is_package_identifier(type_name) {
            return Err(RenderError::invalid_identifier(
                TargetKind::Go,
                &record.name,
                type_name,
            ));
        }

        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(record.fields.len());
        for field in &record.fields {
            let field_name = capitalize_first(&field.name);
            if !is_go_identifier(&field_name) {
                return Err(RenderError::invalid_identifier(
                    TargetKind::Go,
                    &record.name,
                    &field.name,
                ));
            }
            if !seen.insert(field_name.clone()) {
                return Err(RenderError::DuplicateMember {
                    target: TargetKind::Go,
                    owner: record.name.clone(),
                    name: field_name,
                });
            }

            let go_type = self.types.go_type(&record.name, &field.name, &field.type_ref)?;
            let tag = json_tag(&record.name, &field.serialized_key)?;
            rows.push(vec![field_name, go_type, tag]);
        }

        let mut output = format!("type {type_name} struct {{\n");
        output.push_str(&align_rows(&rows));
        output.push_str("}\n");
        Ok(output)
    }
}

/// Builds the raw-string struct tag carrying the serialized key.
fn json_tag(owner: &str, key: &str) -> Result<String, RenderError> {
    if let Some(c) = key
        .chars()
        .find(|&c| matches!(c, '`' | '"' | ',' | '\\') || c.is_control())
    {
        return Err(RenderError::unsupported(
            TargetKind::Go,
            owner,
            format!("serialized key '{key}' contains {c:?}, which a json struct tag cannot carry"),
        ));
    }
    Ok(format!("`json:\"{key}\"`"))
}

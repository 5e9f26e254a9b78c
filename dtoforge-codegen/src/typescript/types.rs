//! Field type mapping for TypeScript.

use crate::error::RenderError;
use crate::target::TargetKind;
use dtoforge_model::{Primitive, TypeModel, TypeRef};

/// Maps model type references to TypeScript type expressions.
pub struct TypeMapper<'a> {
    model: &'a TypeModel,
}

impl<'a> TypeMapper<'a> {
    /// Creates a new type mapper.
    #[must_use]
    pub fn new(model: &'a TypeModel) -> Self {
        Self { model }
    }

    /// Renders the TypeScript type of field `field` in record `owner`.
    ///
    /// Unions and nullables are flattened into one ` | `-joined list without
    /// duplicates, keeping the first occurrence of each member.
    ///
    /// # Errors
    /// Returns `RenderError::UnknownType` for dangling references.
    pub fn ts_type(&self, owner: &str, field: &str, type_ref: &TypeRef) -> Result<String, RenderError> {
        Ok(self.members(owner, field, type_ref)?.join(" | "))
    }

    /// Collects the distinct union members of a type, in order.
    fn members(&self, owner: &str, field: &str, type_ref: &TypeRef) -> Result<Vec<String>, RenderError> {
        let mut members = Vec::new();
        self.collect(owner, field, type_ref, &mut members)?;
        Ok(members)
    }

    fn collect(
        &self,
        owner: &str,
        field: &str,
        type_ref: &TypeRef,
        members: &mut Vec<String>,
    ) -> Result<(), RenderError> {
        match type_ref {
            TypeRef::Nullable(inner) => {
                self.collect(owner, field, inner, members)?;
                push_unique(members, "null".to_string());
            }
            TypeRef::Union(variants) => {
                for variant in variants {
                    self.collect(owner, field, variant, members)?;
                }
            }
            TypeRef::List(inner) => {
                let element = self.members(owner, field, inner)?;
                let rendered = if element.len() > 1 {
                    format!("({})[]", element.join(" | "))
                } else {
                    format!("{}[]", element.join(""))
                };
                push_unique(members, rendered);
            }
            TypeRef::Primitive(primitive) => {
                push_unique(members, primitive_type(*primitive).to_string());
            }
            TypeRef::Named(name) => {
                if !self.model.has_type(name) {
                    return Err(RenderError::UnknownType {
                        target: TargetKind::TypeScript,
                        owner: owner.to_string(),
                        field: field.to_string(),
                        type_name: name.clone(),
                    });
                }
                push_unique(members, name.clone());
            }
        }
        Ok(())
    }
}

fn push_unique(members: &mut Vec<String>, member: String) {
    if !members.contains(&member) {
        members.push(member);
    }
}

/// TypeScript spelling of a built-in scalar.
#[must_use]
pub const fn primitive_type(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String | Primitive::DateTime => "string",
        Primitive::Integer | Primitive::Float => "number",
        Primitive::Boolean => "boolean",
        Primitive::Mixed => "any",
    }
}

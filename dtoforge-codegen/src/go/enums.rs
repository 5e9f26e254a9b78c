//! Enum code generation for Go.
//!
//! Each enum becomes a named type over `int` or `string` followed by a
//! `const` block holding one typed constant per case.

use super::layout::{align_rows, is_package_identifier, quote_string};
use crate::error::RenderError;
use crate::resolver::ResolvedSymbols;
use crate::target::TargetKind;
use dtoforge_model::{BackingKind, EnumDef, EnumValue};

/// Generator for Go enum declarations.
pub struct EnumGenerator<'a> {
    symbols: &'a ResolvedSymbols,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(symbols: &'a ResolvedSymbols) -> Self {
        Self { symbols }
    }

    /// Generates the type declaration and constant block for one enum.
    ///
    /// # Errors
    /// Returns `RenderError` if an identifier is missing from the overlay or
    /// is not a legal Go identifier.
    pub fn generate(&self, enum_def: &EnumDef) -> Result<String, RenderError> {
        let mut output = String::new();
        let type_name = self.identifier(&enum_def.name, &enum_def.name, || {
            self.symbols.type_name(&enum_def.name)
        })?;

        let backing = match enum_def.backing_kind {
            BackingKind::Integer => "int",
            BackingKind::String => "string",
        };
        output.push_str(&format!("type {type_name} {backing}\n"));

        if enum_def.cases.is_empty() {
            return Ok(output);
        }

        let mut rows = Vec::with_capacity(enum_def.cases.len());
        for case in &enum_def.cases {
            let constant = self.identifier(&enum_def.name, &case.name, || {
                self.symbols.member(&enum_def.name, &case.name)
            })?;
            let literal = match &case.value {
                EnumValue::Integer(v) => v.to_string(),
                EnumValue::String(s) => quote_string(s),
            };
            rows.push(vec![
                constant.to_string(),
                type_name.to_string(),
                format!("= {literal}"),
            ]);
        }

        output.push('\n');
        output.push_str("const (\n");
        output.push_str(&align_rows(&rows));
        output.push_str(")\n");

        Ok(output)
    }

    /// Looks up a resolved identifier and checks it is declarable.
    fn identifier(
        &self,
        owner: &str,
        local: &str,
        lookup: impl FnOnce() -> Option<&'a str>,
    ) -> Result<&'a str, RenderError> {
        let identifier = lookup().ok_or_else(|| RenderError::MissingSymbol {
            target: TargetKind::Go,
            owner: owner.to_string(),
            local: local.to_string(),
        })?;
        if !is_package_identifier(identifier) {
            return Err(RenderError::invalid_identifier(TargetKind::Go, owner, identifier));
        }
        Ok(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::go::GoNaming;
    use crate::resolver::IdentifierResolver;
    use dtoforge_model::TypeModel;

    fn render(model: &TypeModel, name: &str) -> Result<String, RenderError> {
        let symbols = IdentifierResolver::new(model, GoNaming)
            .resolve()
            .expect("resolves");
        let Some(dtoforge_model::TypeDef::Enum(enum_def)) = model.get_type(name) else {
            panic!("{name} should be an enum");
        };
        EnumGenerator::new(&symbols).generate(enum_def)
    }

    #[test]
    fn test_integer_enum() {
        let model = TypeModel::builder()
            .enum_type(EnumDef::integer("Color").case("RED", 0).case("UNIFIED", 111))
            .build()
            .expect("valid model");

        assert_eq!(
            render(&model, "Color").expect("renders"),
            "type Color int\n\nconst (\n\tRED     Color = 0\n\tUNIFIED Color = 111\n)\n"
        );
    }

    #[test]
    fn test_string_enum_values_are_verbatim() {
        let model = TypeModel::builder()
            .enum_type(
                EnumDef::string("Role")
                    .case("ADMIN", "admin")
                    .case("ONE", "one_one_one"),
            )
            .build()
            .expect("valid model");

        let output = render(&model, "Role").expect("renders");
        assert!(output.starts_with("type Role string\n"));
        assert!(output.contains("\tONE   Role = \"one_one_one\"\n"));
    }

    #[test]
    fn test_negative_values() {
        let model = TypeModel::builder()
            .enum_type(EnumDef::integer("Offset").case("BACK", -1).case("NONE", 0))
            .build()
            .expect("valid model");

        assert!(render(&model, "Offset")
            .expect("renders")
            .contains("\tBACK Offset = -1\n"));
    }

    #[test]
    fn test_empty_enum_has_no_const_block() {
        let model = TypeModel::builder()
            .enum_type(EnumDef::integer("Nothing"))
            .build()
            .expect("valid model");

        assert_eq!(render(&model, "Nothing").expect("renders"), "type Nothing int\n");
    }

    #[test]
    fn test_case_order_is_preserved() {
        let model = TypeModel::builder()
            .enum_type(
                EnumDef::integer("Level")
                    .case("HIGH", 2)
                    .case("LOW", 0)
                    .case("MID", 1),
            )
            .build()
            .expect("valid model");

        let output = render(&model, "Level").expect("renders");
        let high = output.find("HIGH").expect("HIGH");
        let low = output.find("LOW").expect("LOW");
        let mid = output.find("MID").expect("MID");
        assert!(high < low && low < mid);
    }

    #[test]
    fn test_keyword_case_is_rejected() {
        let model = TypeModel::builder()
            .enum_type(EnumDef::string("Kind").case("type", "type"))
            .build()
            .expect("valid model");

        let err = render(&model, "Kind").unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidIdentifier { ref owner, ref name, .. } if owner == "Kind" && name == "type"
        ));
    }

    #[test]
    fn test_predeclared_case_is_rejected() {
        let model = TypeModel::builder()
            .enum_type(EnumDef::string("Kind").case("string", "s").case("int", "i"))
            .enum_type(EnumDef::integer("Level").case("LOW", 0))
            .build()
            .expect("valid model");

        let err = render(&model, "Kind").unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidIdentifier { ref owner, ref name, .. } if owner == "Kind" && name == "string"
        ));
        assert!(render(&model, "Level").is_ok());
    }

    #[test]
    fn test_missing_symbol() {
        let model = TypeModel::builder()
            .enum_type(EnumDef::integer("Color").case("RED", 0))
            .build()
            .expect("valid model");
        let other = TypeModel::builder()
            .enum_type(EnumDef::integer("Color"))
            .build()
            .expect("valid model");
        let symbols = IdentifierResolver::new(&other, GoNaming)
            .resolve()
            .expect("resolves");
        let Some(dtoforge_model::TypeDef::Enum(enum_def)) = model.get_type("Color") else {
            panic!("Color should be an enum");
        };

        let err = EnumGenerator::new(&symbols).generate(enum_def).unwrap_err();
        assert!(matches!(err, RenderError::MissingSymbol { ref local, .. } if local == "RED"));
    }
}

//! TypeScript code generation modules.
//!
//! TypeScript enums are namespaced, so this target renders natural names and
//! never needs a resolver overlay.

pub mod enums;
pub mod records;
pub mod syntax;
pub mod types;

pub use enums::EnumGenerator;
pub use records::RecordGenerator;
pub use types::TypeMapper;

use crate::error::RenderError;
use crate::target::TypeScriptOptions;
use dtoforge_model::{TypeDef, TypeModel};

/// Banner that opens every generated TypeScript file.
pub const TS_BANNER: &str = "\
// THIS FILE WAS AUTOGENERATED BY dtoforge.
// PLEASE DO NOT EDIT IT!
";

/// Generator for a complete TypeScript source file.
pub struct TypeScriptGenerator<'a> {
    model: &'a TypeModel,
    options: &'a TypeScriptOptions,
}

impl<'a> TypeScriptGenerator<'a> {
    /// Creates a new TypeScript generator.
    #[must_use]
    pub fn new(model: &'a TypeModel, options: &'a TypeScriptOptions) -> Self {
        Self { model, options }
    }

    /// Generates the file: banner, then one block per type in declaration
    /// order.
    ///
    /// # Errors
    /// Returns `RenderError` if any type cannot be expressed in TypeScript.
    pub fn generate(&self) -> Result<String, RenderError> {
        let enums = EnumGenerator::new(self.options.enum_style);
        let records = RecordGenerator::new(self.model);

        let mut output = String::from(TS_BANNER);
        for type_def in self.model.types() {
            output.push('\n');
            let block = match type_def {
                TypeDef::Enum(enum_def) => enums.generate(enum_def)?,
                TypeDef::Record(record) => records.generate(record)?,
            };
            output.push_str(&block);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::EnumStyle;
    use dtoforge_model::{EnumDef, FieldDef, RecordDef, TypeRef};

    fn user_model() -> TypeModel {
        TypeModel::builder()
            .enum_type(EnumDef::integer("Color").case("RED", 0).case("BLUE", 1))
            .enum_type(EnumDef::string("Role").case("ADMIN", "admin").case("EDITOR", "editor"))
            .record(
                RecordDef::new("User")
                    .field(FieldDef::new("color", TypeRef::named("Color")))
                    .field(FieldDef::new("user", TypeRef::integer()))
                    .field(FieldDef::new("role", TypeRef::named("Role"))),
            )
            .build()
            .expect("valid model")
    }

    #[test]
    fn test_full_file() {
        let options = TypeScriptOptions::default();
        let output = TypeScriptGenerator::new(&user_model(), &options)
            .generate()
            .expect("renders");

        assert_eq!(
            output,
            "\
// THIS FILE WAS AUTOGENERATED BY dtoforge.
// PLEASE DO NOT EDIT IT!

export enum Color {
  RED = 0,
  BLUE = 1,
}

export enum Role {
  ADMIN = \"admin\",
  EDITOR = \"editor\",
}

export type User = {
  color: Color;
  user: number;
  role: Role;
};
"
        );
    }

    #[test]
    fn test_types_instead_of_enums() {
        let options = TypeScriptOptions::new().enum_style(EnumStyle::UnionType);
        let output = TypeScriptGenerator::new(&user_model(), &options)
            .generate()
            .expect("renders");

        assert!(output.contains("\nexport type Color = 0 | 1;\n"));
        assert!(output.contains("\nexport type Role = \"admin\" | \"editor\";\n"));
        assert!(!output.contains("export enum"));
    }

    #[test]
    fn test_unions_render_in_typescript() {
        let model = TypeModel::builder()
            .record(RecordDef::new("UserCreate").field(FieldDef::new(
                "age",
                TypeRef::Union(vec![TypeRef::integer(), TypeRef::string(), TypeRef::float()]),
            )))
            .build()
            .expect("valid model");
        let options = TypeScriptOptions::default();
        let output = TypeScriptGenerator::new(&model, &options)
            .generate()
            .expect("renders");

        assert!(output.contains("  age: number | string;\n"));
    }

    #[test]
    fn test_empty_model() {
        let model = TypeModel::new(Vec::new()).expect("valid model");
        let options = TypeScriptOptions::default();
        let output = TypeScriptGenerator::new(&model, &options)
            .generate()
            .expect("renders");
        assert_eq!(output, TS_BANNER);
    }
}

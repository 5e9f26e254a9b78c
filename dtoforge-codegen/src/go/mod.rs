//! Go code generation modules.
//!
//! Go declares enum cases as package-level constants, so this target always
//! renders from a [`ResolvedSymbols`] overlay produced with [`GoNaming`].

pub mod enums;
pub mod layout;
pub mod records;
pub mod types;

pub use enums::EnumGenerator;
pub use records::StructGenerator;
pub use types::TypeMapper;

use crate::error::RenderError;
use crate::naming::capitalize_first;
use crate::resolver::{ResolvedSymbols, SymbolNaming};
use crate::target::{GoOptions, TargetKind};
use dtoforge_model::{EnumCase, EnumDef, TypeDef, TypeModel};

/// Banner that opens every generated Go file.
pub const GO_BANNER: &str = "\
// Code generated by dtoforge. DO NOT EDIT.
// Code generated by dtoforge. DO NOT EDIT.
// Code generated by dtoforge. DO NOT EDIT.
";

/// Natural Go names: exported type names, case names as declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoNaming;

impl SymbolNaming for GoNaming {
    fn target(&self) -> TargetKind {
        TargetKind::Go
    }

    fn type_name(&self, name: &str) -> String {
        capitalize_first(name)
    }

    fn member_name(&self, _owner: &EnumDef, case: &EnumCase) -> String {
        case.name.clone()
    }
}

/// Generator for a complete Go source file.
pub struct GoGenerator<'a> {
    model: &'a TypeModel,
    symbols: &'a ResolvedSymbols,
    options: &'a GoOptions,
}

impl<'a> GoGenerator<'a> {
    /// Creates a new Go generator.
    #[must_use]
    pub fn new(model: &'a TypeModel, symbols: &'a ResolvedSymbols, options: &'a GoOptions) -> Self {
        Self {
            model,
            symbols,
            options,
        }
    }

    /// Generates the file: banner, package clause, then one block per type in
    /// declaration order.
    ///
    /// # Errors
    /// Returns `RenderError` if any type cannot be expressed in Go.
    pub fn generate(&self) -> Result<String, RenderError> {
        if !layout::is_go_identifier(&self.options.package) {
            return Err(RenderError::invalid_identifier(
                TargetKind::Go,
                "<package>",
                &self.options.package,
            ));
        }

        let enums = EnumGenerator::new(self.symbols);
        let structs = StructGenerator::new(self.model, self.symbols);

        let mut output = String::new();
        output.push_str(GO_BANNER);
        output.push('\n');
        output.push_str(&format!("package {}\n", self.options.package));

        for type_def in self.model.types() {
            output.push('\n');
            let block = match type_def {
                TypeDef::Enum(enum_def) => enums.generate(enum_def)?,
                TypeDef::Record(record) => structs.generate(record)?,
            };
            output.push_str(&block);
        }

        Ok(output)
    }
}

//! # dtoforge
//!
//! Schema-driven generator of Go and TypeScript data declarations.
//!
//! dtoforge takes a language-neutral model of enums and records and renders
//! equivalent declarations per target language. Output is byte-for-byte
//! reproducible for the same model and options.
//!
//! ## Features
//!
//! - **Validated type model** - Duplicate names, values, keys and dangling
//!   references are rejected up front
//! - **Flat-scope resolution** - Enum cases that clash in Go's package scope
//!   get a deterministic owner suffix (`X` then `XRole`)
//! - **Go and TypeScript renderers** - Typed constants, structs with `json`
//!   tags, TypeScript enums or literal unions
//! - **Concurrent pipeline** - Several targets rendered from one model at once
//!
//! ## Quick Start
//!
//! ```
//! use dtoforge::prelude::*;
//!
//! let model = TypeModel::builder()
//!     .enum_type(EnumDef::integer("Color").case("RED", 0).case("X", 1))
//!     .enum_type(EnumDef::string("Role").case("X", "x"))
//!     .record(RecordDef::new("User").field(FieldDef::new("color", TypeRef::named("Color"))))
//!     .build()?;
//!
//! let file = Generator::new(&model).generate(&Target::go())?;
//! assert!(file.content.contains("XRole Role = \"x\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Type model, validation and JSON loading
//! - [`codegen`] - Identifier resolution, renderers and the pipeline

pub mod prelude;

/// Type model definitions and validation.
pub mod model {
    pub use dtoforge_model::*;
}

/// Identifier resolution and rendering.
pub mod codegen {
    pub use dtoforge_codegen::*;
}

// Re-export commonly used items at the crate root
pub use dtoforge_codegen::{CodegenError, GeneratedFile, Generator, Target, generate};
pub use dtoforge_model::{SchemaError, TypeModel};

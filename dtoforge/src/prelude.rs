//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use dtoforge::prelude::*;
//! ```

// Model types
pub use dtoforge_model::{
    BackingKind, EnumCase, EnumDef, EnumValue, FieldDef, Primitive, RecordDef, SchemaError,
    TypeDef, TypeModel, TypeRef,
};

// Codegen types
pub use dtoforge_codegen::{
    CodegenError, EnumStyle, GeneratedFile, Generator, GoOptions, RenderError, ResolutionError,
    ResolvedSymbols, Scoping, SymbolKey, Target, TargetKind, TypeScriptOptions,
};

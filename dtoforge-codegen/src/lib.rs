//! # dtoforge Codegen
//!
//! Code generation from dtoforge type models.
//!
//! This crate provides:
//! - Flat-scope identifier resolution for targets without namespaced enums
//! - Go rendering (typed constants, structs with `json` tags)
//! - TypeScript rendering (enums or literal unions, object types)
//! - A pipeline that renders several targets concurrently

pub mod error;
pub mod generator;
pub mod go;
pub mod naming;
pub mod resolver;
pub mod target;
pub mod typescript;

pub use error::{CodegenError, RenderError, ResolutionError};
pub use generator::{GeneratedFile, Generator};
pub use resolver::{IdentifierResolver, ResolvedSymbols, SymbolKey, SymbolNaming};
pub use target::{EnumStyle, GoOptions, Scoping, Target, TargetKind, TypeScriptOptions};

use dtoforge_model::TypeModel;

/// Renders a model for one target.
///
/// # Arguments
/// * `model` - Validated type model
/// * `target` - Target language and options
///
/// # Errors
/// Returns `CodegenError` if resolution or rendering fails.
pub fn generate(model: &TypeModel, target: &Target) -> Result<GeneratedFile, CodegenError> {
    Generator::new(model).generate(target)
}

/// Loads a model from JSON and renders it for one target.
///
/// # Arguments
/// * `json` - Model JSON, as accepted by [`TypeModel::from_json`]
/// * `target` - Target language and options
///
/// # Errors
/// Returns `CodegenError` if loading, resolution, or rendering fails.
pub fn generate_from_json(json: &str, target: &Target) -> Result<GeneratedFile, CodegenError> {
    let model = TypeModel::from_json(json)?;
    generate(&model, target)
}

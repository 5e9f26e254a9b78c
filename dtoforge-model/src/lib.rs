//! # dtoforge Model
//!
//! Language-neutral type model for code generation.
//!
//! This crate provides:
//! - Enum and record definitions with ordered cases and fields
//! - Type references between records and enums
//! - Construction-time validation
//! - JSON loading for models produced by an external front-end

pub mod error;
pub mod model;
pub mod types;
pub mod validation;

pub use error::SchemaError;
pub use model::{TypeModel, TypeModelBuilder};
pub use types::{
    BackingKind, EnumCase, EnumDef, EnumValue, FieldDef, Primitive, RecordDef, TypeDef, TypeRef,
};
pub use validation::validate_types;

//! Error types for code generation.

use crate::target::TargetKind;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Malformed type model.
    #[error("schema error: {0}")]
    Schema(#[from] dtoforge_model::SchemaError),

    /// Flat-scope identifier collision that cannot be resolved.
    #[error("resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    /// A type or value the target cannot express.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

impl CodegenError {
    /// Returns the target the error belongs to, if it is target-specific.
    #[must_use]
    pub fn target(&self) -> Option<TargetKind> {
        match self {
            Self::Schema(_) => None,
            Self::Resolution(e) => Some(e.target()),
            Self::Render(e) => Some(e.target()),
        }
    }
}

/// Error raised while making flat-scope identifiers unique.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// Two types render to the same identifier.
    #[error("{target}: types '{owner}' and '{claimed_by}' both render as '{identifier}'")]
    TypeCollision {
        /// Target being resolved.
        target: TargetKind,
        /// Type that lost the name.
        owner: String,
        /// Type that claimed the name first.
        claimed_by: String,
        /// Contested identifier.
        identifier: String,
    },

    /// The owner-suffixed name of a member is also taken.
    #[error(
        "{target}: '{owner}.{local}' collides as '{natural}' and its disambiguated name '{candidate}' is already claimed by {claimed_by}"
    )]
    UnresolvableCollision {
        /// Target being resolved.
        target: TargetKind,
        /// Owning type.
        owner: String,
        /// Member name in the schema.
        local: String,
        /// Natural identifier that was taken.
        natural: String,
        /// Suffixed identifier that was also taken.
        candidate: String,
        /// Symbol holding `candidate`.
        claimed_by: String,
    },
}

impl ResolutionError {
    /// Returns the target being resolved.
    #[must_use]
    pub const fn target(&self) -> TargetKind {
        match self {
            Self::TypeCollision { target, .. } | Self::UnresolvableCollision { target, .. } => {
                *target
            }
        }
    }
}

/// Error raised while rendering a resolved model.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A field references a type missing from the model.
    #[error("{target}: unknown type '{type_name}' in field '{owner}.{field}'")]
    UnknownType {
        /// Target being rendered.
        target: TargetKind,
        /// Owning record.
        owner: String,
        /// Field name.
        field: String,
        /// Missing type.
        type_name: String,
    },

    /// The resolver overlay has no entry for a symbol.
    #[error("{target}: no resolved identifier for '{owner}.{local}'")]
    MissingSymbol {
        /// Target being rendered.
        target: TargetKind,
        /// Owning type.
        owner: String,
        /// Member or type name.
        local: String,
    },

    /// A name is not a legal identifier in the target language.
    #[error("{target}: '{name}' in '{owner}' is not a valid identifier")]
    InvalidIdentifier {
        /// Target being rendered.
        target: TargetKind,
        /// Owning type.
        owner: String,
        /// Offending name.
        name: String,
    },

    /// Two members of one type render to the same identifier.
    #[error("{target}: members of '{owner}' both render as '{name}'")]
    DuplicateMember {
        /// Target being rendered.
        target: TargetKind,
        /// Owning type.
        owner: String,
        /// Contested identifier.
        name: String,
    },

    /// A construct the target's type system cannot express.
    #[error("{target}: unsupported in '{owner}': {detail}")]
    Unsupported {
        /// Target being rendered.
        target: TargetKind,
        /// Owning type.
        owner: String,
        /// What could not be expressed.
        detail: String,
    },
}

impl RenderError {
    /// Returns the target being rendered.
    #[must_use]
    pub const fn target(&self) -> TargetKind {
        match self {
            Self::UnknownType { target, .. }
            | Self::MissingSymbol { target, .. }
            | Self::InvalidIdentifier { target, .. }
            | Self::DuplicateMember { target, .. }
            | Self::Unsupported { target, .. } => *target,
        }
    }

    /// Creates an unsupported-feature error.
    pub fn unsupported(
        target: TargetKind,
        owner: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Unsupported {
            target,
            owner: owner.into(),
            detail: detail.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(
        target: TargetKind,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::InvalidIdentifier {
            target,
            owner: owner.into(),
            name: name.into(),
        }
    }
}

//! Rendering targets and their options.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a target language without its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Go.
    Go,
    /// TypeScript.
    TypeScript,
}

impl TargetKind {
    /// Returns the lowercase name of the target.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::TypeScript => "typescript",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a target scopes enum members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scoping {
    /// Enum members share one package-level namespace with every type and
    /// every other enum's members.
    Flat,
    /// Enum members only need to be unique within their own enum.
    Namespaced,
}

/// A requested target together with its rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "language", rename_all = "lowercase")]
pub enum Target {
    /// Go source with package-level constants.
    Go(GoOptions),
    /// TypeScript declarations.
    TypeScript(TypeScriptOptions),
}

impl Target {
    /// Go target with default options.
    #[must_use]
    pub fn go() -> Self {
        Self::Go(GoOptions::default())
    }

    /// TypeScript target with default options.
    #[must_use]
    pub fn typescript() -> Self {
        Self::TypeScript(TypeScriptOptions::default())
    }

    /// Returns the target language.
    #[must_use]
    pub const fn kind(&self) -> TargetKind {
        match self {
            Self::Go(_) => TargetKind::Go,
            Self::TypeScript(_) => TargetKind::TypeScript,
        }
    }

    /// Returns the target's enum member scoping rule.
    #[must_use]
    pub const fn scoping(&self) -> Scoping {
        match self {
            Self::Go(_) => Scoping::Flat,
            Self::TypeScript(_) => Scoping::Namespaced,
        }
    }

    /// Returns the suggested output file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            Self::Go(options) => &options.file_name,
            Self::TypeScript(options) => &options.file_name,
        }
    }
}

/// Options for the Go renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoOptions {
    /// Package clause of the generated file.
    pub package: String,
    /// Suggested output file name.
    pub file_name: String,
}

impl Default for GoOptions {
    fn default() -> Self {
        Self {
            package: "gen".to_string(),
            file_name: "generated.go".to_string(),
        }
    }
}

impl GoOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the package name.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Sets the suggested file name.
    #[must_use]
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

/// How TypeScript enums are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumStyle {
    /// `export enum Name { A = 0 }`.
    #[default]
    Enum,
    /// `export type Name = 0 | 1;`.
    UnionType,
}

/// Options for the TypeScript renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeScriptOptions {
    /// Enum declaration style.
    pub enum_style: EnumStyle,
    /// Suggested output file name.
    pub file_name: String,
}

impl Default for TypeScriptOptions {
    fn default() -> Self {
        Self {
            enum_style: EnumStyle::Enum,
            file_name: "generated.ts".to_string(),
        }
    }
}

impl TypeScriptOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enum declaration style.
    #[must_use]
    pub fn enum_style(mut self, style: EnumStyle) -> Self {
        self.enum_style = style;
        self
    }

    /// Sets the suggested file name.
    #[must_use]
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

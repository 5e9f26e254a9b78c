//! Flat-scope identifier resolution.
//!
//! Targets such as Go declare enum members as package-level constants, so two
//! enums that each own a case called `X` would clash. The resolver walks the
//! model in declaration order and produces a [`ResolvedSymbols`] overlay in
//! which every emitted identifier is unique. The first symbol to claim a name
//! keeps it; later ones are suffixed with their owner's rendered type name.
//! A clash that survives the suffix is reported, never guessed around.

use crate::error::ResolutionError;
use crate::target::TargetKind;
use dtoforge_model::{EnumCase, EnumDef, TypeDef, TypeModel};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// A schema symbol a target emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymbolKey {
    /// A type declaration.
    Type(String),
    /// A member owned by a type, such as an enum case.
    Member {
        /// Owning type name in the schema.
        owner: String,
        /// Member name in the schema.
        local: String,
    },
}

impl SymbolKey {
    /// Key for a type declaration.
    #[must_use]
    pub fn type_name(name: impl Into<String>) -> Self {
        Self::Type(name.into())
    }

    /// Key for a member of `owner`.
    #[must_use]
    pub fn member(owner: impl Into<String>, local: impl Into<String>) -> Self {
        Self::Member {
            owner: owner.into(),
            local: local.into(),
        }
    }
}

impl fmt::Display for SymbolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => write!(f, "type '{name}'"),
            Self::Member { owner, local } => write!(f, "'{owner}.{local}'"),
        }
    }
}

/// Final identifiers chosen for one target, keyed by schema symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSymbols {
    target: TargetKind,
    symbols: HashMap<SymbolKey, String>,
}

impl ResolvedSymbols {
    /// Returns the target these symbols were resolved for.
    #[must_use]
    pub const fn target(&self) -> TargetKind {
        self.target
    }

    /// Returns the identifier for a symbol.
    #[must_use]
    pub fn get(&self, key: &SymbolKey) -> Option<&str> {
        self.symbols.get(key).map(String::as_str)
    }

    /// Returns the identifier for a type.
    #[must_use]
    pub fn type_name(&self, name: &str) -> Option<&str> {
        self.get(&SymbolKey::type_name(name))
    }

    /// Returns the identifier for a member of `owner`.
    #[must_use]
    pub fn member(&self, owner: &str, local: &str) -> Option<&str> {
        self.get(&SymbolKey::member(owner, local))
    }

    /// Iterates over all symbol/identifier pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolKey, &str)> {
        self.symbols.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Returns the number of resolved symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if nothing was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Natural (collision-unaware) names a flat-scope target would emit.
pub trait SymbolNaming {
    /// Target the names belong to.
    fn target(&self) -> TargetKind;

    /// Rendered name of a type declaration.
    fn type_name(&self, name: &str) -> String;

    /// Rendered name of an enum case before disambiguation.
    fn member_name(&self, owner: &EnumDef, case: &EnumCase) -> String;
}

/// Resolves every flat-scope symbol of a model for one target.
///
/// The claimed set lives only for the duration of [`resolve`](Self::resolve);
/// nothing is shared between runs.
pub struct IdentifierResolver<'a, N> {
    model: &'a TypeModel,
    naming: N,
}

impl<'a, N: SymbolNaming> IdentifierResolver<'a, N> {
    /// Creates a new resolver.
    #[must_use]
    pub fn new(model: &'a TypeModel, naming: N) -> Self {
        Self { model, naming }
    }

    /// Resolves all type names and enum cases in declaration order.
    ///
    /// # Errors
    /// Returns `ResolutionError` if two types render identically, or if a
    /// member's owner-suffixed name is already claimed.
    pub fn resolve(&self) -> Result<ResolvedSymbols, ResolutionError> {
        let target = self.naming.target();
        let mut claimed: HashMap<String, SymbolKey> = HashMap::new();
        let mut symbols = HashMap::new();

        for type_def in self.model.types() {
            let key = SymbolKey::type_name(type_def.name());
            let identifier = self.naming.type_name(type_def.name());

            match claimed.entry(identifier.clone()) {
                Entry::Occupied(holder) => {
                    let claimed_by = match holder.get() {
                        SymbolKey::Type(name) => name.clone(),
                        other => other.to_string(),
                    };
                    return Err(ResolutionError::TypeCollision {
                        target,
                        owner: type_def.name().to_string(),
                        claimed_by,
                        identifier,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(key.clone());
                }
            }
            symbols.insert(key, identifier);
        }

        for type_def in self.model.types() {
            let TypeDef::Enum(enum_def) = type_def else {
                continue;
            };
            let owner_identifier = symbols
                .get(&SymbolKey::type_name(&enum_def.name))
                .cloned()
                .unwrap_or_else(|| self.naming.type_name(&enum_def.name));

            for case in &enum_def.cases {
                let key = SymbolKey::member(&enum_def.name, &case.name);
                let natural = self.naming.member_name(enum_def, case);

                let identifier = if claimed.contains_key(&natural) {
                    let candidate = format!("{natural}{owner_identifier}");
                    if let Some(holder) = claimed.get(&candidate) {
                        return Err(ResolutionError::UnresolvableCollision {
                            target,
                            owner: enum_def.name.clone(),
                            local: case.name.clone(),
                            natural,
                            candidate,
                            claimed_by: holder.to_string(),
                        });
                    }
                    tracing::debug!(
                        target_lang = %target,
                        owner = %enum_def.name,
                        local = %case.name,
                        "renamed '{}' to '{}' to avoid a flat-scope collision",
                        natural,
                        candidate
                    );
                    candidate
                } else {
                    natural
                };

                claimed.insert(identifier.clone(), key.clone());
                symbols.insert(key, identifier);
            }
        }

        Ok(ResolvedSymbols { target, symbols })
    }
}

//! Generation pipeline.
//!
//! Validates the model, resolves flat-scope identifiers when the target needs
//! it, and hands the result to the target's renderer.

use crate::error::{CodegenError, RenderError};
use crate::go::{GoGenerator, GoNaming};
use crate::resolver::{IdentifierResolver, ResolvedSymbols};
use crate::target::{Scoping, Target, TargetKind};
use crate::typescript::TypeScriptGenerator;
use dtoforge_model::TypeModel;
use rayon::prelude::*;

/// Rendered output for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Target that produced the file.
    pub target: Target,
    /// Suggested output file name.
    pub file_name: String,
    /// Generated source text.
    pub content: String,
}

/// Renders one model to any number of targets.
pub struct Generator<'a> {
    model: &'a TypeModel,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over a model.
    #[must_use]
    pub fn new(model: &'a TypeModel) -> Self {
        Self { model }
    }

    /// Resolves flat-scope identifiers for `target`.
    ///
    /// Returns `None` for targets with namespaced enum members.
    ///
    /// # Errors
    /// Returns `CodegenError::Resolution` if a collision cannot be resolved.
    pub fn resolve(&self, target: &Target) -> Result<Option<ResolvedSymbols>, CodegenError> {
        match target.scoping() {
            Scoping::Namespaced => Ok(None),
            // Go is the only flat-scoped target
            Scoping::Flat => Ok(Some(IdentifierResolver::new(self.model, GoNaming).resolve()?)),
        }
    }

    /// Generates the file for one target.
    ///
    /// # Errors
    /// Returns `CodegenError` if the model is invalid, identifiers cannot be
    /// resolved, or the target cannot express part of the model.
    pub fn generate(&self, target: &Target) -> Result<GeneratedFile, CodegenError> {
        self.model.validate()?;
        tracing::debug!(target_lang = %target.kind(), types = self.model.len(), "generating");

        let symbols = self.resolve(target)?;
        let content = match (target, &symbols) {
            (Target::Go(options), Some(symbols)) => {
                GoGenerator::new(self.model, symbols, options).generate()?
            }
            (Target::Go(_), None) => {
                return Err(RenderError::unsupported(
                    TargetKind::Go,
                    "<package>",
                    "flat-scoped target has no resolved symbols",
                )
                .into());
            }
            (Target::TypeScript(options), _) => {
                TypeScriptGenerator::new(self.model, options).generate()?
            }
        };

        tracing::info!(
            target_lang = %target.kind(),
            file = target.file_name(),
            bytes = content.len(),
            "generated"
        );

        Ok(GeneratedFile {
            target: target.clone(),
            file_name: target.file_name().to_string(),
            content,
        })
    }

    /// Generates every target concurrently.
    ///
    /// Results come back in the order of `targets`; a failing target does not
    /// affect the others.
    #[must_use]
    pub fn generate_all(&self, targets: &[Target]) -> Vec<Result<GeneratedFile, CodegenError>> {
        targets
            .par_iter()
            .map(|target| {
                self.generate(target).inspect_err(|e| {
                    tracing::warn!(target_lang = %target.kind(), "generation failed: {}", e);
                })
            })
            .collect()
    }
}

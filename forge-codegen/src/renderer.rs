//! Renderer trait.

use std::path::PathBuf;

use svcforge_core::Artifact;

use crate::{RenderContext, Result};

/// A pure generation unit responsible for one concern of the project.
///
/// Renderers are stateless: given the same context they return the same
/// artifacts. They never touch the filesystem; the [`Engine`](crate::Engine)
/// writes what they return.
pub trait Renderer: Send + Sync {
    /// The name of this renderer (used in errors, logs and hooks).
    fn name(&self) -> &'static str;

    /// Whether this renderer takes part in the run at all.
    ///
    /// Renderers owning an optional axis return `false` when the axis is
    /// disabled, which removes both their files and their directories.
    fn applies(&self, _ctx: &RenderContext) -> bool {
        true
    }

    /// Directories this renderer owns, relative to the project root.
    fn directories(&self, _ctx: &RenderContext) -> Vec<PathBuf> {
        Vec::new()
    }

    /// Render every file this renderer owns.
    ///
    /// # Errors
    ///
    /// Returns an error when the context cannot be rendered consistently,
    /// e.g. two dependency sources pin one module at different versions.
    fn render(&self, ctx: &RenderContext) -> Result<Vec<Artifact>>;
}

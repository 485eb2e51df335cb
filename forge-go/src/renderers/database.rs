use std::path::PathBuf;

use svcforge_codegen::{RenderContext, Renderer, Result};
use svcforge_core::{Artifact, GeneratedFile};

use crate::{
    adapters,
    files::{DatabaseGo, InterfaceGo, ModelsGo, RepositoryGo},
};

/// Persistence layer for the selected engine. Skipped without a database.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseRenderer;

impl Renderer for DatabaseRenderer {
    fn name(&self) -> &'static str {
        "database"
    }

    fn applies(&self, ctx: &RenderContext) -> bool {
        ctx.database_enabled()
    }

    fn directories(&self, _ctx: &RenderContext) -> Vec<PathBuf> {
        ["pkg/database", "internal/repository", "internal/models"]
            .into_iter()
            .map(PathBuf::from)
            .collect()
    }

    fn render(&self, ctx: &RenderContext) -> Result<Vec<Artifact>> {
        let Some(adapter) = adapters::database(ctx.database()) else {
            return Ok(Vec::new());
        };
        Ok(vec![
            InterfaceGo::new(ctx).to_artifact(),
            DatabaseGo::new(ctx, adapter).to_artifact(),
            RepositoryGo::new(ctx).to_artifact(),
            ModelsGo.to_artifact(),
        ])
    }
}

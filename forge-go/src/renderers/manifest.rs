use svcforge_codegen::{DependencySet, RenderContext, Renderer, Result};
use svcforge_core::{Artifact, GeneratedFile};
use tracing::debug;

use crate::{adapters, files::GoMod, versions};

/// `go.mod` with the union of every enabled axis' requirements.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestRenderer;

impl Renderer for ManifestRenderer {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Vec<Artifact>> {
        let dependencies = dependencies(ctx)?;
        debug!(count = dependencies.len(), "resolved module requirements");
        Ok(vec![GoMod::new(ctx.module_path(), &dependencies).to_artifact()])
    }
}

/// Baseline, framework, database (if enabled) and RPC (if enabled)
/// requirements, in that order.
///
/// # Errors
///
/// Returns [`svcforge_codegen::Error::DependencyConflict`] when two sources
/// pin one module at different versions.
pub fn dependencies(ctx: &RenderContext) -> Result<DependencySet> {
    let mut set = DependencySet::new();
    set.extend(versions::BASELINE)?;
    set.extend(adapters::framework(ctx.framework()).dependencies())?;
    if let Some(adapter) = adapters::database(ctx.database()) {
        set.extend(adapter.dependencies())?;
    }
    if ctx.rpc_enabled() {
        set.extend(versions::GRPC)?;
    }
    Ok(set)
}

use svcforge_codegen::{RenderContext, Renderer, Result};
use svcforge_core::{Artifact, GeneratedFile};

use crate::{
    adapters,
    files::{AppGo, ContextGo, LoggerGo, MainGo},
};

/// Entrypoint, application lifecycle, request context and logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntrypointRenderer;

impl Renderer for EntrypointRenderer {
    fn name(&self) -> &'static str {
        "entrypoint"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Vec<Artifact>> {
        let framework = adapters::framework(ctx.framework());
        Ok(vec![
            MainGo::new(ctx).to_artifact(),
            AppGo::new(ctx, framework).to_artifact(),
            ContextGo::new(ctx).to_artifact(),
            LoggerGo.to_artifact(),
        ])
    }
}

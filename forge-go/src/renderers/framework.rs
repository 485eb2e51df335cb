use svcforge_codegen::{RenderContext, Renderer, Result};
use svcforge_core::{Artifact, GeneratedFile};

use crate::{
    adapters,
    files::{HandlerGo, HealthGo, MiddlewareGo},
};

/// Routing, health reporting and request logging for the selected framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameworkRenderer;

impl Renderer for FrameworkRenderer {
    fn name(&self) -> &'static str {
        "framework"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Vec<Artifact>> {
        let framework = adapters::framework(ctx.framework());
        Ok(vec![
            HandlerGo::new(ctx, framework).to_artifact(),
            HealthGo::new(ctx, framework).to_artifact(),
            MiddlewareGo::new(ctx, framework).to_artifact(),
        ])
    }
}

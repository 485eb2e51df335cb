use svcforge_codegen::{RenderContext, Renderer, Result};
use svcforge_core::{Artifact, GeneratedFile};

use crate::files::{GitIgnore, Makefile};

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildRenderer;

impl Renderer for BuildRenderer {
    fn name(&self) -> &'static str {
        "build"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Vec<Artifact>> {
        Ok(vec![Makefile::new(ctx).to_artifact(), GitIgnore.to_artifact()])
    }
}

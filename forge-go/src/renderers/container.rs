use svcforge_codegen::{RenderContext, Renderer, Result};
use svcforge_core::{Artifact, GeneratedFile};

use crate::{
    adapters,
    files::{DockerCompose, DockerIgnore, Dockerfile},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerRenderer;

impl Renderer for ContainerRenderer {
    fn name(&self) -> &'static str {
        "container"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Vec<Artifact>> {
        let database = adapters::database(ctx.database());
        Ok(vec![
            Dockerfile::new(ctx, database).to_artifact(),
            DockerCompose::new(ctx, database).to_artifact(),
            DockerIgnore.to_artifact(),
        ])
    }
}

use svcforge_codegen::{RenderContext, Renderer, Result};
use svcforge_core::{Artifact, GeneratedFile};

use crate::{
    adapters,
    files::{ConfigGo, ConfigYaml},
};

/// `config.yaml` and the Go loader, both rendered from one section table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsRenderer;

impl Renderer for SettingsRenderer {
    fn name(&self) -> &'static str {
        "settings"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Vec<Artifact>> {
        Ok(vec![
            ConfigYaml::new(ctx).to_artifact(),
            ConfigGo::new(ctx, adapters::database(ctx.database())).to_artifact(),
        ])
    }
}

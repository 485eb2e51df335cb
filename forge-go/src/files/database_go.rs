use std::path::PathBuf;

use svcforge_codegen::RenderContext;
use svcforge_core::GeneratedFile;

use crate::adapters::DatabaseAdapter;

/// `pkg/database/database.go`: the selected engine's implementation.
pub struct DatabaseGo<'a> {
    ctx: &'a RenderContext,
    adapter: &'a dyn DatabaseAdapter,
}

impl<'a> DatabaseGo<'a> {
    pub fn new(ctx: &'a RenderContext, adapter: &'a dyn DatabaseAdapter) -> Self {
        Self { ctx, adapter }
    }
}

impl GeneratedFile for DatabaseGo<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("pkg/database/database.go")
    }

    fn render(&self) -> String {
        self.adapter.implementation(self.ctx).render()
    }
}

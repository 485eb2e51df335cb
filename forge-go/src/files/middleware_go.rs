use std::path::PathBuf;

use svcforge_codegen::RenderContext;
use svcforge_core::GeneratedFile;

use crate::{GoFile, Import, adapters::HttpFramework};

/// `internal/middleware/middleware.go`: framework-native request logging.
pub struct MiddlewareGo<'a> {
    ctx: &'a RenderContext,
    framework: &'a dyn HttpFramework,
}

impl<'a> MiddlewareGo<'a> {
    pub fn new(ctx: &'a RenderContext, framework: &'a dyn HttpFramework) -> Self {
        Self { ctx, framework }
    }
}

impl GeneratedFile for MiddlewareGo<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("internal/middleware/middleware.go")
    }

    fn render(&self) -> String {
        GoFile::new("middleware")
            .in_module(self.ctx.module_path())
            .import(Import::new("time"))
            .imports(self.framework.middleware_imports())
            .import(Import::new(self.ctx.import("pkg/logger")))
            .section(self.framework.request_logger())
            .render()
    }
}

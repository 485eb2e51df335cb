use std::path::PathBuf;

use svcforge_codegen::RenderContext;
use svcforge_core::GeneratedFile;

use crate::{GoFile, Import, settings::API_BASE_PATH};

/// `cmd/main.go`: loads the settings file and runs the application.
pub struct MainGo<'a> {
    ctx: &'a RenderContext,
}

impl<'a> MainGo<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for MainGo<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("cmd/main.go")
    }

    fn render(&self) -> String {
        let ctx = self.ctx;
        let annotations = format!(
            "// @title {name} API\n// @version {version}\n// @description API documentation for {name}\n// @host localhost:{port}\n// @BasePath {base}",
            name = ctx.name(),
            version = ctx.app_version(),
            port = ctx.http_port(),
            base = API_BASE_PATH,
        );

        GoFile::new("main")
            .in_module(ctx.module_path())
            .import(Import::new("log"))
            .import(Import::new(ctx.import("internal/app")))
            .import(Import::new(ctx.import("internal/config")))
            .section(&format!("{}\n{}", annotations, MAIN))
            .render()
    }
}

const MAIN: &str = r#"func main() {
	cfg, err := config.Load("config.yaml")
	if err != nil {
		log.Fatalf("failed to load config: %v", err)
	}

	if err := app.New(cfg).Run(); err != nil {
		log.Fatalf("application stopped: %v", err)
	}
}"#;

use std::path::PathBuf;

use svcforge_codegen::{RenderContext, builder::CodeBuilder};
use svcforge_core::GeneratedFile;

use crate::{GoField, GoFile, GoStruct, Import, adapters::HttpFramework};

/// `internal/handlers/handler.go`: handler type, routes and the ping probe.
pub struct HandlerGo<'a> {
    ctx: &'a RenderContext,
    framework: &'a dyn HttpFramework,
}

impl<'a> HandlerGo<'a> {
    pub fn new(ctx: &'a RenderContext, framework: &'a dyn HttpFramework) -> Self {
        Self { ctx, framework }
    }

    fn handler_struct(&self) -> GoStruct {
        GoStruct::new("Handler")
            .doc("serves the HTTP API.")
            .field(GoField::new("cfg", "*config.Config"))
            .field(GoField::new("logger", "logger.Logger"))
            .fields(
                self.ctx
                    .database_enabled()
                    .then(|| GoField::new("db", "database.Database")),
            )
    }

    fn constructor(&self) -> String {
        let db = self.ctx.database_enabled();
        let params = if db {
            "cfg *config.Config, log logger.Logger, db database.Database"
        } else {
            "cfg *config.Config, log logger.Logger"
        };

        CodeBuilder::go()
            .comment("New creates a handler.")
            .block_with_close(&format!("func New({}) *Handler {{", params), "}", |b| {
                b.block_with_close("return &Handler{", "}", |b| {
                    b.line("cfg:    cfg,")
                        .line("logger: log,")
                        .when(db, |b| b.line("db:     db,"))
                })
            })
            .build()
    }

    fn ping(&self) -> String {
        let result = if self.framework.handler_returns_error() {
            " error"
        } else {
            ""
        };
        format!(
            "{}\nfunc (h *Handler) Ping({}){} {{\n{}\n}}",
            PING_DOC,
            self.framework.handler_params(),
            result,
            self.framework.ping()
        )
    }
}

impl GeneratedFile for HandlerGo<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("internal/handlers/handler.go")
    }

    fn render(&self) -> String {
        let ctx = self.ctx;
        GoFile::new("handlers")
            .in_module(ctx.module_path())
            .imports(self.framework.router_imports())
            .import(Import::new(ctx.import("internal/config")))
            .import(Import::new(ctx.import("internal/middleware")))
            .import(Import::new(ctx.import("pkg/logger")))
            .imports(
                ctx.database_enabled()
                    .then(|| Import::new(ctx.import("pkg/database"))),
            )
            .add(self.handler_struct())
            .section(&self.constructor())
            .section(&format!(
                "// SetupRoutes registers every route and middleware.\nfunc (h *Handler) SetupRoutes() {} {{\n{}\n}}",
                self.framework.router_type(),
                self.framework.setup_routes()
            ))
            .section(&self.ping())
            .render()
    }
}

const PING_DOC: &str = r#"// Ping answers the echo probe.
// @Summary Ping
// @Description Echo probe returning the service name and version
// @Tags health
// @Produce json
// @Success 200 {object} map[string]string
// @Router /api/v1/ping [get]"#;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use svcforge_config::{Database, Framework, ProjectConfig};

    use super::*;
    use crate::adapters;

    fn render(framework: Framework, database: Database) -> String {
        let config = ProjectConfig::builder("orders")
            .with_module_path("example.org/orders")
            .with_framework(framework)
            .with_database(database)
            .resolve_in(Path::new("/work"))
            .unwrap();
        let ctx = RenderContext::new(&config);
        HandlerGo::new(&ctx, adapters::framework(framework)).render()
    }

    #[test]
    fn test_routes_for_every_framework() {
        for framework in Framework::ALL {
            let code = render(framework, Database::None);
            assert!(code.contains("\"/health\", h.HealthCheck"), "{framework}");
            assert!(code.contains("Group(\"/api/v1\")"), "{framework}");
            assert!(code.contains("\"/ping\", h.Ping"), "{framework}");
            assert!(code.contains("if h.cfg.Swagger.Enabled {"), "{framework}");
        }
    }

    #[test]
    fn test_router_types() {
        assert!(render(Framework::Gin, Database::None).contains("SetupRoutes() *gin.Engine {"));
        assert!(render(Framework::Fiber, Database::None).contains("SetupRoutes() *fiber.App {"));
        assert!(render(Framework::Echo, Database::None).contains("SetupRoutes() *echo.Echo {"));
    }

    #[test]
    fn test_database_field_follows_axis() {
        let with_db = render(Framework::Gin, Database::Postgres);
        assert!(with_db.contains("\tdb     database.Database\n"));
        assert!(with_db.contains("func New(cfg *config.Config, log logger.Logger, db database.Database) *Handler {"));

        let without_db = render(Framework::Gin, Database::None);
        assert!(!without_db.contains("database"));
    }

    #[test]
    fn test_handler_struct_snapshot() {
        let config = ProjectConfig::builder("orders")
            .with_database(Database::Mysql)
            .resolve_in(Path::new("/work"))
            .unwrap();
        let ctx = RenderContext::new(&config);
        let handler = HandlerGo::new(&ctx, adapters::framework(Framework::Gin));
        let mut builder = CodeBuilder::go();
        builder.emit(&handler.handler_struct());

        insta::assert_snapshot!(builder.build(), @r"
        // Handler serves the HTTP API.
        type Handler struct {
        	cfg    *config.Config
        	logger logger.Logger
        	db     database.Database
        }
        ");
    }
}

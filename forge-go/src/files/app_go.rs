use std::path::PathBuf;

use svcforge_codegen::{RenderContext, builder::CodeBuilder};
use svcforge_core::GeneratedFile;

use crate::{
    GoFile, Import,
    adapters::{HttpFramework, Lifecycle},
};

/// `internal/app/app.go`: application lifecycle.
///
/// Opens the database when one is selected, serves HTTP through the
/// framework's lifecycle, runs the gRPC server next to it when enabled and
/// shuts everything down on SIGINT/SIGTERM.
pub struct AppGo<'a> {
    ctx: &'a RenderContext,
    framework: &'a dyn HttpFramework,
}

impl<'a> AppGo<'a> {
    pub fn new(ctx: &'a RenderContext, framework: &'a dyn HttpFramework) -> Self {
        Self { ctx, framework }
    }

    fn imports(&self) -> Vec<Import> {
        let ctx = self.ctx;
        let mut imports: Vec<Import> = ["fmt", "os", "os/signal", "syscall"]
            .into_iter()
            .map(Import::new)
            .collect();
        if self.framework.lifecycle() == Lifecycle::HttpServer {
            imports.extend(["context", "errors", "net/http", "time"].map(Import::new));
        }
        imports.push(Import::new(ctx.import("internal/config")));
        imports.push(Import::new(ctx.import("internal/handlers")));
        imports.push(Import::new(ctx.import("pkg/logger")));
        if ctx.database_enabled() {
            imports.push(Import::new(ctx.import("pkg/database")));
        }
        if ctx.rpc_enabled() {
            imports.push(Import::new(ctx.import("internal/grpc")).alias("grpcserver"));
        }
        imports
    }

    fn run(&self) -> String {
        let native = self.framework.lifecycle() == Lifecycle::Native;
        let handler = if self.ctx.database_enabled() {
            "handler := handlers.New(a.cfg, a.logger, db)"
        } else {
            "handler := handlers.New(a.cfg, a.logger)"
        };

        CodeBuilder::go()
            .comment("Run starts every server and blocks until SIGINT or SIGTERM.")
            .block_with_close("func (a *App) Run() error {", "}", |b| {
                b.when(self.ctx.database_enabled(), |b| b.text(OPEN_DATABASE).blank())
                    .line(handler)
                    .line("errs := make(chan error, 2)")
                    .blank()
                    .text(if native { SERVE_NATIVE } else { SERVE_HTTP })
                    .blank()
                    .when(self.ctx.rpc_enabled(), |b| b.text(SERVE_RPC).blank())
                    .text(WAIT)
                    .blank()
                    .when(self.ctx.rpc_enabled(), |b| b.text(STOP_RPC).blank())
                    .text(if native { STOP_NATIVE } else { STOP_HTTP })
            })
            .build()
    }
}

impl GeneratedFile for AppGo<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("internal/app/app.go")
    }

    fn render(&self) -> String {
        GoFile::new("app")
            .in_module(self.ctx.module_path())
            .imports(self.imports())
            .section(APP)
            .section(&self.run())
            .render()
    }
}

const APP: &str = r#"// App wires configuration, logging and servers together.
type App struct {
	cfg    *config.Config
	logger logger.Logger
}

// New creates the application from a loaded configuration.
func New(cfg *config.Config) *App {
	return &App{
		cfg: cfg,
		logger: logger.New(logger.LoggerConfig{
			Level:  cfg.Logger.Level,
			Format: cfg.Logger.Format,
			Output: cfg.Logger.Output,
		}),
	}
}"#;

const OPEN_DATABASE: &str = r#"db, err := database.New(a.cfg)
if err != nil {
	return fmt.Errorf("failed to connect to database: %w", err)
}
defer db.Close()

if err := db.Migrate(); err != nil {
	return fmt.Errorf("failed to migrate database: %w", err)
}"#;

const SERVE_HTTP: &str = r#"server := &http.Server{
	Addr:         fmt.Sprintf(":%d", a.cfg.App.Port),
	Handler:      handler.SetupRoutes(),
	ReadTimeout:  15 * time.Second,
	WriteTimeout: 15 * time.Second,
	IdleTimeout:  60 * time.Second,
}

go func() {
	a.logger.Info("HTTP server started", "port", a.cfg.App.Port)
	if err := server.ListenAndServe(); err != nil && !errors.Is(err, http.ErrServerClosed) {
		errs <- err
	}
}()"#;

const SERVE_NATIVE: &str = r#"router := handler.SetupRoutes()

go func() {
	a.logger.Info("HTTP server started", "port", a.cfg.App.Port)
	if err := router.Listen(fmt.Sprintf(":%d", a.cfg.App.Port)); err != nil {
		errs <- err
	}
}()"#;

const SERVE_RPC: &str = r#"var rpcServer *grpcserver.Server
if a.cfg.Grpc.Enabled {
	rpcServer = grpcserver.New(a.cfg, a.logger)
	go func() {
		if err := rpcServer.Start(); err != nil {
			errs <- err
		}
	}()
}"#;

const WAIT: &str = r#"quit := make(chan os.Signal, 1)
signal.Notify(quit, syscall.SIGINT, syscall.SIGTERM)

select {
case sig := <-quit:
	a.logger.Info("shutting down", "signal", sig.String())
case err := <-errs:
	return fmt.Errorf("server failed: %w", err)
}"#;

const STOP_RPC: &str = r#"if rpcServer != nil {
	rpcServer.Stop()
}"#;

const STOP_HTTP: &str = r#"ctx, cancel := context.WithTimeout(context.Background(), 30*time.Second)
defer cancel()

return server.Shutdown(ctx)"#;

const STOP_NATIVE: &str = "return router.Shutdown()";

#[cfg(test)]
mod tests {
    use std::path::Path;

    use svcforge_config::{Database, Framework, ProjectConfig};

    use super::*;
    use crate::adapters;

    fn render(framework: Framework, database: Database, rpc: bool) -> String {
        let config = ProjectConfig::builder("orders")
            .with_module_path("example.org/orders")
            .with_framework(framework)
            .with_database(database)
            .with_rpc(rpc)
            .resolve_in(Path::new("/work"))
            .unwrap();
        let ctx = RenderContext::new(&config);
        AppGo::new(&ctx, adapters::framework(framework)).render()
    }

    #[test]
    fn test_fiber_uses_native_lifecycle() {
        let code = render(Framework::Fiber, Database::None, false);
        assert!(code.contains("router.Listen("));
        assert!(code.contains("return router.Shutdown()"));
        assert!(!code.contains("http.Server"));
        assert!(!code.contains("\"net/http\""));
    }

    #[test]
    fn test_gin_uses_http_server() {
        let code = render(Framework::Gin, Database::None, false);
        assert!(code.contains("server := &http.Server{"));
        assert!(code.contains("\t\tIdleTimeout:  60 * time.Second,\n"));
        assert!(code.contains("return server.Shutdown(ctx)"));
    }

    #[test]
    fn test_database_is_opened_only_when_selected() {
        let with_db = render(Framework::Echo, Database::Mysql, false);
        assert!(with_db.contains("db, err := database.New(a.cfg)"));
        assert!(with_db.contains("handlers.New(a.cfg, a.logger, db)"));

        let without_db = render(Framework::Echo, Database::None, false);
        assert!(!without_db.contains("database"));
        assert!(without_db.contains("handlers.New(a.cfg, a.logger)"));
    }

    #[test]
    fn test_grpc_server_is_wired_into_lifecycle() {
        let code = render(Framework::Gin, Database::None, true);
        assert!(code.contains("grpcserver \"example.org/orders/internal/grpc\""));
        assert!(code.contains("rpcServer.Start()"));
        assert!(code.contains("rpcServer.Stop()"));

        assert!(!render(Framework::Gin, Database::None, false).contains("grpc"));
    }
}

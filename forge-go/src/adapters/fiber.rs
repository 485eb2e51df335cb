//! Fiber adapter.

use svcforge_codegen::Dependency;
use svcforge_config::Framework;

use super::{HttpFramework, Lifecycle, StatusCodes};
use crate::{Import, versions};

/// Adapter for `github.com/gofiber/fiber/v2`.
///
/// Fiber runs its own fasthttp listener, so the application lifecycle uses
/// `Listen`/`Shutdown` instead of `net/http`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiberAdapter;

impl HttpFramework for FiberAdapter {
    fn framework(&self) -> Framework {
        Framework::Fiber
    }

    fn dependencies(&self) -> &'static [Dependency] {
        versions::FIBER
    }

    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::Native
    }

    fn router_imports(&self) -> Vec<Import> {
        vec![
            Import::new("github.com/gofiber/fiber/v2"),
            Import::new("github.com/gofiber/fiber/v2/middleware/cors"),
            Import::new("github.com/gofiber/fiber/v2/middleware/recover"),
            Import::new("github.com/gofiber/swagger"),
        ]
    }

    fn router_type(&self) -> &'static str {
        "*fiber.App"
    }

    fn setup_routes(&self) -> &'static str {
        r#"	app := fiber.New(fiber.Config{
		AppName: h.cfg.App.Name,
	})

	app.Use(middleware.RequestLogger(h.logger))
	app.Use(recover.New())
	app.Use(cors.New())

	app.Get("/health", h.HealthCheck)

	api := app.Group("/api/v1")
	api.Get("/ping", h.Ping)

	if h.cfg.Swagger.Enabled {
		app.Get("/swagger/*", swagger.HandlerDefault)
	}

	return app"#
    }

    fn handler_params(&self) -> &'static str {
        "c *fiber.Ctx"
    }

    fn handler_returns_error(&self) -> bool {
        true
    }

    fn ping(&self) -> &'static str {
        r#"	return c.JSON(fiber.Map{
		"message": "pong",
		"service": h.cfg.App.Name,
		"version": h.cfg.App.Version,
	})"#
    }

    fn health_imports(&self) -> Vec<Import> {
        vec![Import::new("github.com/gofiber/fiber/v2")]
    }

    fn status_codes(&self) -> StatusCodes {
        StatusCodes {
            ok: "fiber.StatusOK",
            unavailable: "fiber.StatusServiceUnavailable",
        }
    }

    fn respond(&self, status: &str, body: &str) -> String {
        format!("return c.Status({}).JSON({})", status, body)
    }

    fn middleware_imports(&self) -> Vec<Import> {
        vec![Import::new("github.com/gofiber/fiber/v2")]
    }

    fn request_logger(&self) -> &'static str {
        r#"// RequestLogger logs every request with its status and latency.
func RequestLogger(log logger.Logger) fiber.Handler {
	return func(c *fiber.Ctx) error {
		start := time.Now()
		err := c.Next()
		log.Info("request",
			"method", c.Method(),
			"path", c.Path(),
			"status", c.Response().StatusCode(),
			"latency", time.Since(start).String(),
		)
		return err
	}
}"#
    }
}

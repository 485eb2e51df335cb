//! Echo adapter.

use svcforge_codegen::Dependency;
use svcforge_config::Framework;

use super::{HttpFramework, Lifecycle, StatusCodes};
use crate::{Import, versions};

/// Adapter for `github.com/labstack/echo/v4`.
///
/// Echo's own middleware package is imported as `echomw` so it does not
/// shadow the generated `internal/middleware` package.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoAdapter;

impl HttpFramework for EchoAdapter {
    fn framework(&self) -> Framework {
        Framework::Echo
    }

    fn dependencies(&self) -> &'static [Dependency] {
        versions::ECHO
    }

    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::HttpServer
    }

    fn router_imports(&self) -> Vec<Import> {
        vec![
            Import::new("net/http"),
            Import::new("github.com/labstack/echo/v4"),
            Import::new("github.com/labstack/echo/v4/middleware").alias("echomw"),
            Import::new("github.com/swaggo/echo-swagger").alias("echoSwagger"),
        ]
    }

    fn router_type(&self) -> &'static str {
        "*echo.Echo"
    }

    fn setup_routes(&self) -> &'static str {
        r#"	e := echo.New()
	e.HideBanner = true

	e.Use(middleware.RequestLogger(h.logger))
	e.Use(echomw.Recover())
	e.Use(echomw.CORS())

	e.GET("/health", h.HealthCheck)

	api := e.Group("/api/v1")
	api.GET("/ping", h.Ping)

	if h.cfg.Swagger.Enabled {
		e.GET("/swagger/*", echoSwagger.WrapHandler)
	}

	return e"#
    }

    fn handler_params(&self) -> &'static str {
        "c echo.Context"
    }

    fn handler_returns_error(&self) -> bool {
        true
    }

    fn ping(&self) -> &'static str {
        r#"	return c.JSON(http.StatusOK, map[string]interface{}{
		"message": "pong",
		"service": h.cfg.App.Name,
		"version": h.cfg.App.Version,
	})"#
    }

    fn health_imports(&self) -> Vec<Import> {
        vec![
            Import::new("net/http"),
            Import::new("github.com/labstack/echo/v4"),
        ]
    }

    fn status_codes(&self) -> StatusCodes {
        StatusCodes {
            ok: "http.StatusOK",
            unavailable: "http.StatusServiceUnavailable",
        }
    }

    fn respond(&self, status: &str, body: &str) -> String {
        format!("return c.JSON({}, {})", status, body)
    }

    fn middleware_imports(&self) -> Vec<Import> {
        vec![Import::new("github.com/labstack/echo/v4")]
    }

    fn request_logger(&self) -> &'static str {
        r#"// RequestLogger logs every request with its status and latency.
func RequestLogger(log logger.Logger) echo.MiddlewareFunc {
	return func(next echo.HandlerFunc) echo.HandlerFunc {
		return func(c echo.Context) error {
			start := time.Now()
			err := next(c)
			log.Info("request",
				"method", c.Request().Method,
				"path", c.Request().URL.Path,
				"status", c.Response().Status,
				"latency", time.Since(start).String(),
			)
			return err
		}
	}
}"#
    }
}

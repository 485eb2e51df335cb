//! Gin adapter.

use svcforge_codegen::Dependency;
use svcforge_config::Framework;

use super::{HttpFramework, Lifecycle, StatusCodes};
use crate::{Import, versions};

/// Adapter for `github.com/gin-gonic/gin`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GinAdapter;

impl HttpFramework for GinAdapter {
    fn framework(&self) -> Framework {
        Framework::Gin
    }

    fn dependencies(&self) -> &'static [Dependency] {
        versions::GIN
    }

    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::HttpServer
    }

    fn router_imports(&self) -> Vec<Import> {
        vec![
            Import::new("net/http"),
            Import::new("github.com/gin-gonic/gin"),
            Import::new("github.com/swaggo/files").alias("swaggerFiles"),
            Import::new("github.com/swaggo/gin-swagger").alias("ginSwagger"),
        ]
    }

    fn router_type(&self) -> &'static str {
        "*gin.Engine"
    }

    fn setup_routes(&self) -> &'static str {
        r#"	if h.cfg.App.Debug {
		gin.SetMode(gin.DebugMode)
	} else {
		gin.SetMode(gin.ReleaseMode)
	}

	router := gin.New()
	router.Use(middleware.RequestLogger(h.logger))
	router.Use(gin.Recovery())

	router.GET("/health", h.HealthCheck)

	api := router.Group("/api/v1")
	api.GET("/ping", h.Ping)

	if h.cfg.Swagger.Enabled {
		router.GET("/swagger/*any", ginSwagger.WrapHandler(swaggerFiles.Handler))
	}

	return router"#
    }

    fn handler_params(&self) -> &'static str {
        "c *gin.Context"
    }

    fn handler_returns_error(&self) -> bool {
        false
    }

    fn ping(&self) -> &'static str {
        r#"	c.JSON(http.StatusOK, gin.H{
		"message": "pong",
		"service": h.cfg.App.Name,
		"version": h.cfg.App.Version,
	})"#
    }

    fn health_imports(&self) -> Vec<Import> {
        vec![
            Import::new("net/http"),
            Import::new("github.com/gin-gonic/gin"),
        ]
    }

    fn status_codes(&self) -> StatusCodes {
        StatusCodes {
            ok: "http.StatusOK",
            unavailable: "http.StatusServiceUnavailable",
        }
    }

    fn respond(&self, status: &str, body: &str) -> String {
        format!("c.JSON({}, {})", status, body)
    }

    fn middleware_imports(&self) -> Vec<Import> {
        vec![Import::new("github.com/gin-gonic/gin")]
    }

    fn request_logger(&self) -> &'static str {
        r#"// RequestLogger logs every request with its status and latency.
func RequestLogger(log logger.Logger) gin.HandlerFunc {
	return func(c *gin.Context) {
		start := time.Now()
		c.Next()
		log.Info("request",
			"method", c.Request.Method,
			"path", c.Request.URL.Path,
			"status", c.Writer.Status(),
			"latency", time.Since(start).String(),
		)
	}
}"#
    }
}

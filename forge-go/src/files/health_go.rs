use std::path::PathBuf;

use svcforge_codegen::{RenderContext, builder::CodeBuilder};
use svcforge_core::GeneratedFile;

use crate::{GoField, GoFile, GoStruct, Import, adapters::HttpFramework};

/// `internal/handlers/health.go`: liveness report.
///
/// The report carries a `database` status iff a database is selected.
pub struct HealthGo<'a> {
    ctx: &'a RenderContext,
    framework: &'a dyn HttpFramework,
}

impl<'a> HealthGo<'a> {
    pub fn new(ctx: &'a RenderContext, framework: &'a dyn HttpFramework) -> Self {
        Self { ctx, framework }
    }

    fn response(&self) -> GoStruct {
        GoStruct::new("HealthResponse")
            .doc("is the body of the health endpoint.")
            .field(GoField::new("Status", "string").json("status"))
            .field(GoField::new("Service", "string").json("service"))
            .field(GoField::new("Version", "string").json("version"))
            .field(GoField::new("Timestamp", "time.Time").json("timestamp"))
            .field(GoField::new("Uptime", "string").json("uptime"))
            .field(GoField::new("System", "SystemInfo").json("system"))
            .fields(
                self.ctx
                    .database_enabled()
                    .then(|| GoField::new("Database", "*DatabaseStatus").json("database,omitempty")),
            )
    }

    fn check(&self) -> String {
        let codes = self.framework.status_codes();
        let result = if self.framework.handler_returns_error() {
            " error"
        } else {
            ""
        };

        CodeBuilder::go()
            .text(HEALTH_DOC)
            .block_with_close(
                &format!(
                    "func (h *Handler) HealthCheck({}){} {{",
                    self.framework.handler_params(),
                    result
                ),
                "}",
                |b| {
                    b.text(RESPONSE)
                        .blank()
                        .when(self.ctx.database_enabled(), |b| b.text(DATABASE_STATUS).blank())
                        .line(&format!("status := {}", codes.ok))
                        .block_with_close("if response.Status != \"ok\" {", "}", |b| {
                            b.line(&format!("status = {}", codes.unavailable))
                        })
                        .blank()
                        .line(&self.framework.respond("status", "response"))
                },
            )
            .build()
    }
}

impl GeneratedFile for HealthGo<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("internal/handlers/health.go")
    }

    fn render(&self) -> String {
        let system = GoStruct::new("SystemInfo")
            .doc("describes the Go runtime.")
            .field(GoField::new("GoVersion", "string").json("go_version"))
            .field(GoField::new("NumCPU", "int").json("num_cpu"))
            .field(GoField::new("Goroutines", "int").json("goroutines"));

        let mut file = GoFile::new("handlers")
            .import(Import::new("runtime"))
            .import(Import::new("time"))
            .imports(self.framework.health_imports())
            .add(self.response())
            .add(system);

        if self.ctx.database_enabled() {
            file = file.add(
                GoStruct::new("DatabaseStatus")
                    .doc("reports database reachability.")
                    .field(GoField::new("Connected", "bool").json("connected"))
                    .field(GoField::new("Error", "string").json("error,omitempty")),
            );
        }

        file.section("var startTime = time.Now()")
            .section(&self.check())
            .render()
    }
}

const HEALTH_DOC: &str = r#"// HealthCheck reports service liveness.
// @Summary Health check
// @Description Service status, runtime information and dependency health
// @Tags health
// @Produce json
// @Success 200 {object} HealthResponse
// @Failure 503 {object} HealthResponse
// @Router /health [get]"#;

const RESPONSE: &str = r#"response := HealthResponse{
	Status:    "ok",
	Service:   h.cfg.App.Name,
	Version:   h.cfg.App.Version,
	Timestamp: time.Now(),
	Uptime:    time.Since(startTime).String(),
	System: SystemInfo{
		GoVersion:  runtime.Version(),
		NumCPU:     runtime.NumCPU(),
		Goroutines: runtime.NumGoroutine(),
	},
}"#;

const DATABASE_STATUS: &str = r#"dbStatus := &DatabaseStatus{Connected: true}
if err := h.db.Ping(); err != nil {
	dbStatus.Connected = false
	dbStatus.Error = err.Error()
	response.Status = "degraded"
}
response.Database = dbStatus"#;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use svcforge_config::{Database, Framework, ProjectConfig};

    use super::*;
    use crate::adapters;

    fn render(framework: Framework, database: Database) -> String {
        let config = ProjectConfig::builder("orders")
            .with_framework(framework)
            .with_database(database)
            .resolve_in(Path::new("/work"))
            .unwrap();
        let ctx = RenderContext::new(&config);
        HealthGo::new(&ctx, adapters::framework(framework)).render()
    }

    #[test]
    fn test_database_status_only_with_database() {
        let with_db = render(Framework::Gin, Database::Postgres);
        assert!(with_db.contains("type DatabaseStatus struct {"));
        assert!(with_db.contains("`json:\"database,omitempty\"`"));
        assert!(with_db.contains("h.db.Ping()"));

        let without_db = render(Framework::Gin, Database::None);
        assert!(!without_db.contains("DatabaseStatus"));
        assert!(!without_db.contains("h.db"));
    }

    #[test]
    fn test_fiber_responds_through_status() {
        let code = render(Framework::Fiber, Database::None);
        assert!(code.contains("func (h *Handler) HealthCheck(c *fiber.Ctx) error {"));
        assert!(code.contains("\treturn c.Status(status).JSON(response)\n"));
        assert!(code.contains("status := fiber.StatusOK"));
        assert!(!code.contains("net/http"));
    }

    #[test]
    fn test_gin_handler_has_no_return_value() {
        let code = render(Framework::Gin, Database::None);
        assert!(code.contains("func (h *Handler) HealthCheck(c *gin.Context) {"));
        assert!(code.contains("\tc.JSON(status, response)\n"));
        assert!(code.contains("\t\tstatus = http.StatusServiceUnavailable\n"));
    }
}

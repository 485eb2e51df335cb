//! The settings table shared by `config.yaml` and its Go loader.
//!
//! Both files are rendered from [`sections`], so every key in the document
//! has a matching `yaml:"…"` tag on a loader field and vice versa.

use svcforge_codegen::RenderContext;
use svcforge_core::to_pascal_case;

use crate::adapters;

/// Route prefix of the versioned API.
pub(crate) const API_BASE_PATH: &str = "/api/v1";

/// A scalar settings value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl Value {
    pub fn go_type(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
        }
    }

    /// YAML scalar; strings are always double-quoted.
    pub fn to_yaml(&self) -> String {
        match self {
            Value::Str(s) => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
            Value::Int(i) => i.to_string(),
            Value::Bool(b) => b.to_string(),
        }
    }
}

/// One key of a settings section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    key: &'static str,
    value: Value,
}

impl Setting {
    pub fn str(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: Value::Str(value.into()),
        }
    }

    pub fn int(key: &'static str, value: i64) -> Self {
        Self {
            key,
            value: Value::Int(value),
        }
    }

    pub fn bool(key: &'static str, value: bool) -> Self {
        Self {
            key,
            value: Value::Bool(value),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Exported Go field name (`max_connections` -> `MaxConnections`).
    pub fn go_name(&self) -> String {
        to_pascal_case(self.key)
    }
}

/// A top-level block of `config.yaml`, loaded into one Go struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    key: &'static str,
    settings: Vec<Setting>,
}

impl Section {
    pub fn new(key: &'static str, settings: Vec<Setting>) -> Self {
        Self { key, settings }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn settings(&self) -> &[Setting] {
        &self.settings
    }

    /// Field name on the root `Config` struct.
    pub fn go_name(&self) -> String {
        to_pascal_case(self.key)
    }

    /// Go type holding this section (`grpc` -> `GrpcConfig`).
    pub fn type_name(&self) -> String {
        format!("{}Config", self.go_name())
    }
}

/// Every settings section for `ctx`, in document order.
///
/// The database section is present iff a database is selected and the gRPC
/// section iff the RPC axis is enabled.
pub fn sections(ctx: &RenderContext) -> Vec<Section> {
    let version = ctx.app_version().to_string();
    let mut sections = vec![Section::new(
        "app",
        vec![
            Setting::str("name", ctx.name()),
            Setting::str("version", version.clone()),
            Setting::bool("debug", true),
            Setting::int("port", ctx.http_port().into()),
        ],
    )];

    if let Some(adapter) = adapters::database(ctx.database()) {
        sections.push(Section::new("database", adapter.settings(ctx)));
    }

    if let Some(port) = ctx.rpc_port() {
        sections.push(Section::new(
            "grpc",
            vec![
                Setting::bool("enabled", true),
                Setting::int("port", port.into()),
                Setting::int("max_connection_age", 30),
                Setting::int("max_connection_idle", 30),
            ],
        ));
    }

    sections.push(Section::new(
        "logger",
        vec![
            Setting::str("level", "debug"),
            Setting::str("format", "json"),
            Setting::str("output", "stdout"),
        ],
    ));
    sections.push(Section::new(
        "swagger",
        vec![
            Setting::bool("enabled", true),
            Setting::str("title", format!("{} API", ctx.name())),
            Setting::str("description", format!("API documentation for {}", ctx.name())),
            Setting::str("version", version),
            Setting::str("host", format!("localhost:{}", ctx.http_port())),
            Setting::str("base_path", API_BASE_PATH),
        ],
    ));
    sections
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use svcforge_config::{Database, ProjectConfig};

    use super::*;

    fn keys(database: Database, rpc: bool) -> Vec<&'static str> {
        let config = ProjectConfig::builder("orders")
            .with_database(database)
            .with_rpc(rpc)
            .resolve_in(Path::new("/work"))
            .unwrap();
        sections(&RenderContext::new(&config))
            .iter()
            .map(Section::key)
            .collect()
    }

    #[test]
    fn test_optional_sections_follow_axes() {
        assert_eq!(keys(Database::None, false), ["app", "logger", "swagger"]);
        assert_eq!(
            keys(Database::Postgres, true),
            ["app", "database", "grpc", "logger", "swagger"]
        );
    }

    #[test]
    fn test_go_names() {
        let setting = Setting::int("max_idle_connections", 10);
        assert_eq!(setting.go_name(), "MaxIdleConnections");
        assert_eq!(Section::new("grpc", Vec::new()).type_name(), "GrpcConfig");
    }

    #[test]
    fn test_yaml_strings_are_quoted() {
        assert_eq!(Value::Str("a \"b\"".into()).to_yaml(), "\"a \\\"b\\\"\"");
        assert_eq!(Value::Int(5432).to_yaml(), "5432");
        assert_eq!(Value::Bool(false).to_yaml(), "false");
    }
}

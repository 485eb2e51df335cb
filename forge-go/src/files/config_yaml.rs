use std::path::PathBuf;

use svcforge_codegen::{RenderContext, builder::CodeBuilder};
use svcforge_core::GeneratedFile;

use crate::sections;

/// `config.yaml`: runtime settings read by `config.Load`.
pub struct ConfigYaml<'a> {
    ctx: &'a RenderContext,
}

impl<'a> ConfigYaml<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for ConfigYaml<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("config.yaml")
    }

    fn render(&self) -> String {
        let builder = CodeBuilder::yaml().line(&format!("# Configuration for {}", self.ctx.name()));
        sections(self.ctx)
            .iter()
            .fold(builder, |b, section| {
                b.blank().block(&format!("{}:", section.key()), |b| {
                    b.each(section.settings(), |b, setting| {
                        b.line(&format!("{}: {}", setting.key(), setting.value().to_yaml()))
                    })
                })
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use svcforge_config::{Database, ProjectConfig};

    use super::*;

    fn render(database: Database, rpc: bool) -> String {
        let config = ProjectConfig::builder("orders")
            .with_database(database)
            .with_rpc(rpc)
            .resolve_in(Path::new("/work"))
            .unwrap();
        ConfigYaml::new(&RenderContext::new(&config)).render()
    }

    #[test]
    fn test_minimal_document() {
        insta::assert_snapshot!(render(Database::None, false), @r#"
        # Configuration for orders

        app:
          name: "orders"
          version: "1.0.0"
          debug: true
          port: 8080

        logger:
          level: "debug"
          format: "json"
          output: "stdout"

        swagger:
          enabled: true
          title: "orders API"
          description: "API documentation for orders"
          version: "1.0.0"
          host: "localhost:8080"
          base_path: "/api/v1"
        "#);
    }

    #[test]
    fn test_grpc_section() {
        let yaml = render(Database::None, true);
        assert!(yaml.contains("\ngrpc:\n  enabled: true\n  port: 9090\n"));
    }

    #[test]
    fn test_database_section_per_engine() {
        assert!(render(Database::Postgres, false).contains("  ssl_mode: \"disable\"\n"));
        assert!(render(Database::Mysql, false).contains("  charset: \"utf8mb4\"\n"));
        assert!(render(Database::MongoDb, false).contains("  uri: "));
        assert!(render(Database::InMemory, false).contains("  path: \":memory:\"\n"));
    }
}

use std::path::PathBuf;

use svcforge_codegen::{RenderContext, builder::CodeBuilder, published_ports};
use svcforge_core::GeneratedFile;

use crate::adapters::{ComposeService, DatabaseAdapter};

const NETWORK: &str = "app-network";

/// `docker-compose.yml`: the service plus its database container, if any.
pub struct DockerCompose<'a> {
    ctx: &'a RenderContext,
    database: Option<&'a dyn DatabaseAdapter>,
}

impl<'a> DockerCompose<'a> {
    pub fn new(ctx: &'a RenderContext, database: Option<&'a dyn DatabaseAdapter>) -> Self {
        Self { ctx, database }
    }

    fn dependency(&self) -> Option<ComposeService> {
        self.database
            .and_then(|adapter| adapter.compose_service(self.ctx))
    }

    fn app(&self, builder: CodeBuilder, dependency: Option<&ComposeService>) -> CodeBuilder {
        let override_var = self
            .database
            .and_then(|adapter| adapter.env_override())
            .zip(dependency)
            .map(|(env, service)| format!("{}={}", env.var, service.address));

        builder.block(&format!("{}:", self.ctx.name()), |b| {
            b.block("build:", |b| {
                b.line("context: .").line("dockerfile: Dockerfile")
            })
            .block("ports:", |b| {
                b.each(published_ports(self.ctx), |b, port| {
                    b.line(&format!("- \"{}\"", port.mapping()))
                })
            })
            .block("environment:", |b| {
                b.line("- APP_ENV=production")
                    .each(override_var.as_deref(), |b, var| b.line(&format!("- {}", var)))
            })
            .block("volumes:", |b| b.line("- ./config.yaml:/app/config.yaml:ro"))
            .when(dependency.is_some(), |b| {
                b.block("depends_on:", |b| {
                    b.each(dependency, |b, service| b.line(&format!("- {}", service.name)))
                })
            })
            .block("networks:", |b| b.line(&format!("- {}", NETWORK)))
        })
    }

    fn service(builder: CodeBuilder, service: &ComposeService) -> CodeBuilder {
        builder.blank().block(&format!("{}:", service.name), |b| {
            b.line(&format!("image: {}", service.image))
                .block("environment:", |b| {
                    b.each(&service.environment, |b, (key, value)| {
                        b.line(&format!("{}: {}", key, value))
                    })
                })
                .block("expose:", |b| b.line(&format!("- \"{}\"", service.port)))
                .block("volumes:", |b| {
                    b.line(&format!("- {}:{}", service.volume, service.mount))
                })
                .block("networks:", |b| b.line(&format!("- {}", NETWORK)))
        })
    }
}

impl GeneratedFile for DockerCompose<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("docker-compose.yml")
    }

    fn render(&self) -> String {
        let dependency = self.dependency();

        let services = CodeBuilder::yaml().block("services:", |b| {
            let b = self.app(b, dependency.as_ref());
            match &dependency {
                Some(service) => Self::service(b, service),
                None => b,
            }
        });

        services
            .blank()
            .block("networks:", |b| {
                b.block(&format!("{}:", NETWORK), |b| b.line("driver: bridge"))
            })
            .when(dependency.is_some(), |b| {
                b.blank().block("volumes:", |b| {
                    b.each(&dependency, |b, service| b.line(&format!("{}:", service.volume)))
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
    use crate::adapters;

    fn render(database: Database, rpc: bool) -> String {
        let config = ProjectConfig::builder("orders")
            .with_database(database)
            .with_rpc(rpc)
            .resolve_in(Path::new("/work"))
            .unwrap();
        let ctx = RenderContext::new(&config);
        DockerCompose::new(&ctx, adapters::database(database)).render()
    }

    #[test]
    fn test_minimal_compose() {
        insta::assert_snapshot!(render(Database::None, false), @r#"
        services:
          orders:
            build:
              context: .
              dockerfile: Dockerfile
            ports:
              - "8080:8080"
            environment:
              - APP_ENV=production
            volumes:
              - ./config.yaml:/app/config.yaml:ro
            networks:
              - app-network

        networks:
          app-network:
            driver: bridge
        "#);
    }

    #[test]
    fn test_postgres_service_block() {
        let compose = render(Database::Postgres, true);
        assert!(compose.contains("      - \"8080:8080\"\n      - \"9090:9090\"\n"));
        assert!(compose.contains("      - DATABASE_HOST=postgres\n"));
        assert!(compose.contains("    depends_on:\n      - postgres\n"));
        assert!(compose.contains("  postgres:\n    image: postgres:15-alpine\n"));
        assert!(compose.contains("    expose:\n      - \"5432\"\n"));
        assert!(compose.ends_with("volumes:\n  postgres_data:\n"));
    }

    #[test]
    fn test_in_memory_has_no_service() {
        let compose = render(Database::InMemory, false);
        assert!(!compose.contains("depends_on"));
        assert!(!compose.contains("image:"));
        assert!(!compose.contains("DATABASE_"));
    }

    #[test]
    fn test_mongo_uri_override() {
        let compose = render(Database::MongoDb, false);
        assert!(compose.contains("- DATABASE_URI=mongodb://mongodb:27017\n"));
        assert!(compose.contains("MONGO_INITDB_DATABASE: orders\n"));
    }
}

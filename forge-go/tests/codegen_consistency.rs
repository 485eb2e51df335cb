//! Cross-file agreement tests.
//!
//! Independently rendered files must agree on ports, settings keys, RPC
//! operations and dependency entries. These tests read the generated files
//! back and compare them with each other.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use svcforge_codegen::testing::{read_tree, resolve_in_temp};
use svcforge_config::{ConfigBuilder, Database, Framework, ProjectConfig};
use svcforge_go::{Generator, files::OPERATIONS};

type Tree = BTreeMap<PathBuf, String>;

fn generate(builder: ConfigBuilder) -> Tree {
    let (_temp, config) = resolve_in_temp(builder).expect("Failed to resolve config");
    Generator::new(&config).generate().expect("Failed to generate");
    read_tree(config.target_dir()).expect("Failed to read generated tree")
}

fn file<'a>(tree: &'a Tree, path: &str) -> &'a str {
    tree.get(Path::new(path))
        .unwrap_or_else(|| panic!("{path} not generated"))
}

fn orders(framework: Framework, database: Database, rpc: bool) -> ConfigBuilder {
    ProjectConfig::builder("orders")
        .with_module_path("example.org/orders")
        .with_framework(framework)
        .with_database(database)
        .with_rpc(rpc)
}

/// `host:container` mappings published by the compose file.
fn compose_mappings(compose: &str) -> Vec<String> {
    compose
        .lines()
        .filter_map(|line| line.trim().strip_prefix("- \""))
        .filter_map(|rest| rest.strip_suffix('"'))
        .filter(|value| value.contains(':'))
        .map(str::to_string)
        .collect()
}

/// Mappings forwarded by `make docker-run`.
fn makefile_mappings(makefile: &str) -> Vec<String> {
    let run = makefile
        .lines()
        .find(|line| line.trim_start().starts_with("docker run "))
        .expect("docker-run recipe");
    run.split_whitespace()
        .collect::<Vec<_>>()
        .windows(2)
        .filter(|pair| pair[0] == "-p")
        .map(|pair| pair[1].to_string())
        .collect()
}

/// Top-level sections of `config.yaml` with their keys.
fn yaml_sections(yaml: &str) -> BTreeMap<String, Vec<(String, String)>> {
    let mut sections: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
    let mut current = None;
    for line in yaml.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line.trim().split_once(':').expect("key: value");
        if line.starts_with(' ') {
            let section: &String = current.as_ref().expect("key outside a section");
            sections
                .entry(section.clone())
                .or_default()
                .push((key.to_string(), value.trim().to_string()));
        } else {
            current = Some(key.to_string());
            sections.entry(key.to_string()).or_default();
        }
    }
    sections
}

fn setting<'a>(
    sections: &'a BTreeMap<String, Vec<(String, String)>>,
    section: &str,
    key: &str,
) -> Option<&'a str> {
    sections.get(section)?.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

#[test]
fn test_published_ports_agree() {
    for database in Database::ALL {
        for rpc in [false, true] {
            let tree = generate(orders(Framework::Gin, database, rpc));
            let compose = compose_mappings(file(&tree, "docker-compose.yml"));
            let makefile = makefile_mappings(file(&tree, "Makefile"));
            let sections = yaml_sections(file(&tree, "config.yaml"));

            assert_eq!(compose, makefile, "{database}/rpc={rpc}");

            let app_port = setting(&sections, "app", "port").unwrap();
            assert_eq!(compose[0], format!("{app_port}:{app_port}"));

            match setting(&sections, "grpc", "port") {
                Some(rpc_port) => {
                    assert!(rpc);
                    assert_eq!(compose.len(), 2);
                    assert_eq!(compose[1], format!("{rpc_port}:{rpc_port}"));
                }
                None => {
                    assert!(!rpc);
                    assert_eq!(compose.len(), 1);
                }
            }

            let exposed: Vec<&str> = file(&tree, "Dockerfile")
                .lines()
                .filter_map(|line| line.strip_prefix("EXPOSE "))
                .collect();
            assert_eq!(exposed.len(), compose.len());
        }
    }
}

#[test]
fn test_every_yaml_key_has_a_loader_tag() {
    for database in Database::ALL {
        for rpc in [false, true] {
            let tree = generate(orders(Framework::Echo, database, rpc));
            let sections = yaml_sections(file(&tree, "config.yaml"));
            let loader = file(&tree, "internal/config/config.go");

            let mut expected = 0;
            for (section, keys) in &sections {
                assert!(loader.contains(&format!("`yaml:\"{section}\"`")), "{section}");
                expected += 1;
                for (key, _) in keys {
                    assert!(
                        loader.contains(&format!("`yaml:\"{key}\"`")),
                        "{section}.{key} has no loader field ({database}/rpc={rpc})"
                    );
                    expected += 1;
                }
            }
            assert_eq!(loader.matches("`yaml:\"").count(), expected);
            assert_eq!(loader.contains("func (c *Config) GetDSN()"), database.is_enabled());
        }
    }
}

#[test]
fn test_database_section_shape() {
    let keys = |database| -> BTreeSet<String> {
        let tree = generate(orders(Framework::Gin, database, false));
        yaml_sections(file(&tree, "config.yaml"))["database"]
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    };

    assert!(keys(Database::Postgres).is_superset(&set(&["host", "port", "user", "password"])));
    assert!(keys(Database::Mysql).is_superset(&set(&["host", "port", "user", "password"])));
    assert!(keys(Database::MongoDb).contains("uri"));
    assert!(!keys(Database::MongoDb).contains("host"));
    assert!(keys(Database::InMemory).contains("path"));
    assert!(!keys(Database::InMemory).contains("password"));
}

fn set(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|key| key.to_string()).collect()
}

#[test]
fn test_rpc_operations_correspond() {
    let tree = generate(orders(Framework::Fiber, Database::None, true));

    let declared: BTreeSet<&str> = file(&tree, "api/proto/orders.proto")
        .lines()
        .filter_map(|line| line.trim().strip_prefix("rpc "))
        .filter_map(|rest| rest.split('(').next())
        .collect();
    let served: BTreeSet<&str> = file(&tree, "internal/grpc/server.go")
        .lines()
        .filter(|line| line.contains("(ctx context.Context, req *pb."))
        .filter_map(|line| line.strip_prefix("func (s *Server) "))
        .filter_map(|rest| rest.split('(').next())
        .collect();
    let exposed: BTreeSet<&str> = file(&tree, "internal/grpc/client.go")
        .lines()
        .filter(|line| line.contains("(ctx context.Context"))
        .filter_map(|line| line.strip_prefix("func (c *Client) "))
        .filter_map(|rest| rest.split('(').next())
        .collect();

    let table: BTreeSet<&str> = OPERATIONS.iter().map(|op| op.name).collect();
    assert_eq!(table.len(), 6);
    assert_eq!(declared, table);
    assert_eq!(served, table);
    assert_eq!(exposed, table);
}

#[test]
fn test_health_report_follows_database() {
    for framework in Framework::ALL {
        let with = generate(orders(framework, Database::Mysql, false));
        let health = file(&with, "internal/handlers/health.go");
        assert!(health.contains("type DatabaseStatus struct"), "{framework}");
        assert!(health.contains("`json:\"database,omitempty\"`"), "{framework}");

        let without = generate(orders(framework, Database::None, false));
        let health = file(&without, "internal/handlers/health.go");
        assert!(!health.contains("DatabaseStatus"), "{framework}");
        assert!(!health.contains("`json:\"database,omitempty\"`"), "{framework}");
    }
}

#[test]
fn test_framework_lifecycle() {
    let fiber = generate(orders(Framework::Fiber, Database::None, false));
    let app = file(&fiber, "internal/app/app.go");
    assert!(app.contains("router.Listen("));
    assert!(!app.contains("http.Server"));

    for framework in [Framework::Gin, Framework::Echo] {
        let tree = generate(orders(framework, Database::None, false));
        let app = file(&tree, "internal/app/app.go");
        assert!(app.contains("server := &http.Server{"), "{framework}");
        assert!(app.contains("server.Shutdown(ctx)"), "{framework}");
    }
}

#[test]
fn test_scenario_relational_with_rpc() {
    let tree = generate(orders(Framework::Gin, Database::Postgres, true));

    let go_mod = file(&tree, "go.mod");
    assert!(go_mod.starts_with("module example.org/orders\n"));
    assert_eq!(go_mod.matches("\tgorm.io/driver/postgres ").count(), 1);
    assert_eq!(go_mod.matches("\tgoogle.golang.org/grpc ").count(), 1);
    assert_eq!(go_mod.matches("\tgoogle.golang.org/protobuf ").count(), 1);

    let compose = file(&tree, "docker-compose.yml");
    assert_eq!(compose_mappings(compose), ["8080:8080", "9090:9090"]);
    assert_eq!(compose.matches("image:").count(), 1);
    assert!(compose.contains("  postgres:\n"));
    assert!(compose.contains("POSTGRES_PASSWORD: password"));
    assert!(compose.contains("- postgres_data:/var/lib/postgresql/data"));

    let health = file(&tree, "internal/handlers/health.go");
    assert!(health.contains("DatabaseStatus"));

    let proto = file(&tree, "api/proto/orders.proto");
    assert_eq!(proto.matches("\n  rpc ").count(), 6);
    assert!(proto.contains("service OrdersService {"));

    let app = file(&tree, "internal/app/app.go");
    assert!(app.contains("grpcserver.New(a.cfg, a.logger)"));
    assert!(app.contains("database.New(a.cfg)"));
}

#[test]
fn test_scenario_no_database_no_rpc() {
    let tree = generate(orders(Framework::Echo, Database::None, false));

    assert!(!tree.keys().any(|path| path.starts_with("pkg/database")));
    assert!(!tree.keys().any(|path| path.starts_with("internal/repository")));
    assert!(!tree.keys().any(|path| path.starts_with("internal/models")));
    assert!(!tree.keys().any(|path| path.starts_with("internal/grpc")));
    assert!(!tree.keys().any(|path| path.starts_with("api")));

    let compose = file(&tree, "docker-compose.yml");
    assert_eq!(compose_mappings(compose), ["8080:8080"]);
    assert!(!compose.contains("image:"));
    assert!(!compose.contains("depends_on"));
    assert!(!compose.contains("\nvolumes:"));

    let app = file(&tree, "internal/app/app.go");
    assert!(!app.contains("database"));
    assert!(!app.contains("grpc"));
}

#[test]
fn test_identifiers_follow_name() {
    let tree = generate(
        ProjectConfig::builder("order-api")
            .with_module_path("git.example.com/team/order-api")
            .with_rpc(true)
            .with_database(Database::None),
    );

    let proto = file(&tree, "api/proto/order-api.proto");
    assert!(proto.contains("package order_api;"));
    assert!(proto.contains("service OrderApiService {"));
    assert!(proto.contains("option go_package = \"git.example.com/team/order-api/internal/grpc/pb\";"));

    let server = file(&tree, "internal/grpc/server.go");
    assert!(server.contains("pb.RegisterOrderApiServiceServer(s.server, s)"));
    assert!(server.contains("\"git.example.com/team/order-api/internal/config\""));

    assert!(file(&tree, "docker-compose.yml").contains("\n  order-api:\n"));
}

#[test]
fn test_service_identifiers_capitalize_after_digits() {
    let tree = generate(
        ProjectConfig::builder("s3proxy")
            .with_module_path("example.org/s3proxy")
            .with_rpc(true)
            .with_database(Database::None),
    );

    let proto = file(&tree, "api/proto/s3proxy.proto");
    assert!(proto.contains("package s3proxy;"));
    assert!(proto.contains("service S3ProxyService {"));

    let server = file(&tree, "internal/grpc/server.go");
    assert!(server.contains("pb.UnimplementedS3ProxyServiceServer\n"));
    assert!(server.contains("pb.RegisterS3ProxyServiceServer(s.server, s)"));

    let client = file(&tree, "internal/grpc/client.go");
    assert!(client.contains("client pb.S3ProxyServiceClient\n"));
    assert!(client.contains("pb.NewS3ProxyServiceClient(conn)"));
    assert!(!proto.contains("S3proxy") && !server.contains("S3proxy") && !client.contains("S3proxy"));
}

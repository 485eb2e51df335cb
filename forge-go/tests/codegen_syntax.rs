//! Integration tests that verify generated Go sources parse.
//!
//! Every combination is generated and handed to `gofmt -e -l`. The tests are
//! ignored by default since they need a Go toolchain on `PATH`; run them with
//! `cargo test -- --ignored`.

use std::path::Path;

use svcforge_codegen::testing::{
    GoFmtChecker, SyntaxChecker, read_tree, resolve_in_temp, tool_available,
};
use svcforge_config::{Database, Framework, ProjectConfig};
use svcforge_go::Generator;

/// Print all generated Go files for debugging.
fn print_go_files(root: &Path) {
    let Ok(tree) = read_tree(root) else {
        return;
    };
    for (path, content) in tree {
        if path.extension().is_some_and(|ext| ext == "go") {
            eprintln!("\n=== {} ===\n{}", path.display(), content);
        }
    }
}

fn assert_generated_code_parses(framework: Framework, database: Database, rpc: bool) {
    let (_temp, config) = resolve_in_temp(
        ProjectConfig::builder("orders")
            .with_module_path("example.org/orders")
            .with_framework(framework)
            .with_database(database)
            .with_rpc(rpc),
    )
    .expect("Failed to resolve config");

    Generator::new(&config)
        .generate()
        .expect("Failed to generate code");

    if let Err(err) = GoFmtChecker.check(config.target_dir()) {
        print_go_files(config.target_dir());
        panic!("{framework}/{database}/rpc={rpc}: {err}");
    }
}

#[test]
#[ignore = "requires gofmt"]
fn test_every_combination_parses() {
    if !tool_available("gofmt") {
        eprintln!("gofmt not found, skipping");
        return;
    }

    for framework in Framework::ALL {
        for database in Database::ALL {
            for rpc in [false, true] {
                assert_generated_code_parses(framework, database, rpc);
            }
        }
    }
}

#[test]
#[ignore = "requires gofmt"]
fn test_relational_with_rpc_parses() {
    if !tool_available("gofmt") {
        eprintln!("gofmt not found, skipping");
        return;
    }

    assert_generated_code_parses(Framework::Gin, Database::Postgres, true);
}

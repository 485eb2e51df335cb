//! Test utilities for renderers.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
    process::Command,
};

use svcforge_config::{ConfigBuilder, ProjectConfig};
use tempfile::TempDir;

/// Error from a syntax check.
#[derive(Debug)]
pub struct CheckError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CheckError {}

/// Trait for verifying generated sources parse.
pub trait SyntaxChecker {
    /// Check every source file below `dir`.
    fn check(&self, dir: &Path) -> Result<(), CheckError>;
}

/// Go syntax checker using `gofmt -e -l`.
///
/// Only parse errors fail the check; formatting differences are ignored.
pub struct GoFmtChecker;

impl SyntaxChecker for GoFmtChecker {
    fn check(&self, dir: &Path) -> Result<(), CheckError> {
        let output = Command::new("gofmt")
            .args(["-e", "-l", "."])
            .current_dir(dir)
            .output()
            .map_err(|e| CheckError {
                message: format!("Failed to run gofmt: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(CheckError {
                message: "gofmt reported syntax errors".to_string(),
                output: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

/// Whether `program` can be spawned from `PATH`.
pub fn tool_available(program: &str) -> bool {
    Command::new(program)
        .arg("--help")
        .output()
        .is_ok()
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Resolve `builder` with its target inside a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn resolve_in_temp(builder: ConfigBuilder) -> io::Result<(TempDir, ProjectConfig)> {
    let temp = TempDir::new()?;
    let name = builder.name().unwrap_or("service").to_string();
    let config = builder
        .with_target_dir(temp.path().join(&name))
        .resolve_in(temp.path())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    Ok((temp, config))
}

/// Read every file below `root`, keyed by path relative to `root`.
pub fn read_tree(root: &Path) -> io::Result<BTreeMap<PathBuf, String>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, String>) -> io::Result<()> {
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                walk(root, &path, out)?;
            } else {
                let relative = path
                    .strip_prefix(root)
                    .map_err(|e| io::Error::other(e.to_string()))?
                    .to_path_buf();
                out.insert(relative, std::fs::read_to_string(&path)?);
            }
        }
        Ok(())
    }

    let mut files = BTreeMap::new();
    walk(root, root, &mut files)?;
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_tree_is_relative_and_sorted() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("cmd")).unwrap();
        std::fs::write(temp.path().join("go.mod"), "module x\n").unwrap();
        std::fs::write(temp.path().join("cmd/main.go"), "package main\n").unwrap();

        let tree = read_tree(temp.path()).unwrap();

        let paths: Vec<&PathBuf> = tree.keys().collect();
        assert_eq!(paths, [&PathBuf::from("cmd/main.go"), &PathBuf::from("go.mod")]);
    }

    #[test]
    fn test_resolve_in_temp_targets_temp_dir() {
        let (temp, config) = resolve_in_temp(ProjectConfig::builder("orders")).unwrap();
        assert_eq!(config.target_dir(), temp.path().join("orders"));
    }

    #[test]
    #[should_panic(expected = "Content mismatch")]
    fn test_assert_content_eq_panics_on_difference() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }
}

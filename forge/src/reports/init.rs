//! Init command report data structures.

use std::path::{Path, PathBuf};

use svcforge_codegen::{RenderContext, published_ports};
use svcforge_config::ProjectConfig;

use super::output::{Output, Report};

/// The choices a service was generated with.
#[derive(Debug)]
pub struct ProjectSummary {
    pub name: String,
    pub module: String,
    pub framework: &'static str,
    pub database: &'static str,
    pub grpc: bool,
    /// Published ports, e.g. `8080 (http)`.
    pub ports: Vec<String>,
}

impl From<&ProjectConfig> for ProjectSummary {
    fn from(config: &ProjectConfig) -> Self {
        Self {
            name: config.name().to_string(),
            module: config.module_path().to_string(),
            framework: config.framework().label(),
            database: config.database().label(),
            grpc: config.rpc(),
            ports: published_ports(&RenderContext::new(config))
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl ProjectSummary {
    fn render(&self, out: &mut dyn Output) {
        out.key_value_indented("Module", &self.module);
        out.key_value_indented("Framework", self.framework);
        out.key_value_indented("Database", self.database);
        out.key_value_indented("gRPC", if self.grpc { "enabled" } else { "disabled" });
        out.key_value_indented("Ports", &self.ports.join(", "));
    }
}

/// Report data from a written project.
#[derive(Debug)]
pub struct InitReport {
    pub project: ProjectSummary,
    /// Absolute project root.
    pub root: PathBuf,
    /// Written files, relative to `root`.
    pub files: Vec<PathBuf>,
    /// Renderers left out because their axis is disabled.
    pub skipped: Vec<&'static str>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!(
            "Created {} in {}",
            self.project.name,
            self.root.display()
        ));
        out.newline();
        self.project.render(out);
        out.newline();

        out.section(&format!("Files ({})", self.files.len()));
        for file in &self.files {
            out.added_item(&file.display().to_string());
        }
        if !self.skipped.is_empty() {
            out.newline();
            out.preformatted(&format!("Skipped: {}", self.skipped.join(", ")));
        }

        out.newline();
        out.section("Next steps");
        if self.root != Path::new(".") {
            out.list_item(&format!("cd {}", self.root.display()));
        }
        out.list_item("go mod tidy");
        if self.project.grpc {
            out.list_item("make proto-gen");
        }
        out.list_item("make run");
    }
}

/// A file that would be written.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Report data from a dry run.
#[derive(Debug)]
pub struct PreviewReport {
    pub project: ProjectSummary,
    /// Directories that would be created.
    pub directories: Vec<PathBuf>,
    pub files: Vec<PreviewFile>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&self.project.name);
        self.project.render(out);
        out.preformatted(&format!(
            "{} directories and {} files would be generated",
            self.directories.len(),
            self.files.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn summary(grpc: bool) -> ProjectSummary {
        ProjectSummary {
            name: "orders".to_string(),
            module: "example.org/orders".to_string(),
            framework: "Gin",
            database: "PostgreSQL",
            grpc,
            ports: vec!["8080 (http)".to_string()],
        }
    }

    #[test]
    fn test_init_report_lists_files_and_steps() {
        let report = InitReport {
            project: summary(true),
            root: PathBuf::from("/work/orders"),
            files: vec![PathBuf::from("cmd/main.go"), PathBuf::from("go.mod")],
            skipped: vec![],
        };
        let mut out = BufferOutput::default();

        report.render(&mut out);

        assert_eq!(out.lines[0], "Created orders in /work/orders");
        assert!(out.lines.contains(&"Files (2):".to_string()));
        assert!(out.lines.contains(&"  + cmd/main.go".to_string()));
        assert!(out.lines.contains(&"  Ports      8080 (http)".to_string()));
        assert!(out.lines.contains(&"  - make proto-gen".to_string()));
        assert!(!out.lines.iter().any(|line| line.starts_with("Skipped")));
    }

    #[test]
    fn test_init_report_mentions_skipped_axes() {
        let report = InitReport {
            project: summary(false),
            root: PathBuf::from("/work/orders"),
            files: vec![],
            skipped: vec!["database", "rpc"],
        };
        let mut out = BufferOutput::default();

        report.render(&mut out);

        assert!(out.lines.contains(&"Skipped: database, rpc".to_string()));
        assert!(!out.lines.contains(&"  - make proto-gen".to_string()));
    }

    #[test]
    fn test_preview_report_summary() {
        let report = PreviewReport {
            project: summary(false),
            directories: vec![PathBuf::from("cmd")],
            files: vec![PreviewFile {
                path: PathBuf::from("go.mod"),
                content: "module example.org/orders\n".to_string(),
            }],
        };
        let mut out = BufferOutput::default();

        report.render(&mut out);

        assert_eq!(out.lines[0], "── go.mod ──");
        assert_eq!(out.lines[1], "module example.org/orders");
        assert_eq!(
            out.lines.last().unwrap(),
            "1 directories and 1 files would be generated"
        );
    }
}

//! Init operation - generate or preview a service.

use std::path::Path;

use eyre::{Context, Result};
use svcforge_codegen::{GenerationState, Hook};
use svcforge_config::ProjectConfig;
use svcforge_go::Generator;

use crate::reports::{InitReport, PreviewFile, PreviewReport, ProjectSummary};

/// Prints each written file to stderr.
struct Progress;

impl Hook for Progress {
    fn name(&self) -> &'static str {
        "progress"
    }

    fn on_state(&self, state: GenerationState) {
        if state == GenerationState::SkeletonCreated {
            eprintln!("  created skeleton");
        }
    }

    fn on_skip(&self, renderer: &'static str) {
        eprintln!("  [{}] skipped", renderer);
    }

    fn on_write(&self, renderer: &'static str, path: &Path) {
        eprintln!("  [{}] {}", renderer, path.display());
    }
}

/// Execute the init operation.
///
/// Writes the service into the configured target directory. With
/// `progress`, every file is announced on stderr as it is written.
pub fn generate(config: &ProjectConfig, progress: bool) -> Result<InitReport> {
    let generator = if progress {
        Generator::new(config).hook(Progress)
    } else {
        Generator::new(config)
    };

    let result = generator.generate().wrap_err_with(|| {
        format!("Failed to generate {}", config.target_dir().display())
    })?;

    Ok(InitReport {
        project: ProjectSummary::from(config),
        root: result.root,
        files: result.files,
        skipped: result.skipped,
    })
}

/// Render every file without touching the filesystem.
pub fn preview(config: &ProjectConfig) -> Result<PreviewReport> {
    let generator = Generator::new(config);
    let directories = generator.skeleton().directories().to_vec();
    let files = generator
        .preview()
        .wrap_err("Failed to render preview")?
        .into_iter()
        .map(|artifact| PreviewFile {
            path: artifact.path().to_path_buf(),
            content: artifact.content().to_string(),
        })
        .collect();

    Ok(PreviewReport {
        project: ProjectSummary::from(config),
        directories,
        files,
    })
}

#[cfg(test)]
mod tests {
    use svcforge_codegen::testing::resolve_in_temp;
    use svcforge_config::{Database, Framework};

    use super::*;

    #[test]
    fn test_preview_writes_nothing() {
        let (_temp, config) = resolve_in_temp(
            ProjectConfig::builder("orders")
                .with_database(Database::None)
                .with_rpc(true),
        )
        .unwrap();

        let report = preview(&config).unwrap();

        assert!(!config.target_dir().exists());
        assert!(report.files.iter().any(|f| f.path == Path::new("internal/grpc/server.go")));
        assert!(report.directories.iter().any(|d| d == Path::new("api/proto")));
    }

    #[test]
    fn test_generate_reports_written_files() {
        let (_temp, config) = resolve_in_temp(
            ProjectConfig::builder("orders")
                .with_framework(Framework::Fiber)
                .with_database(Database::InMemory),
        )
        .unwrap();

        let report = generate(&config, false).unwrap();

        assert_eq!(report.root, config.target_dir());
        assert_eq!(report.skipped, ["rpc"]);
        assert_eq!(report.project.database, "In-memory (SQLite)");
        for file in &report.files {
            assert!(report.root.join(file).is_file(), "{}", file.display());
        }
    }

    #[test]
    fn test_generate_wraps_failure_with_target() {
        let temp = tempfile::TempDir::new().unwrap();
        let blocker = temp.path().join("orders");
        std::fs::write(&blocker, "occupied").unwrap();
        let config = ProjectConfig::builder("orders")
            .with_target_dir(&blocker)
            .resolve_in(temp.path())
            .unwrap();

        let err = generate(&config, false).unwrap_err();

        assert!(err.to_string().contains("Failed to generate"));
        assert!(format!("{:?}", err).contains("skeleton"));
    }
}

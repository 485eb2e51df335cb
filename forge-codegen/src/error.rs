use std::{
    io,
    path::{Path, PathBuf},
};

use svcforge_core::Version;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Phase name reported for skeleton failures.
pub const SKELETON_PHASE: &str = "skeleton";

/// Errors raised while composing a project.
///
/// Every variant names the phase it happened in; I/O failures also carry
/// the path that was being touched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("skeleton: failed to create directory '{}'", path.display())]
    Skeleton {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{renderer}: failed to write '{}'", path.display())]
    Write {
        renderer: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{renderer}: '{}' is already produced by {first}", path.display())]
    DuplicateArtifact {
        renderer: &'static str,
        first: &'static str,
        path: PathBuf,
    },

    #[error("dependency '{module}' requested at {requested} but already pinned at {existing}")]
    DependencyConflict {
        module: String,
        existing: Version,
        requested: Version,
    },

    #[error("{renderer}: rendering failed")]
    Render {
        renderer: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// The phase the error occurred in.
    pub fn phase(&self) -> &'static str {
        match self {
            Error::Skeleton { .. } => SKELETON_PHASE,
            Error::Write { renderer, .. }
            | Error::DuplicateArtifact { renderer, .. }
            | Error::Render { renderer, .. } => *renderer,
            Error::DependencyConflict { .. } => "dependencies",
        }
    }

    /// The path involved, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Skeleton { path, .. }
            | Error::Write { path, .. }
            | Error::DuplicateArtifact { path, .. } => Some(path.as_path()),
            Error::Render { source, .. } => source.path(),
            Error::DependencyConflict { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_reports_renderer_as_phase() {
        let err = Error::Render {
            renderer: "manifest",
            source: Box::new(Error::DependencyConflict {
                module: "gorm.io/gorm".to_string(),
                existing: Version::new(1, 25, 5),
                requested: Version::new(1, 25, 6),
            }),
        };

        assert_eq!(err.phase(), "manifest");
        assert_eq!(err.path(), None);
        assert_eq!(err.to_string(), "manifest: rendering failed");
    }

    #[test]
    fn test_write_error_message_names_path() {
        let err = Error::Write {
            renderer: "settings",
            path: PathBuf::from("/tmp/orders/config.yaml"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };

        assert_eq!(err.phase(), "settings");
        assert_eq!(err.path(), Some(Path::new("/tmp/orders/config.yaml")));
        assert_eq!(
            err.to_string(),
            "settings: failed to write '/tmp/orders/config.yaml'"
        );
    }
}

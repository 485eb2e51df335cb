//! Directory skeleton created before any file is emitted.

use std::path::{Path, PathBuf};

use svcforge_core::create_dir;

use crate::{Error, Result};

/// Ordered, duplicate-free list of directories relative to the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skeleton {
    dirs: Vec<PathBuf>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Skeleton::push`].
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.push(dir);
        self
    }

    /// Append a directory unless it is already listed.
    pub fn push(&mut self, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        if !self.dirs.contains(&dir) {
            self.dirs.push(dir);
        }
    }

    pub fn extend(&mut self, dirs: impl IntoIterator<Item = PathBuf>) {
        for dir in dirs {
            self.push(dir);
        }
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn contains(&self, dir: impl AsRef<Path>) -> bool {
        self.dirs.iter().any(|d| d == dir.as_ref())
    }

    /// Create `root` and every listed directory below it.
    pub fn create(&self, root: &Path) -> Result<()> {
        let make = |path: PathBuf| {
            create_dir(&path).map_err(|source| Error::Skeleton { path, source })
        };
        make(root.to_path_buf())?;
        for dir in &self.dirs {
            make(root.join(dir))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_push_ignores_duplicates() {
        let skeleton = Skeleton::new().dir("cmd").dir("internal/app").dir("cmd");
        assert_eq!(
            skeleton.directories(),
            [PathBuf::from("cmd"), PathBuf::from("internal/app")]
        );
    }

    #[test]
    fn test_create_builds_tree() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("orders");

        Skeleton::new()
            .dir("cmd")
            .dir("pkg/logger")
            .create(&root)
            .unwrap();

        assert!(root.join("cmd").is_dir());
        assert!(root.join("pkg").join("logger").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_create_keeps_existing_root_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let root = temp.path().join("orders");
        std::fs::create_dir(&root).unwrap();
        std::fs::set_permissions(&root, std::fs::Permissions::from_mode(0o700)).unwrap();

        Skeleton::new().dir("cmd").create(&root).unwrap();

        let mode = |path: &Path| std::fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&root), 0o700);
        assert_eq!(mode(&root.join("cmd")), svcforge_core::DIR_MODE);
    }

    #[test]
    fn test_create_reports_failing_path() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = Skeleton::new().dir("cmd").create(&blocker).unwrap_err();

        assert_eq!(err.phase(), "skeleton");
        assert_eq!(err.path(), Some(blocker.as_path()));
    }
}

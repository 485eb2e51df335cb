use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Permission bits applied to every generated file.
pub const FILE_MODE: u32 = 0o644;

/// Permission bits applied to every skeleton directory.
pub const DIR_MODE: u32 = 0o755;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the project root
    fn path(&self) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Permission bits for the written file
    fn mode(&self) -> u32 {
        FILE_MODE
    }

    /// Render into an artifact ready to be emitted
    fn to_artifact(&self) -> Artifact {
        Artifact::new(self.path(), self.render()).with_mode(self.mode())
    }
}

/// A rendered file waiting to be written below a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    path: PathBuf,
    content: String,
    mode: u32,
}

impl Artifact {
    /// Create a new artifact with the default file mode.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            mode: FILE_MODE,
        }
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Path relative to the project root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mode(&self) -> u32 {
        self.mode
    }

    /// Write the artifact below `root`, replacing whatever is already there.
    ///
    /// Returns the absolute path that was written.
    pub fn write(&self, root: &Path) -> io::Result<PathBuf> {
        let target = root.join(&self.path);
        write_file(&target, &self.content, self.mode)?;
        Ok(target)
    }
}

/// Write `content` to `path`, creating missing parents and overwriting any
/// existing file.
pub fn write_file(path: &Path, content: &str, mode: u32) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    set_mode(path, mode)
}

/// Create a directory (and its parents) with [`DIR_MODE`] permissions.
///
/// An existing directory is left as it is, permissions included.
pub fn create_dir(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)?;
    set_mode(path, DIR_MODE)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}

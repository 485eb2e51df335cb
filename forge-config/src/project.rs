//! Resolved project configuration and the builder that produces it.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    Database, Error, Framework, Result,
    validate::{validate_module_path, validate_name},
};

/// Module path prefix used when none is given.
pub const DEFAULT_MODULE_PREFIX: &str = "github.com/yourorg";

/// A fully resolved, validated project configuration.
///
/// Constructed once through [`ConfigBuilder::resolve`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: String,
    module_path: String,
    framework: Framework,
    database: Database,
    rpc: bool,
    target_dir: PathBuf,
}

impl ProjectConfig {
    pub fn builder(name: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new().with_name(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn database(&self) -> Database {
        self.database
    }

    /// Whether the gRPC server is generated.
    pub fn rpc(&self) -> bool {
        self.rpc
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }
}

/// Partially specified configuration.
///
/// Every field is optional. A builder can be loaded from a TOML preset,
/// layered with command line values through [`ConfigBuilder::merge`], and is
/// finally turned into a [`ProjectConfig`] by [`ConfigBuilder::resolve`].
///
/// ```toml
/// name = "orders"
/// module = "example.org/orders"
/// framework = "gin"
/// database = "postgresql"
/// grpc = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigBuilder {
    name: Option<String>,
    #[serde(alias = "module_path")]
    module: Option<String>,
    framework: Option<Framework>,
    database: Option<Database>,
    #[serde(alias = "rpc")]
    grpc: Option<bool>,
    output: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a preset from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a preset, using `filename` for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_module_path(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_framework(mut self, framework: Framework) -> Self {
        self.framework = Some(framework);
        self
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    pub fn with_rpc(mut self, enabled: bool) -> Self {
        self.grpc = Some(enabled);
        self
    }

    pub fn with_target_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output = Some(dir.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn module_path(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn framework(&self) -> Option<Framework> {
        self.framework
    }

    pub fn database(&self) -> Option<Database> {
        self.database
    }

    pub fn rpc(&self) -> Option<bool> {
        self.grpc
    }

    /// Layer `other` on top of `self`; values set in `other` win.
    pub fn merge(self, other: ConfigBuilder) -> Self {
        Self {
            name: other.name.or(self.name),
            module: other.module.or(self.module),
            framework: other.framework.or(self.framework),
            database: other.database.or(self.database),
            grpc: other.grpc.or(self.grpc),
            output: other.output.or(self.output),
        }
    }

    /// Resolve relative to the process working directory.
    pub fn resolve(self) -> Result<ProjectConfig> {
        let cwd = std::env::current_dir().map_err(|source| {
            Box::new(Error::Io {
                path: PathBuf::from("."),
                source,
            })
        })?;
        self.resolve_in(&cwd)
    }

    /// Validate and apply defaults, resolving relative paths against `cwd`.
    ///
    /// The target directory defaults to `<cwd>/<name>`.
    pub fn resolve_in(self, cwd: &Path) -> Result<ProjectConfig> {
        let name = self.name.unwrap_or_default();
        validate_name(&name)?;

        let module_path = self
            .module
            .unwrap_or_else(|| format!("{}/{}", DEFAULT_MODULE_PREFIX, name));
        validate_module_path(&module_path)?;

        let target_dir = match self.output {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => cwd.join(dir),
            None => cwd.join(&name),
        };

        Ok(ProjectConfig {
            name,
            module_path,
            framework: self.framework.unwrap_or_default(),
            database: self.database.unwrap_or_default(),
            rpc: self.grpc.unwrap_or(false),
            target_dir,
        })
    }
}

use svcforge_codegen::{Engine, GenerateReport, Hook, RenderContext, Result, Skeleton};
use svcforge_config::ProjectConfig;
use svcforge_core::Artifact;
use tracing::debug;

use crate::renderers::{
    BuildRenderer, ContainerRenderer, DatabaseRenderer, EntrypointRenderer, FrameworkRenderer,
    ManifestRenderer, RpcRenderer, SettingsRenderer,
};

/// Directories every generated project has, whatever its axes.
pub fn base_skeleton() -> Skeleton {
    Skeleton::new()
        .dir("cmd")
        .dir("internal/app")
        .dir("internal/config")
        .dir("internal/handlers")
        .dir("internal/middleware")
        .dir("pkg/context")
        .dir("pkg/logger")
        .dir("docs")
        .dir("deployments")
}

/// Generates a Go microservice for one resolved configuration.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use svcforge_config::{Database, Framework, ProjectConfig};
/// use svcforge_go::Generator;
///
/// let config = ProjectConfig::builder("orders")
///     .with_module_path("example.org/orders")
///     .with_framework(Framework::Gin)
///     .with_database(Database::Postgres)
///     .with_rpc(true)
///     .resolve_in(Path::new("/tmp"))?;
///
/// let report = Generator::new(&config).generate()?;
/// println!("{} files written", report.files.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Generator {
    ctx: RenderContext,
    engine: Engine,
}

impl Generator {
    pub fn new(config: &ProjectConfig) -> Self {
        let ctx = RenderContext::new(config);
        debug!(
            name = ctx.name(),
            framework = %ctx.framework(),
            database = %ctx.database(),
            rpc = ctx.rpc_enabled(),
            "configured generator"
        );
        Self {
            ctx,
            engine: Self::engine(),
        }
    }

    /// The engine with every axis renderer registered, in run order.
    pub fn engine() -> Engine {
        Engine::new(base_skeleton())
            .renderer(EntrypointRenderer)
            .renderer(FrameworkRenderer)
            .renderer(DatabaseRenderer)
            .renderer(RpcRenderer)
            .renderer(ContainerRenderer)
            .renderer(BuildRenderer)
            .renderer(SettingsRenderer)
            .renderer(ManifestRenderer)
    }

    /// Add a hook to receive progress callbacks.
    pub fn hook(mut self, hook: impl Hook + 'static) -> Self {
        self.engine = self.engine.hook(hook);
        self
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Directories the run will create.
    pub fn skeleton(&self) -> Skeleton {
        self.engine.skeleton(&self.ctx)
    }

    /// Render every file without writing anything.
    pub fn preview(&self) -> Result<Vec<Artifact>> {
        self.engine.preview(&self.ctx)
    }

    /// Write the project under the configured target directory.
    pub fn generate(&self) -> Result<GenerateReport> {
        self.engine.generate(&self.ctx)
    }
}

//! Composition engine.

use std::{
    cell::Cell,
    collections::HashMap,
    path::{Path, PathBuf},
};

use svcforge_core::Artifact;
use tracing::{debug, info};

use crate::{Error, RenderContext, Renderer, Result, Skeleton};

/// Lifecycle of a single generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    NotStarted,
    SkeletonCreated,
    /// The named renderer finished writing its files.
    Rendered(&'static str),
    Done,
    Failed,
}

/// Observer notified as a run progresses.
///
/// # Example
///
/// ```ignore
/// struct Progress;
///
/// impl Hook for Progress {
///     fn name(&self) -> &'static str { "progress" }
///
///     fn on_write(&self, renderer: &'static str, path: &Path) {
///         eprintln!("[{renderer}] {}", path.display());
///     }
/// }
/// ```
pub trait Hook: Send + Sync {
    /// The name of this hook (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called on every state transition, including the initial one.
    #[allow(unused_variables)]
    fn on_state(&self, state: GenerationState) {}

    /// Called when a renderer is left out because its axis is disabled.
    #[allow(unused_variables)]
    fn on_skip(&self, renderer: &'static str) {}

    /// Called after each file is written. `path` is relative to the root.
    #[allow(unused_variables)]
    fn on_write(&self, renderer: &'static str, path: &Path) {}
}

/// Summary of a finished run.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Absolute project root.
    pub root: PathBuf,
    /// Skeleton directories, relative to `root`.
    pub directories: Vec<PathBuf>,
    /// Written files in emission order, relative to `root`.
    pub files: Vec<PathBuf>,
    /// Renderers that ran.
    pub rendered: Vec<&'static str>,
    /// Renderers left out because their axis is disabled.
    pub skipped: Vec<&'static str>,
}

/// Orchestrates renderers over one [`RenderContext`].
///
/// Runs are sequential and fail fast: the first error aborts the run and is
/// returned as is. Nothing written before the failure is cleaned up, and
/// every file is overwritten unconditionally, so re-running a configuration
/// against the same root converges on the same tree.
///
/// # Example
///
/// ```ignore
/// let engine = Engine::new(Skeleton::new().dir("cmd"))
///     .renderer(ManifestRenderer)
///     .renderer(SettingsRenderer)
///     .hook(Progress);
///
/// let report = engine.generate(&ctx)?;
/// ```
pub struct Engine {
    base: Skeleton,
    renderers: Vec<Box<dyn Renderer>>,
    hooks: Vec<Box<dyn Hook>>,
    state: Cell<GenerationState>,
}

impl Engine {
    /// Create an engine whose skeleton always contains `base`.
    pub fn new(base: Skeleton) -> Self {
        Self {
            base,
            renderers: Vec::new(),
            hooks: Vec::new(),
            state: Cell::new(GenerationState::NotStarted),
        }
    }

    /// Register a renderer. Renderers run in registration order.
    pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderers.push(Box::new(renderer));
        self
    }

    /// Add a hook to receive lifecycle callbacks.
    pub fn hook(mut self, hook: impl Hook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// State reached by the most recent run.
    pub fn state(&self) -> GenerationState {
        self.state.get()
    }

    /// Names of the registered renderers, in run order.
    pub fn renderer_names(&self) -> Vec<&'static str> {
        self.renderers.iter().map(|r| r.name()).collect()
    }

    /// The full skeleton for `ctx`: base directories plus those owned by
    /// every applicable renderer.
    pub fn skeleton(&self, ctx: &RenderContext) -> Skeleton {
        let mut skeleton = self.base.clone();
        for renderer in self.applicable(ctx) {
            skeleton.extend(renderer.directories(ctx));
        }
        skeleton
    }

    /// Render every applicable renderer without touching storage.
    pub fn preview(&self, ctx: &RenderContext) -> Result<Vec<Artifact>> {
        let mut ledger = Ledger::default();
        let mut artifacts = Vec::new();
        for renderer in self.applicable(ctx) {
            for artifact in render(renderer.as_ref(), ctx)? {
                ledger.claim(renderer.name(), artifact.path())?;
                artifacts.push(artifact);
            }
        }
        Ok(artifacts)
    }

    /// Create the skeleton under the context's target directory, then run
    /// every applicable renderer and write its artifacts.
    pub fn generate(&self, ctx: &RenderContext) -> Result<GenerateReport> {
        self.transition(GenerationState::NotStarted);
        let result = self.run(ctx);
        match &result {
            Ok(report) => {
                self.transition(GenerationState::Done);
                info!(
                    root = %report.root.display(),
                    files = report.files.len(),
                    "project generated"
                );
            }
            Err(_) => self.transition(GenerationState::Failed),
        }
        result
    }

    fn run(&self, ctx: &RenderContext) -> Result<GenerateReport> {
        let root = ctx.target_dir();
        let skeleton = self.skeleton(ctx);
        skeleton.create(root)?;
        self.transition(GenerationState::SkeletonCreated);

        let mut report = GenerateReport {
            root: root.to_path_buf(),
            directories: skeleton.directories().to_vec(),
            ..GenerateReport::default()
        };
        let mut ledger = Ledger::default();

        for renderer in &self.renderers {
            let name = renderer.name();
            if !renderer.applies(ctx) {
                debug!(renderer = name, "axis disabled, skipping");
                for hook in &self.hooks {
                    hook.on_skip(name);
                }
                report.skipped.push(name);
                continue;
            }

            for artifact in render(renderer.as_ref(), ctx)? {
                ledger.claim(name, artifact.path())?;
                let written = artifact.write(root).map_err(|source| Error::Write {
                    renderer: name,
                    path: root.join(artifact.path()),
                    source,
                })?;
                debug!(renderer = name, path = %written.display(), "wrote artifact");
                for hook in &self.hooks {
                    hook.on_write(name, artifact.path());
                }
                report.files.push(artifact.path().to_path_buf());
            }

            report.rendered.push(name);
            self.transition(GenerationState::Rendered(name));
        }

        Ok(report)
    }

    fn applicable<'a>(
        &'a self,
        ctx: &'a RenderContext,
    ) -> impl Iterator<Item = &'a Box<dyn Renderer>> {
        self.renderers.iter().filter(move |r| r.applies(ctx))
    }

    fn transition(&self, state: GenerationState) {
        self.state.set(state);
        for hook in &self.hooks {
            hook.on_state(state);
        }
    }
}

fn render(renderer: &dyn Renderer, ctx: &RenderContext) -> Result<Vec<Artifact>> {
    renderer.render(ctx).map_err(|source| Error::Render {
        renderer: renderer.name(),
        source: Box::new(source),
    })
}

/// Tracks which renderer produced each path.
#[derive(Default)]
struct Ledger {
    owners: HashMap<PathBuf, &'static str>,
}

impl Ledger {
    fn claim(&mut self, renderer: &'static str, path: &Path) -> Result<()> {
        if let Some(&first) = self.owners.get(path) {
            return Err(Error::DuplicateArtifact {
                renderer,
                first,
                path: path.to_path_buf(),
            });
        }
        self.owners.insert(path.to_path_buf(), renderer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        sync::{Arc, Mutex},
    };

    use svcforge_config::{Database, ProjectConfig};
    use tempfile::TempDir;

    use super::*;

    struct Fixed {
        name: &'static str,
        files: Vec<(&'static str, &'static str)>,
        dirs: Vec<&'static str>,
        enabled: bool,
    }

    impl Fixed {
        fn new(name: &'static str, files: Vec<(&'static str, &'static str)>) -> Self {
            Self {
                name,
                files,
                dirs: Vec::new(),
                enabled: true,
            }
        }
    }

    impl Renderer for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }

        fn applies(&self, _ctx: &RenderContext) -> bool {
            self.enabled
        }

        fn directories(&self, _ctx: &RenderContext) -> Vec<PathBuf> {
            self.dirs.iter().map(PathBuf::from).collect()
        }

        fn render(&self, _ctx: &RenderContext) -> Result<Vec<Artifact>> {
            Ok(self
                .files
                .iter()
                .map(|(path, content)| Artifact::new(*path, *content))
                .collect())
        }
    }

    struct Failing;

    impl Renderer for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn render(&self, _ctx: &RenderContext) -> Result<Vec<Artifact>> {
            Err(Error::DependencyConflict {
                module: "example.org/dep".to_string(),
                existing: svcforge_core::Version::new(1, 0, 0),
                requested: svcforge_core::Version::new(2, 0, 0),
            })
        }
    }

    #[derive(Clone, Default)]
    struct Recorder {
        states: Arc<Mutex<Vec<GenerationState>>>,
        skipped: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Hook for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn on_state(&self, state: GenerationState) {
            self.states.lock().unwrap().push(state);
        }

        fn on_skip(&self, renderer: &'static str) {
            self.skipped.lock().unwrap().push(renderer);
        }
    }

    fn context(root: &Path) -> RenderContext {
        let config = ProjectConfig::builder("orders")
            .with_database(Database::None)
            .with_target_dir(root.join("orders"))
            .resolve_in(root)
            .unwrap();
        RenderContext::new(&config)
    }

    #[test]
    fn test_generate_writes_files_and_skips_disabled() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path());
        let recorder = Recorder::default();
        let mut disabled = Fixed::new("rpc", vec![("api/service.proto", "syntax")]);
        disabled.enabled = false;
        disabled.dirs = vec!["api"];

        let engine = Engine::new(Skeleton::new().dir("cmd"))
            .renderer(Fixed::new("entry", vec![("cmd/main.go", "package main\n")]))
            .renderer(disabled)
            .hook(recorder.clone());

        let report = engine.generate(&ctx).unwrap();

        assert_eq!(report.files, [PathBuf::from("cmd/main.go")]);
        assert_eq!(report.rendered, ["entry"]);
        assert_eq!(report.skipped, ["rpc"]);
        assert!(!ctx.target_dir().join("api").exists());
        assert_eq!(
            fs::read_to_string(ctx.target_dir().join("cmd/main.go")).unwrap(),
            "package main\n"
        );
        assert_eq!(*recorder.skipped.lock().unwrap(), ["rpc"]);
        assert_eq!(
            *recorder.states.lock().unwrap(),
            [
                GenerationState::NotStarted,
                GenerationState::SkeletonCreated,
                GenerationState::Rendered("entry"),
                GenerationState::Done,
            ]
        );
        assert_eq!(engine.state(), GenerationState::Done);
    }

    #[test]
    fn test_renderer_directories_join_skeleton() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path());
        let mut owner = Fixed::new("db", Vec::new());
        owner.dirs = vec!["pkg/database"];

        let engine = Engine::new(Skeleton::new().dir("cmd")).renderer(owner);
        let report = engine.generate(&ctx).unwrap();

        assert_eq!(
            report.directories,
            [PathBuf::from("cmd"), PathBuf::from("pkg/database")]
        );
        assert!(ctx.target_dir().join("pkg/database").is_dir());
    }

    #[test]
    fn test_duplicate_paths_are_rejected() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path());
        let engine = Engine::new(Skeleton::new())
            .renderer(Fixed::new("build", vec![(".gitignore", "bin/\n")]))
            .renderer(Fixed::new("container", vec![(".gitignore", "tmp/\n")]));

        let err = engine.generate(&ctx).unwrap_err();

        assert!(matches!(
            err,
            Error::DuplicateArtifact { renderer: "container", first: "build", .. }
        ));
        assert!(engine.preview(&ctx).is_err());
        assert_eq!(engine.state(), GenerationState::Failed);
    }

    #[test]
    fn test_render_failure_is_wrapped_with_renderer() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path());
        let recorder = Recorder::default();
        let engine = Engine::new(Skeleton::new())
            .renderer(Failing)
            .hook(recorder.clone());

        let err = engine.generate(&ctx).unwrap_err();

        assert_eq!(err.phase(), "failing");
        assert_eq!(
            recorder.states.lock().unwrap().last(),
            Some(&GenerationState::Failed)
        );
    }

    #[test]
    fn test_write_failure_names_path() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path());
        // A directory where the file should go makes the write fail.
        let engine = Engine::new(Skeleton::new().dir("config.yaml"))
            .renderer(Fixed::new("settings", vec![("config.yaml", "app:\n")]));

        let err = engine.generate(&ctx).unwrap_err();

        assert_eq!(err.phase(), "settings");
        assert_eq!(err.path(), Some(ctx.target_dir().join("config.yaml").as_path()));
    }

    #[test]
    fn test_preview_does_not_touch_storage() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path());
        let engine = Engine::new(Skeleton::new().dir("cmd"))
            .renderer(Fixed::new("entry", vec![("cmd/main.go", "package main\n")]));

        let artifacts = engine.preview(&ctx).unwrap();

        assert_eq!(artifacts.len(), 1);
        assert!(!ctx.target_dir().exists());
    }

    #[test]
    fn test_rerun_overwrites() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path());
        let engine = Engine::new(Skeleton::new())
            .renderer(Fixed::new("build", vec![("Makefile", "all:\n")]));

        engine.generate(&ctx).unwrap();
        fs::write(ctx.target_dir().join("Makefile"), "edited\n").unwrap();
        engine.generate(&ctx).unwrap();

        assert_eq!(
            fs::read_to_string(ctx.target_dir().join("Makefile")).unwrap(),
            "all:\n"
        );
    }
}

//! Adapters for the variant axes of the generated service.
//!
//! Each web framework and each database engine is one adapter. Renderers
//! never match on [`Framework`] or [`Database`] themselves; they ask the
//! adapter for the framework- or engine-specific pieces.

mod echo;
mod fiber;
mod gin;
mod gorm;
mod mongo;

use svcforge_codegen::{Dependency, RenderContext};
use svcforge_config::{Database, Framework};

pub use self::{
    echo::EchoAdapter,
    fiber::FiberAdapter,
    gin::GinAdapter,
    gorm::{GormAdapter, GormDialect},
    mongo::MongoAdapter,
};
use crate::{GoFile, Import, Setting};

/// How the HTTP server is started and stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// The router is an `http.Handler` served by `net/http`.
    HttpServer,
    /// The framework owns its listener (`Listen` / `Shutdown`).
    Native,
}

/// HTTP status constants used by the health handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCodes {
    pub ok: &'static str,
    pub unavailable: &'static str,
}

/// Framework-specific pieces of the HTTP layer.
pub trait HttpFramework: Send + Sync {
    fn framework(&self) -> Framework;

    fn dependencies(&self) -> &'static [Dependency];

    fn lifecycle(&self) -> Lifecycle;

    /// Third-party imports of the routing file.
    fn router_imports(&self) -> Vec<Import>;

    /// Return type of `SetupRoutes`.
    fn router_type(&self) -> &'static str;

    /// Body of `SetupRoutes`, one tab deep.
    fn setup_routes(&self) -> &'static str;

    /// Parameter list shared by every handler method.
    fn handler_params(&self) -> &'static str;

    /// Whether handler methods return `error`.
    fn handler_returns_error(&self) -> bool;

    /// Body of the ping handler, one tab deep.
    fn ping(&self) -> &'static str;

    /// Imports needed by the health handler beyond `runtime` and `time`.
    fn health_imports(&self) -> Vec<Import>;

    fn status_codes(&self) -> StatusCodes;

    /// Statement writing `body` as JSON with `status`.
    fn respond(&self, status: &str, body: &str) -> String;

    /// Third-party imports of the middleware file.
    fn middleware_imports(&self) -> Vec<Import>;

    /// The `RequestLogger` middleware declaration.
    fn request_logger(&self) -> &'static str;
}

/// Connection settings a container runtime can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvOverride {
    /// Environment variable read by the loader.
    pub var: &'static str,
    /// Key in the database section it replaces.
    pub key: &'static str,
}

/// A database container started next to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeService {
    pub name: &'static str,
    pub image: &'static str,
    pub port: u16,
    pub environment: Vec<(&'static str, String)>,
    pub volume: &'static str,
    pub mount: &'static str,
    /// Value of the [`EnvOverride`] variable inside the compose network.
    pub address: String,
}

/// Engine-specific pieces of the persistence layer.
pub trait DatabaseAdapter: Send + Sync {
    fn database(&self) -> Database;

    fn dependencies(&self) -> &'static [Dependency];

    /// Keys of the `database` settings section.
    fn settings(&self, ctx: &RenderContext) -> Vec<Setting>;

    /// Body of `Config.GetDSN`, one tab deep.
    fn dsn(&self) -> &'static str;

    /// `pkg/database/database.go`.
    fn implementation(&self, ctx: &RenderContext) -> GoFile;

    fn env_override(&self) -> Option<EnvOverride> {
        None
    }

    /// Container backing this engine, if it needs an external runtime.
    fn compose_service(&self, _ctx: &RenderContext) -> Option<ComposeService> {
        None
    }

    /// Whether the driver links C code, which the image build must allow.
    fn requires_cgo(&self) -> bool {
        false
    }
}

static GIN: GinAdapter = GinAdapter;
static FIBER: FiberAdapter = FiberAdapter;
static ECHO: EchoAdapter = EchoAdapter;

static POSTGRES: GormAdapter = GormAdapter::new(GormDialect::Postgres);
static MYSQL: GormAdapter = GormAdapter::new(GormDialect::Mysql);
static SQLITE: GormAdapter = GormAdapter::new(GormDialect::Sqlite);
static MONGODB: MongoAdapter = MongoAdapter;

/// The adapter for `framework`.
pub fn framework(framework: Framework) -> &'static dyn HttpFramework {
    match framework {
        Framework::Gin => &GIN,
        Framework::Fiber => &FIBER,
        Framework::Echo => &ECHO,
    }
}

/// The adapter for `database`, or `None` when no database is selected.
pub fn database(database: Database) -> Option<&'static dyn DatabaseAdapter> {
    match database {
        Database::None => None,
        Database::Postgres => Some(&POSTGRES),
        Database::Mysql => Some(&MYSQL),
        Database::MongoDb => Some(&MONGODB),
        Database::InMemory => Some(&SQLITE),
    }
}

//! Read-only render context shared by every renderer.

use std::path::Path;

use svcforge_config::{Database, Framework, ProjectConfig};
use svcforge_core::{Version, to_go_camel_case, to_snake_case};

/// Port the HTTP server listens on.
pub const HTTP_PORT: u16 = 8080;

/// Port the gRPC server listens on when enabled.
pub const RPC_PORT: u16 = 9090;

/// Version stamped into the generated service.
pub const APP_VERSION: Version = Version::new(1, 0, 0);

/// The resolved configuration plus every value derived from it.
///
/// Renderers read shared facts (identifiers, ports, enabled axes) from here
/// and nowhere else, so independently rendered files cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    config: ProjectConfig,
    service: String,
    proto_package: String,
    rpc_port: Option<u16>,
}

impl RenderContext {
    pub fn new(config: &ProjectConfig) -> Self {
        let proto_package = to_snake_case(config.name());
        Self {
            service: to_go_camel_case(config.name()),
            proto_package,
            rpc_port: config.rpc().then_some(RPC_PORT),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        self.config.name()
    }

    pub fn module_path(&self) -> &str {
        self.config.module_path()
    }

    pub fn framework(&self) -> Framework {
        self.config.framework()
    }

    pub fn database(&self) -> Database {
        self.config.database()
    }

    pub fn database_enabled(&self) -> bool {
        self.config.database().is_enabled()
    }

    pub fn rpc_enabled(&self) -> bool {
        self.rpc_port.is_some()
    }

    pub fn target_dir(&self) -> &Path {
        self.config.target_dir()
    }

    /// Go identifier form of the project name (`order-api` -> `OrderApi`).
    ///
    /// Letters after a digit are capitalized so the proto service name and
    /// the names protoc-gen-go derives from it are the same string.
    pub fn service_name(&self) -> &str {
        &self.service
    }

    /// Protobuf package name (`order-api` -> `order_api`).
    pub fn proto_package(&self) -> &str {
        &self.proto_package
    }

    pub fn app_version(&self) -> Version {
        APP_VERSION
    }

    pub fn http_port(&self) -> u16 {
        HTTP_PORT
    }

    /// gRPC port, present iff the RPC axis is enabled.
    pub fn rpc_port(&self) -> Option<u16> {
        self.rpc_port
    }

    /// Import path of a package inside the generated module.
    ///
    /// ```
    /// # use std::path::Path;
    /// # use svcforge_config::ProjectConfig;
    /// # use svcforge_codegen::RenderContext;
    /// let config = ProjectConfig::builder("orders")
    ///     .with_module_path("example.org/orders")
    ///     .resolve_in(Path::new("/work"))
    ///     .unwrap();
    /// let ctx = RenderContext::new(&config);
    /// assert_eq!(ctx.import("internal/config"), "example.org/orders/internal/config");
    /// ```
    pub fn import(&self, package: &str) -> String {
        format!("{}/{}", self.module_path(), package.trim_matches('/'))
    }
}

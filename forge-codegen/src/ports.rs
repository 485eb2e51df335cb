//! Port publication shared by container and task-runner descriptors.

use std::fmt;

use crate::RenderContext;

/// A container port forwarded to the host under the same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedPort {
    pub name: &'static str,
    pub port: u16,
}

impl PublishedPort {
    /// `host:container` mapping as used by `docker run -p` and compose.
    pub fn mapping(&self) -> String {
        format!("{}:{}", self.port, self.port)
    }
}

impl fmt::Display for PublishedPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.port, self.name)
    }
}

/// Every port the service publishes: HTTP always, gRPC when enabled.
///
/// Compose, the Dockerfile and the Makefile all take their port lists from
/// here.
pub fn published_ports(ctx: &RenderContext) -> Vec<PublishedPort> {
    let mut ports = vec![PublishedPort {
        name: "http",
        port: ctx.http_port(),
    }];
    if let Some(port) = ctx.rpc_port() {
        ports.push(PublishedPort { name: "grpc", port });
    }
    ports
}

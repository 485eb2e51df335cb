//! The eight axis renderers.
//!
//! Each renderer owns a fixed set of files. Optional axes (database, RPC)
//! opt out through [`Renderer::applies`](svcforge_codegen::Renderer::applies),
//! which also drops the directories they own.

mod build;
mod container;
mod database;
mod entrypoint;
mod framework;
mod manifest;
mod rpc;
mod settings;

pub use build::BuildRenderer;
pub use container::ContainerRenderer;
pub use database::DatabaseRenderer;
pub use entrypoint::EntrypointRenderer;
pub use framework::FrameworkRenderer;
pub use manifest::{ManifestRenderer, dependencies};
pub use rpc::RpcRenderer;
pub use settings::SettingsRenderer;

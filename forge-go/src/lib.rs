//! Go microservice renderers for svcforge.
//!
//! [`Generator`] is the entry point: it wires the eight axis renderers into a
//! [`svcforge_codegen::Engine`] and runs them over one resolved
//! [`svcforge_config::ProjectConfig`].

mod generator;
mod go_file;
mod settings;
mod versions;

pub mod adapters;
pub mod files;
pub mod renderers;

pub use generator::{Generator, base_skeleton};
pub use go_file::{GoField, GoFile, GoStruct, Import};
pub use settings::{Section, Setting, Value, sections};
pub use versions::GO_VERSION;

//! Generation engine and shared rendering utilities for svcforge.
//!
//! This crate is independent of the generated language. It provides:
//!
//! - [`RenderContext`] - the read-only view every renderer works from
//! - [`Renderer`] and [`Engine`] - renderer contract and the composition
//!   engine that sequences renderers and emits their output
//! - [`published_ports`], [`DependencySet`] - helpers that keep facts shared
//!   between files in one place
//! - [`builder`] - code building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`testing`] - test utilities (feature-gated)

mod context;
mod deps;
mod engine;
mod error;
mod ports;
mod renderer;
mod skeleton;

pub mod builder;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use context::{APP_VERSION, HTTP_PORT, RPC_PORT, RenderContext};
pub use deps::{Dependency, DependencySet};
pub use engine::{Engine, GenerateReport, GenerationState, Hook};
pub use error::{Error, Result, SKELETON_PHASE};
pub use ports::{PublishedPort, published_ports};
pub use renderer::Renderer;
pub use skeleton::Skeleton;

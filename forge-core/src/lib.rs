//! Core utilities and types for the svcforge generator.
//!
//! This crate provides the artifact type every renderer produces, the
//! filesystem primitives used to emit it, and the naming helpers shared
//! across the workspace.

mod file;
mod utils;
mod version;

// File operations
pub use file::{Artifact, DIR_MODE, FILE_MODE, GeneratedFile, create_dir, write_file};
// String utilities
pub use utils::{to_go_camel_case, to_pascal_case, to_snake_case};
pub use version::{Version, VersionError};

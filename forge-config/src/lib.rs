//! Project configuration for the svcforge generator.
//!
//! Free-form input (flags, presets, prompt answers) is collected in a
//! [`ConfigBuilder`] and resolved once into an immutable [`ProjectConfig`].
//! Variant choices are closed enums parsed here, so nothing downstream
//! matches on strings.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod database;
mod error;
mod framework;
mod project;
mod validate;

pub use database::Database;
pub use error::{Error, Result};
pub use framework::Framework;
pub use project::{ConfigBuilder, DEFAULT_MODULE_PREFIX, ProjectConfig};
pub use validate::{validate_module_path, validate_name};

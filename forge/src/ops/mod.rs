//! Core operations.
//!
//! This module contains the business logic for svcforge commands,
//! separated from CLI argument parsing and output rendering.

pub mod init;

pub use init::{generate, preview};

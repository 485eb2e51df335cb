//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod init;
mod output;

pub use init::{InitReport, PreviewFile, PreviewReport, ProjectSummary};
pub use output::{Report, TerminalOutput};

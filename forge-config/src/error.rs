use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(svcforge::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preset")]
    #[diagnostic(code(svcforge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("a project name is required")]
    #[diagnostic(
        code(svcforge::missing_name),
        help("pass a name, e.g. 'svcforge init orders'")
    )]
    MissingName,

    #[error("invalid project name '{name}'")]
    #[diagnostic(
        code(svcforge::invalid_name),
        help(
            "{reason}. Use letters, digits, '-', '_' and '.', starting with a letter."
        )
    )]
    InvalidName { name: String, reason: String },

    #[error("invalid module path '{module}'")]
    #[diagnostic(
        code(svcforge::invalid_module),
        help("{reason}. Module paths look like 'github.com/acme/orders'.")
    )]
    InvalidModulePath { module: String, reason: String },

    #[error("unknown framework '{value}'")]
    #[diagnostic(
        code(svcforge::unknown_framework),
        help("valid frameworks are: gin, fiber, echo")
    )]
    UnknownFramework { value: String },

    #[error("unknown database '{value}'")]
    #[diagnostic(
        code(svcforge::unknown_database),
        help("valid databases are: postgresql, mysql, mongodb, in-memory, none")
    )]
    UnknownDatabase { value: String },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    pub(crate) fn invalid_name(name: &str, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidName {
            name: name.to_string(),
            reason: reason.into(),
        })
    }

    pub(crate) fn invalid_module(module: &str, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidModulePath {
            module: module.to_string(),
            reason: reason.into(),
        })
    }
}

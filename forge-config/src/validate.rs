//! Validation of the free-form configuration fields.

use crate::{Error, Result};

/// Check that a project name can be used as a directory and service name.
pub fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(Box::new(Error::MissingName));
    };
    if !first.is_ascii_alphabetic() {
        return Err(Error::invalid_name(name, "names must start with a letter"));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(Error::invalid_name(
            name,
            format!("'{}' is not allowed in a project name", bad),
        ));
    }
    Ok(())
}

/// Check that a module path has the shape of a Go import path.
pub fn validate_module_path(module: &str) -> Result<()> {
    if module.is_empty() {
        return Err(Error::invalid_module(module, "the module path is empty"));
    }
    if module.chars().any(char::is_whitespace) {
        return Err(Error::invalid_module(module, "whitespace is not allowed"));
    }
    if module.contains('\\') {
        return Err(Error::invalid_module(module, "use '/' as the separator"));
    }
    if module.starts_with('/') || module.ends_with('/') {
        return Err(Error::invalid_module(
            module,
            "leading or trailing '/' is not allowed",
        ));
    }
    if module.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
        return Err(Error::invalid_module(
            module,
            "every path segment must be a real name",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["orders", "order-service", "billing_api", "svc.v2", "A1"] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_names() {
        assert!(matches!(*validate_name("").unwrap_err(), Error::MissingName));
        for name in ["1orders", "-orders", "my orders", "a/b", "..", "ördes"] {
            assert!(
                matches!(*validate_name(name).unwrap_err(), Error::InvalidName { .. }),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_valid_module_paths() {
        for module in ["example.org/orders", "github.com/acme/orders", "orders"] {
            assert!(validate_module_path(module).is_ok(), "{module} should be valid");
        }
    }

    #[test]
    fn test_invalid_module_paths() {
        for module in [
            "",
            "/orders",
            "example.org/orders/",
            "example.org//orders",
            "example.org/../orders",
            "example org/orders",
            "example.org\\orders",
        ] {
            assert!(
                matches!(
                    *validate_module_path(module).unwrap_err(),
                    Error::InvalidModulePath { .. }
                ),
                "{module:?} should be rejected"
            );
        }
    }
}

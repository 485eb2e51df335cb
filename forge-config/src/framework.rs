//! Web framework selection.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::Error;

/// Supported HTTP frameworks for the generated service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Framework {
    /// github.com/gin-gonic/gin
    #[default]
    Gin,
    /// github.com/gofiber/fiber/v2
    Fiber,
    /// github.com/labstack/echo/v4
    Echo,
}

impl Framework {
    /// Every framework, in prompt order.
    pub const ALL: [Framework; 3] = [Framework::Gin, Framework::Fiber, Framework::Echo];

    /// Returns the framework identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Gin => "gin",
            Framework::Fiber => "fiber",
            Framework::Echo => "echo",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Framework::Gin => "Gin",
            Framework::Fiber => "Fiber",
            Framework::Echo => "Echo",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gin" => Ok(Framework::Gin),
            "fiber" => Ok(Framework::Fiber),
            "echo" => Ok(Framework::Echo),
            _ => Err(Error::UnknownFramework {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Framework {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Framework::from_str("gin").unwrap(), Framework::Gin);
        assert_eq!(Framework::from_str("Fiber").unwrap(), Framework::Fiber);
        assert_eq!(Framework::from_str(" ECHO ").unwrap(), Framework::Echo);
    }

    #[test]
    fn test_unknown_is_an_error() {
        let err = Framework::from_str("chi").unwrap_err();
        assert!(matches!(err, Error::UnknownFramework { ref value } if value == "chi"));
    }

    #[test]
    fn test_display_roundtrips() {
        for framework in Framework::ALL {
            assert_eq!(framework.to_string().parse::<Framework>().unwrap(), framework);
        }
    }
}

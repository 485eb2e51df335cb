use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// A `major.minor.patch` version.
///
/// Parses both bare (`1.9.1`) and Go-module style (`v1.9.1`) versions.
/// [`Display`](fmt::Display) prints the bare form; [`Version::tag`] the
/// prefixed form used by `go.mod`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("invalid version '{0}', expected 'X.Y.Z' or 'vX.Y.Z'")]
    Shape(String),
    #[error("invalid {part} component in version '{input}'")]
    Component { part: &'static str, input: String },
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Go module version tag (`v1.2.3`).
    pub fn tag(&self) -> String {
        format!("v{}", self)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.strip_prefix('v').unwrap_or(s);
        let parts: Vec<&str> = bare.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(VersionError::Shape(s.to_string()));
        };
        let component = |part: &'static str, raw: &str| {
            raw.parse::<u32>().map_err(|_| VersionError::Component {
                part,
                input: s.to_string(),
            })
        };
        Ok(Self {
            major: component("major", major)?,
            minor: component("minor", minor)?,
            patch: component("patch", patch)?,
        })
    }
}

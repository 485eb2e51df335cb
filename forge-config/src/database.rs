//! Database backend selection.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::Error;

/// Database backend for the generated service.
///
/// [`Database::None`] disables the database axis entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Database {
    /// No database layer is generated.
    None,
    /// PostgreSQL through GORM.
    #[default]
    Postgres,
    /// MySQL through GORM.
    Mysql,
    /// MongoDB through the official driver.
    MongoDb,
    /// SQLite in-memory database through GORM.
    InMemory,
}

impl Database {
    /// Every choice, in prompt order.
    pub const ALL: [Database; 5] = [
        Database::Postgres,
        Database::Mysql,
        Database::MongoDb,
        Database::InMemory,
        Database::None,
    ];

    /// Returns the database identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::None => "none",
            Database::Postgres => "postgresql",
            Database::Mysql => "mysql",
            Database::MongoDb => "mongodb",
            Database::InMemory => "in-memory",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Database::None => "None",
            Database::Postgres => "PostgreSQL",
            Database::Mysql => "MySQL",
            Database::MongoDb => "MongoDB",
            Database::InMemory => "In-memory (SQLite)",
        }
    }

    /// Whether a database layer is generated at all.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Database::None)
    }

    /// Whether the engine runs as a separate process (and so needs a
    /// container of its own).
    pub fn has_external_runtime(&self) -> bool {
        matches!(
            self,
            Database::Postgres | Database::Mysql | Database::MongoDb
        )
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Database {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "no-db" | "nodb" | "no" => Ok(Database::None),
            "postgresql" | "postgres" | "pg" => Ok(Database::Postgres),
            "mysql" => Ok(Database::Mysql),
            "mongodb" | "mongo" => Ok(Database::MongoDb),
            "in-memory" | "inmemory" | "memory" | "sqlite" => Ok(Database::InMemory),
            _ => Err(Error::UnknownDatabase {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Database {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(Database::from_str("PostgreSQL").unwrap(), Database::Postgres);
        assert_eq!(Database::from_str("pg").unwrap(), Database::Postgres);
        assert_eq!(Database::from_str("mongo").unwrap(), Database::MongoDb);
        assert_eq!(Database::from_str("SQLite").unwrap(), Database::InMemory);
        assert_eq!(Database::from_str("NONE").unwrap(), Database::None);
        assert_eq!(Database::from_str("no-db").unwrap(), Database::None);
    }

    #[test]
    fn test_unknown_is_an_error() {
        let err = Database::from_str("oracle").unwrap_err();
        assert!(matches!(err, Error::UnknownDatabase { ref value } if value == "oracle"));
    }

    #[test]
    fn test_runtime_classification() {
        assert!(!Database::None.is_enabled());
        assert!(Database::InMemory.is_enabled());
        assert!(!Database::InMemory.has_external_runtime());
        assert!(Database::Mysql.has_external_runtime());
        assert!(!Database::None.has_external_runtime());
    }

    #[test]
    fn test_display_roundtrips() {
        for database in Database::ALL {
            assert_eq!(database.to_string().parse::<Database>().unwrap(), database);
        }
    }
}

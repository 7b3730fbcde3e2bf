//! Known driver families.

use crate::error::{DsnError, DsnResult};

/// Database driver family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Driver {
    /// PostgreSQL
    Postgres,
    /// MySQL / MariaDB
    MySql,
    /// SQLite
    Sqlite,
    /// MongoDB
    MongoDb,
    /// Oracle
    Oracle,
    /// Microsoft SQL Server
    MsSql,
}

impl Driver {
    /// Get the driver name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
            Self::MongoDb => "mongodb",
            Self::Oracle => "oracle",
            Self::MsSql => "mssql",
        }
    }

    /// Longest column alias the database accepts, if it has a limit.
    pub fn max_alias_length(&self) -> Option<usize> {
        match self {
            Self::Postgres => Some(63),
            Self::MySql => Some(256),
            Self::Oracle => Some(30),
            Self::MsSql => Some(128),
            Self::Sqlite | Self::MongoDb => None,
        }
    }

    /// Whether the database name is also passed as a service identifier.
    pub fn uses_sid(&self) -> bool {
        matches!(self, Self::Oracle)
    }

    /// Whether connection URLs may list a replica set.
    pub fn supports_replica_set(&self) -> bool {
        matches!(self, Self::MongoDb)
    }

    /// Parse driver from URL scheme or `type` option.
    pub fn from_scheme(scheme: &str) -> DsnResult<Self> {
        match scheme.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "sqlite" | "sqlite3" | "file" => Ok(Self::Sqlite),
            "mongodb" | "mongodb+srv" => Ok(Self::MongoDb),
            "oracle" => Ok(Self::Oracle),
            "mssql" | "sqlserver" => Ok(Self::MsSql),
            other => Err(DsnError::UnknownDriver(other.to_string())),
        }
    }
}

impl std::fmt::Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Driver {
    type Err = DsnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_scheme(s)
    }
}

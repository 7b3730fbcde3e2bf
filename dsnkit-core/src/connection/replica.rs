//! Replica-set aware connection URL parser for MongoDB-style URLs.

use super::{UrlParts, non_empty, split_host_port};
use crate::value::DriverOptions;
use tracing::debug;

/// Components of a connection URL that may name a replica set.
///
/// Exactly one of `host`/`port` or `host_replica_set` is filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicaSetUrl {
    /// Everything before the first `:`.
    pub scheme: String,
    /// Host name, when no replica set was named.
    pub host: Option<String>,
    /// The untouched host list (`h1:27017,h2:27018`), when a replica set
    /// was named.
    pub host_replica_set: Option<String>,
    /// Percent-decoded username, empty when missing.
    pub username: String,
    /// Percent-decoded password, empty when missing.
    pub password: String,
    /// Port, when no replica set was named and one could be read.
    pub port: Option<i64>,
    /// Database name with the query string removed.
    pub database: Option<String>,
    /// Replica set name.
    pub replica_set: Option<String>,
}

impl ReplicaSetUrl {
    /// Parse a connection URL, detecting a replica set parameter.
    ///
    /// Only one query parameter is read: whatever follows the first `=`
    /// after the `?` is taken as the replica set name, whatever the key is
    /// called. With `?a=b&replicaSet=rs0` the name is `b&replicaSet=rs0`.
    ///
    /// ```rust
    /// use dsnkit_core::ReplicaSetUrl;
    ///
    /// let url = ReplicaSetUrl::parse("mongodb://h:27017/db");
    /// assert_eq!(url.host.as_deref(), Some("h"));
    /// assert_eq!(url.port, Some(27017));
    /// assert_eq!(url.replica_set, None);
    /// ```
    pub fn parse(url: &str) -> Self {
        debug!(url_len = url.len(), "ReplicaSetUrl::parse()");
        let parts = UrlParts::split(url);

        let (database, replica_set) = match parts.path {
            Some(path) => match path.split_once('?') {
                Some((db, query)) => (
                    non_empty(db),
                    query.split_once('=').and_then(|(_, value)| non_empty(value)),
                ),
                None => (non_empty(path), None),
            },
            None => (None, None),
        };

        let (host, port, host_replica_set) = if replica_set.is_some() {
            (None, None, Some(parts.host_and_port.to_string()))
        } else {
            let (host, port) = split_host_port(parts.host_and_port);
            (Some(host), port, None)
        };

        let parsed = Self {
            scheme: parts.scheme.to_string(),
            host,
            host_replica_set,
            username: parts.username,
            password: parts.password,
            port,
            database,
            replica_set,
        };
        debug!(
            scheme = %parsed.scheme,
            host = ?parsed.host,
            hosts = ?parsed.host_replica_set,
            replica_set = ?parsed.replica_set,
            database = ?parsed.database,
            "Replica set URL parsed"
        );
        parsed
    }

    /// Check if a replica set was named.
    pub fn is_replica_set(&self) -> bool {
        self.replica_set.is_some()
    }

    /// Convert into driver option entries.
    pub fn into_options(self) -> DriverOptions {
        DriverOptions::new()
            .set("type", self.scheme)
            .set("host", self.host)
            .set("hostReplicaSet", self.host_replica_set)
            .set("username", self.username)
            .set("password", self.password)
            .set("port", self.port)
            .set("database", self.database)
            .set("replicaSet", self.replica_set)
    }
}

//! Loading base driver options from files and the environment.
//!
//! Option files are flat TOML or JSON tables. Variable references
//! (`${DB_PASSWORD}`, `${DB_PORT:-5432}`) are expanded before parsing.
//!
//! ```rust
//! use dsnkit_core::DriverOptions;
//!
//! let opts = DriverOptions::from_toml_str(r#"
//!     type = "postgres"
//!     url = "postgres://app@localhost/${DSNKIT_DOC_DB:-shop}"
//!     logging = true
//! "#).unwrap();
//!
//! assert_eq!(opts.url(), Some("postgres://app@localhost/shop"));
//! ```

use crate::connection::{EnvExpander, EnvSource, StdEnvSource};
use crate::error::{DsnError, DsnResult};
use crate::value::DriverOptions;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable consulted by [`DriverOptions::with_database_url`].
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

impl DriverOptions {
    /// Parse options from a TOML table.
    pub fn from_toml_str(content: &str) -> DsnResult<Self> {
        Self::from_toml_with(content, &EnvExpander::new())
    }

    /// Parse options from a TOML table, expanding variables from `expander`.
    pub fn from_toml_with<S: EnvSource>(
        content: &str,
        expander: &EnvExpander<S>,
    ) -> DsnResult<Self> {
        let expanded = expander.expand(content)?;
        Ok(toml::from_str(&expanded)?)
    }

    /// Parse options from a JSON object.
    pub fn from_json_str(content: &str) -> DsnResult<Self> {
        Self::from_json_with(content, &EnvExpander::new())
    }

    /// Parse options from a JSON object, expanding variables from `expander`.
    pub fn from_json_with<S: EnvSource>(
        content: &str,
        expander: &EnvExpander<S>,
    ) -> DsnResult<Self> {
        let expanded = expander.expand(content)?;
        Ok(serde_json::from_str(&expanded)?)
    }

    /// Load options from a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> DsnResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DsnError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let options = match extension.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            other => return Err(DsnError::UnsupportedFormat(other.to_string())),
        };
        info!(path = %path.display(), keys = options.len(), "Loaded driver options");
        Ok(options)
    }

    /// Set `url` from an environment variable.
    pub fn with_url_from_env(self, var: &str) -> DsnResult<Self> {
        self.with_url_from_source(var, &StdEnvSource)
    }

    /// Set `url` from `DATABASE_URL`.
    pub fn with_database_url(self) -> DsnResult<Self> {
        self.with_url_from_env(DATABASE_URL_VAR)
    }

    /// Set `url` from a variable in `source`.
    pub fn with_url_from_source(self, var: &str, source: &impl EnvSource) -> DsnResult<Self> {
        let url = source
            .get(var)
            .ok_or_else(|| DsnError::EnvNotFound(var.to_string()))?;
        debug!(var, url_len = url.len(), "Connection URL taken from environment");
        Ok(self.set("url", url))
    }
}

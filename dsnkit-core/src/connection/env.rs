//! Environment variable expansion for URLs and option files.

use crate::error::{DsnError, DsnResult};
use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

/// Where variable values come from.
pub trait EnvSource: Send + Sync {
    /// Look up a variable.
    fn get(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A fixed set of variables, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Expands `$VAR`, `${VAR}`, `${VAR:-default}` and `${VAR:?message}`.
///
/// Empty variables count as unset for the `:-` and `:?` forms.
///
/// ```rust
/// use dsnkit_core::connection::{EnvExpander, MapEnvSource};
///
/// let expander = EnvExpander::with_source(MapEnvSource::new().set("DB_HOST", "db.local"));
/// let url = expander.expand("postgres://${DB_HOST}:${DB_PORT:-5432}/app").unwrap();
/// assert_eq!(url, "postgres://db.local:5432/app");
/// ```
#[derive(Debug, Clone)]
pub struct EnvExpander<S: EnvSource = StdEnvSource> {
    source: S,
}

impl EnvExpander<StdEnvSource> {
    /// Expander over the process environment.
    pub fn new() -> Self {
        Self {
            source: StdEnvSource,
        }
    }
}

impl Default for EnvExpander<StdEnvSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EnvSource> EnvExpander<S> {
    /// Expander over a custom source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Expand every variable reference in `input`.
    pub fn expand(&self, input: &str) -> DsnResult<String> {
        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('{') => {
                    chars.next();
                    out.push_str(&self.expand_braced(&mut chars)?);
                }
                Some(&next) if next.is_alphabetic() || next == '_' => {
                    out.push_str(&self.expand_bare(&mut chars)?);
                }
                _ => out.push('$'),
            }
        }

        Ok(out)
    }

    fn expand_braced(&self, chars: &mut Peekable<Chars<'_>>) -> DsnResult<String> {
        let body: String = chars.by_ref().take_while(|&c| c != '}').collect();

        let (name, modifier) = match body.split_once(':') {
            Some((name, rest)) => {
                let mut rest = rest.chars();
                (name, rest.next().map(|m| (m, rest.as_str())))
            }
            None => (body.as_str(), None),
        };

        if name.is_empty() {
            return Err(DsnError::InvalidEnvValue {
                name: String::new(),
                message: "Empty variable name".to_string(),
            });
        }

        match self.source.get(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => match modifier {
                Some(('-', default)) => Ok(default.to_string()),
                Some(('?', message)) => Err(DsnError::InvalidEnvValue {
                    name: name.to_string(),
                    message: if message.is_empty() {
                        format!("Required variable '{}' is not set", name)
                    } else {
                        message.to_string()
                    },
                }),
                _ => Err(DsnError::EnvNotFound(name.to_string())),
            },
        }
    }

    fn expand_bare(&self, chars: &mut Peekable<Chars<'_>>) -> DsnResult<String> {
        let mut name = String::new();
        while let Some(&c) = chars.peek() {
            if !(c.is_alphanumeric() || c == '_') {
                break;
            }
            name.push(c);
            chars.next();
        }

        self.source.get(&name).ok_or(DsnError::EnvNotFound(name))
    }
}

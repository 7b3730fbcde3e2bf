//! Open, ordered option maps.
//!
//! Driver options have no fixed schema. They are kept as an ordered map of
//! option name to [`OptionValue`], where [`OptionValue::Absent`] marks a key
//! that is present but carries no value.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single driver option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Key present without a value. Serialized as `null`.
    Absent,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// String value.
    String(String),
    /// Structured value (arrays, nested tables).
    Json(serde_json::Value),
}

impl OptionValue {
    /// Check if this value is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Get the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "undefined"),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "{}", v),
            Self::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u16> for OptionValue {
    fn from(v: u16) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}

/// An ordered, open-ended set of driver options.
///
/// Insertion order is kept: overwriting an existing key leaves it in place,
/// new keys are appended.
///
/// ```rust
/// use dsnkit_core::DriverOptions;
///
/// let opts = DriverOptions::new()
///     .set("url", "postgres://localhost/app")
///     .set("poolSize", 10);
///
/// assert_eq!(opts.url(), Some("postgres://localhost/app"));
/// assert_eq!(opts.get("poolSize").and_then(|v| v.as_int()), Some(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverOptions {
    entries: IndexMap<String, OptionValue>,
}

impl DriverOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite an option, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove an option, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.entries.shift_remove(key)
    }

    /// Get an option.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    /// Get a string option.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_str)
    }

    /// Check if a key is present (even if its value is absent).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The connection URL, if set to a string.
    pub fn url(&self) -> Option<&str> {
        self.get_str("url")
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Drop every key whose value is [`OptionValue::Absent`].
    pub fn retain_defined(&mut self) {
        self.entries.retain(|_, v| !v.is_absent());
    }

    /// Layer `other` over `self`: every key of `other` overwrites the
    /// same-named key here, new keys are appended.
    pub fn extend(&mut self, other: DriverOptions) {
        self.entries.extend(other.entries);
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for DriverOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for DriverOptions {
    type Item = (String, OptionValue);
    type IntoIter = indexmap::map::IntoIter<String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

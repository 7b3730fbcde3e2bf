//! Column alias generation.

use crate::connection::Driver;
use crate::hash::hash;
use tracing::trace;

/// The part of a driver the alias builder needs.
pub trait DriverDescriptor {
    /// Longest alias the driver accepts, if it has a limit.
    fn max_alias_length(&self) -> Option<usize>;
}

impl DriverDescriptor for Driver {
    fn max_alias_length(&self) -> Option<usize> {
        Driver::max_alias_length(self)
    }
}

impl DriverDescriptor for Option<usize> {
    fn max_alias_length(&self) -> Option<usize> {
        *self
    }
}

impl DriverDescriptor for usize {
    fn max_alias_length(&self) -> Option<usize> {
        Some(*self)
    }
}

/// Build the alias selecting `column` under `alias`.
///
/// The alias is `{alias}_{column}`. When the driver limits alias length and
/// the alias is longer than that, it is replaced by a hash of exactly the
/// limit's length. The same input always yields the same hash.
///
/// ```rust
/// use dsnkit_core::{Driver, build_column_alias};
///
/// assert_eq!(build_column_alias(&Driver::Postgres, "user", "id"), "user_id");
///
/// let long = "a".repeat(40);
/// let alias = build_column_alias(&Driver::Oracle, &long, "created_at");
/// assert_eq!(alias.len(), 30);
/// ```
pub fn build_column_alias(driver: &impl DriverDescriptor, alias: &str, column: &str) -> String {
    let name = format!("{}_{}", alias, column);

    match driver.max_alias_length() {
        Some(max) if max > 0 && name.chars().count() > max => {
            trace!(len = name.len(), max, "Hashing column alias");
            hash(&name, max)
        }
        _ => name,
    }
}

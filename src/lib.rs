//! # dsnkit
//!
//! Turns loose database connection settings into one canonical set of driver
//! options.
//!
//! dsnkit provides:
//! - Positional parsers for connection URLs, including MongoDB replica sets
//! - Merging of URL fields over explicitly supplied options
//! - Length-limited, deterministic column aliases
//! - Option files (TOML/JSON) with environment variable expansion
//!
//! ## Quick Start
//!
//! ```rust
//! use dsnkit::prelude::*;
//!
//! let opts = DriverOptions::new()
//!     .set("url", "mongodb://app:secret@m1:27017,m2:27017/shop?replicaSet=rs0")
//!     .set("appName", "checkout");
//!
//! let merged = normalize_driver_options(&opts);
//! assert_eq!(merged.get_str("hostReplicaSet"), Some("m1:27017,m2:27017"));
//! assert_eq!(merged.get_str("replicaSet"), Some("rs0"));
//! assert_eq!(merged.get_str("appName"), Some("checkout"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Connection URL parsing, option merging and alias building.
pub mod dsn {
    pub use dsnkit_core::*;
}

/// Logging setup.
pub mod logging {
    pub use dsnkit_core::logging::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use dsnkit_core::{
        BuildOptions, ConnectionUrl, Driver, DriverOptions, OptionValue, ReplicaSetUrl,
        build_column_alias, build_driver_options, build_mongodb_driver_options,
        normalize_driver_options,
    };
}

// Re-export key types at the crate root
pub use dsnkit_core::{
    BuildOptions, ConnectionUrl, Driver, DriverDescriptor, DriverOptions, DsnError, DsnResult,
    OptionValue, ReplicaSetUrl, build_column_alias, build_driver_options,
    build_mongodb_driver_options, hash, normalize_driver_options,
};

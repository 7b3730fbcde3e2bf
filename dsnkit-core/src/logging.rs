//! Logging setup.
//!
//! dsnkit logs through `tracing`. Applications that already install a
//! subscriber need nothing from this module. Otherwise, with the
//! `tracing-subscriber` feature enabled, [`init`] installs one configured
//! from the environment:
//!
//! - `DSNKIT_DEBUG=true|1|yes` - log at debug level
//! - `DSNKIT_LOG_LEVEL=trace|debug|info|warn|error` - explicit level
//! - `DSNKIT_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! Parsed credentials are never logged.
//!
//! ```rust,no_run
//! dsnkit_core::logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if `DSNKIT_DEBUG` asks for debug logging.
pub fn is_debug_enabled() -> bool {
    env::var("DSNKIT_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// The level from `DSNKIT_LOG_LEVEL`, falling back to `debug` when
/// `DSNKIT_DEBUG` is set and `warn` otherwise.
pub fn get_log_level() -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { "warn" };
    match env::var("DSNKIT_LOG_LEVEL") {
        Ok(level) => parse_level(&level).unwrap_or(fallback),
        Err(_) => fallback,
    }
}

/// The format from `DSNKIT_LOG_FORMAT`, `json` unless told otherwise.
pub fn get_log_format() -> &'static str {
    env::var("DSNKIT_LOG_FORMAT")
        .map(|f| parse_format(&f))
        .unwrap_or("json")
}

fn parse_level(level: &str) -> Option<&'static str> {
    match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

fn parse_format(format: &str) -> &'static str {
    match format.to_lowercase().as_str() {
        "pretty" => "pretty",
        "compact" => "compact",
        _ => "json",
    }
}

/// Install the global subscriber. Later calls do nothing.
///
/// Nothing is installed unless `DSNKIT_DEBUG` or `DSNKIT_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("DSNKIT_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!("dsnkit={},dsnkit_core={}", level, level))
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let installed = match get_log_format() {
                "json" => registry.with(fmt::layer().json()).try_init(),
                "compact" => registry.with(fmt::layer().compact()).try_init(),
                _ => registry.with(fmt::layer().pretty()).try_init(),
            };

            if installed.is_ok() {
                tracing::info!(level, format = get_log_format(), "dsnkit logging initialized");
            }
        }
    });
}

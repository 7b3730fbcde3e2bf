//! Fuzz target for driver option merging.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_driver_options
//! ```

#![no_main]

use arbitrary::Arbitrary;
use dsnkit_core::{
    BuildOptions, DriverOptions, build_driver_options, build_mongodb_driver_options,
    normalize_driver_options,
};
use libfuzzer_sys::fuzz_target;

/// Structured input: a URL plus a few base options.
#[derive(Debug, Arbitrary)]
struct FuzzOptions {
    url: String,
    driver_type: Option<String>,
    host: Option<String>,
    port: Option<i64>,
    use_sid: bool,
}

fuzz_target!(|input: FuzzOptions| {
    let mut opts = DriverOptions::new()
        .set("url", input.url)
        .set("host", input.host)
        .set("port", input.port);
    if let Some(driver_type) = input.driver_type {
        opts.insert("type", driver_type);
    }
    let build = BuildOptions {
        use_sid: input.use_sid,
    };

    for merged in [
        build_driver_options(&opts, build),
        build_mongodb_driver_options(&opts, build),
        normalize_driver_options(&opts),
    ] {
        // only base entries may stay absent
        for (key, value) in merged.iter() {
            if value.is_absent() {
                assert!(opts.get(key).is_some_and(|base| base.is_absent()), "{key}");
            }
        }
    }

    let once = build_driver_options(&opts, build);
    assert_eq!(build_driver_options(&once, build), once);

    let once = normalize_driver_options(&opts);
    assert_eq!(normalize_driver_options(&once), once);
});

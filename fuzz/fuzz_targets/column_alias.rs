//! Fuzz target for column alias building.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_column_alias
//! ```

#![no_main]

use arbitrary::Arbitrary;
use dsnkit_core::build_column_alias;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzAlias {
    max_alias_length: Option<u8>,
    alias: String,
    column: String,
}

fuzz_target!(|input: FuzzAlias| {
    let limit = input.max_alias_length.map(usize::from);
    let built = build_column_alias(&limit, &input.alias, &input.column);

    match limit {
        Some(max) if max > 0 => assert!(built.chars().count() <= max),
        _ => assert_eq!(built, format!("{}_{}", input.alias, input.column)),
    }
    assert_eq!(built, build_column_alias(&limit, &input.alias, &input.column));
});

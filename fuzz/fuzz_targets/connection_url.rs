//! Fuzz target for the connection URL parsers.
//!
//! Both parsers promise to never fail or panic, whatever the input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_connection_url
//! ```

#![no_main]

use dsnkit_core::{ConnectionUrl, ReplicaSetUrl};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let generic = ConnectionUrl::parse(input);
        let replica = ReplicaSetUrl::parse(input);

        assert_eq!(generic.scheme, replica.scheme);
        assert_eq!(generic.username, replica.username);
        assert_eq!(generic.password, replica.password);

        // exactly one of host/port or the host list is filled in
        if replica.replica_set.is_some() {
            assert!(replica.host.is_none() && replica.port.is_none());
            assert!(replica.host_replica_set.is_some());
        } else {
            assert!(replica.host.is_some());
            assert!(replica.host_replica_set.is_none());
        }
    }
});

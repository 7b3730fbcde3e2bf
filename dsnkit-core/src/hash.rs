//! Fixed-length digests for shortening identifiers.

use sha2::{Digest, Sha256};

/// Hash `input` into exactly `length` lowercase hex characters.
///
/// The first 64 characters are the SHA-256 of the input. Longer outputs keep
/// appending the SHA-256 of the previous block.
///
/// ```rust
/// use dsnkit_core::hash;
///
/// let short = hash("alias_column", 5);
/// assert_eq!(short.len(), 5);
/// assert_eq!(short, hash("alias_column", 5));
/// ```
pub fn hash(input: &str, length: usize) -> String {
    let mut out = String::with_capacity(length);
    let mut block = Sha256::digest(input.as_bytes());

    loop {
        let encoded = hex::encode(&block);
        let take = (length - out.len()).min(encoded.len());
        out.push_str(&encoded[..take]);
        if out.len() == length {
            return out;
        }
        block = Sha256::digest(&block);
    }
}

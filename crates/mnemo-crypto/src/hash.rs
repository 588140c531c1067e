//! SHA-256 hashing and BIP-39 checksum extraction.
//!
//! The checksum of an entropy value is the leading `entropy_bits / 32`
//! bits of its SHA-256 digest: 4 bits for 128-bit entropy up to 8 bits
//! for 256-bit entropy, so it always fits in a single byte.

use sha2::{Digest, Sha256};

/// Computes the SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&result);
    out
}

/// Returns the number of checksum bits for an entropy of `entropy_bits`.
pub fn checksum_len(entropy_bits: usize) -> usize {
    entropy_bits / 32
}

/// Returns the BIP-39 checksum of `entropy`, right-aligned in a byte.
///
/// For 128-bit entropy this is the top 4 bits of the digest's first byte,
/// shifted down, so the result ranges over `0..16`.
///
/// Accepts slices of any length, not only BIP-39 entropy sizes: inputs
/// shorter than 4 bytes have an empty checksum (`0`), and the width is
/// capped at 8 bits for inputs longer than 32 bytes.
pub fn checksum(entropy: &[u8]) -> u8 {
    let cs_len = checksum_len(entropy.len() * 8).min(8);
    if cs_len == 0 {
        return 0;
    }
    sha256(entropy)[0] >> (8 - cs_len)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

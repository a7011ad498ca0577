//! An implementation of the [SHA-256][1] cryptographic hash function for messages held entirely
//! in memory.
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-2

#![deny(clippy::all, clippy::perf, clippy::correctness)]
#![allow(clippy::unreadable_literal)]

pub mod compress;
pub mod consts;
pub mod padding;
pub mod schedule;
mod sha256;
pub mod sha256_utils;

pub use consts::DIGEST_LEN;
pub use padding::{Block, Chunker};
pub use sha256::Sha256;

/// Computes the SHA-256 digest of `data`.
#[inline]
pub fn hash(data: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::digest(data)
}

#[cfg(test)]
pub(crate) const TEST_SEED: [u8; 16] = [
    0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc, 0xe5,
];

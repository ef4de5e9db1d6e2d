// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../readme.md")]
#![deny(clippy::all)]
#![warn(clippy::cargo)]
#![deny(clippy::pedantic)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

/// Digest formatting and parsing
pub mod digest;

/// Text encodings for hashing strings
pub mod encoding;

/// `MurmurHash3` x86, 32-bit
pub mod murmur3;

/// Built-in reference vectors
pub mod selftest;

pub use digest::{Digest, DigestError};
pub use encoding::{hash_str, Encoding};
pub use murmur3::hash32;

/// Crate version with git sha and build date
pub const VERSION: &str = concat!(
    "v",
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("VERGEN_BUILD_DATE")
);

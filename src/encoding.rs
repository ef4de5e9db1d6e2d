// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::murmur3::hash32;

/// Byte encoding applied to text before it is hashed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8, the bytes of a Rust `str` as-is
    #[default]
    Utf8,
    /// UTF-16 code units written little-endian, no byte order mark
    Utf16Le,
}

impl Encoding {
    /// Encode `value` into the bytes that get hashed
    #[must_use]
    pub fn encode(self, value: &str) -> Vec<u8> {
        match self {
            Encoding::Utf8 => value.as_bytes().to_vec(),
            Encoding::Utf16Le => value.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }

    /// Canonical lowercase name, also accepted by [`Encoding::from_str`]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Utf16Le => "utf16le",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "utf16le" | "utf-16le" | "utf16" | "utf-16" => Ok(Encoding::Utf16Le),
            _ => Err(format!("Unknown encoding: {s}")),
        }
    }
}

/// Hash a string after encoding it with `encoding`
#[must_use]
pub fn hash_str(value: &str, encoding: Encoding, seed: u32) -> u32 {
    match encoding {
        // No need to copy when the string bytes are already what we hash
        Encoding::Utf8 => hash32(value.as_bytes(), seed),
        Encoding::Utf16Le => hash32(&encoding.encode(value), seed),
    }
}

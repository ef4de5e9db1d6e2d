// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::num::ParseIntError;

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

/// Errors from parsing a textual digest
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigestError {
    /// The Base64 text could not be decoded
    #[error("Base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not a single 32-bit value
    #[error("expected 4 digest bytes, found {0}")]
    Length(usize),

    /// The hex text contains something other than hex digits
    #[error("invalid hex digest: {0:?}")]
    NotHex(String),

    /// The hex text is not a 32-bit number
    #[error("invalid hex digest: {0}")]
    Hex(#[from] ParseIntError),
}

/// A 32-bit Murmur3 hash value with its textual forms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub u32);

impl Digest {
    /// The hash as little-endian bytes
    #[must_use]
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Base64 (standard alphabet) of the little-endian bytes
    #[must_use]
    pub fn to_base64(self) -> String {
        general_purpose::STANDARD.encode(self.to_bytes())
    }

    /// Parse the output of [`Digest::to_base64`]
    ///
    /// # Errors
    ///
    /// Fails if the text is not Base64 or does not decode to exactly 4 bytes.
    pub fn from_base64(b64: &str) -> Result<Self, DigestError> {
        let bytes = general_purpose::STANDARD.decode(b64.trim())?;
        let bytes: [u8; 4] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| DigestError::Length(bytes.len()))?;
        Ok(Self(u32::from_le_bytes(bytes)))
    }

    /// Parse a hex digest, with or without a `0x` prefix
    ///
    /// # Errors
    ///
    /// Fails if the text is not a hex number that fits in 32 bits.
    pub fn from_hex(hex: &str) -> Result<Self, DigestError> {
        let hex = hex.trim();
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        // from_str_radix would also take a leading sign
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DigestError::NotHex(hex.to_string()));
        }
        Ok(Self(u32::from_str_radix(digits, 16)?))
    }
}

impl From<u32> for Digest {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Digest> for u32 {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

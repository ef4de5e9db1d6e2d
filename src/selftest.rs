// SPDX-License-Identifier: Apache-2.0

use log::{debug, warn};

use crate::digest::Digest;
use crate::encoding::{hash_str, Encoding};

const FOX: &str = "The quick brown fox jumps over the lazy dog";

/// A fixed input with its expected hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownVector {
    /// Short name printed by the command-line tool
    pub label: &'static str,
    /// Text to hash
    pub input: &'static str,
    /// How `input` is turned into bytes
    pub encoding: Encoding,
    /// Seed passed to the hash
    pub seed: u32,
    /// Reference value
    pub expected: u32,
}

impl KnownVector {
    /// Hash this vector's input
    #[must_use]
    pub fn compute(&self) -> u32 {
        hash_str(self.input, self.encoding, self.seed)
    }
}

/// Vectors checked when the tool runs without input.
///
/// The ASCII value matches smhasher and murmurhash-js. The UTF-16 value was
/// pinned from a reference `MurmurHash3_x86_32` run over the 86 little-endian bytes.
pub const KNOWN_VECTORS: &[KnownVector] = &[
    KnownVector {
        label: "fox in ASCII",
        input: FOX,
        encoding: Encoding::Utf8,
        seed: 0,
        expected: 0x2e4f_f723,
    },
    KnownVector {
        label: "fox in UTF-16",
        input: FOX,
        encoding: Encoding::Utf16Le,
        seed: 0,
        expected: 0xe07d_b09c,
    },
    KnownVector {
        label: "empty with seed 1",
        input: "",
        encoding: Encoding::Utf8,
        seed: 1,
        expected: 0x514e_28b7,
    },
];

/// Result of checking one [`KnownVector`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The vector that was checked
    pub vector: KnownVector,
    /// What the hash actually produced
    pub actual: Digest,
}

impl Outcome {
    /// Whether the computed hash equals the reference value
    #[must_use]
    pub fn passed(&self) -> bool {
        self.actual.0 == self.vector.expected
    }
}

/// Outcomes of a self-test run, in vector order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfTestReport {
    /// One entry per vector
    pub outcomes: Vec<Outcome>,
}

impl SelfTestReport {
    /// True when every vector matched
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(Outcome::passed)
    }

    /// The vectors that did not match
    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

/// Check a set of vectors
#[must_use]
pub fn check(vectors: &[KnownVector]) -> SelfTestReport {
    let outcomes = vectors
        .iter()
        .map(|vector| {
            let actual = Digest(vector.compute());
            debug!(
                "self-test '{}': {} bytes as {}, seed {:#x} -> {actual}",
                vector.label,
                vector.encoding.encode(vector.input).len(),
                vector.encoding,
                vector.seed
            );
            let outcome = Outcome {
                vector: *vector,
                actual,
            };
            if !outcome.passed() {
                warn!(
                    "self-test '{}' mismatch: got {actual}, expected {:08x}",
                    vector.label, vector.expected
                );
            }
            outcome
        })
        .collect();

    SelfTestReport { outcomes }
}

/// Check the built-in [`KNOWN_VECTORS`]
#[must_use]
pub fn run() -> SelfTestReport {
    check(KNOWN_VECTORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_vectors_pass() {
        let report = run();
        assert_eq!(report.outcomes.len(), KNOWN_VECTORS.len());
        assert!(report.passed());
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn ascii_and_utf16_differ() {
        assert_ne!(KNOWN_VECTORS[0].expected, KNOWN_VECTORS[1].expected);
        assert_eq!(KNOWN_VECTORS[1].compute(), 0xe07d_b09c);
    }

    #[test]
    fn mismatch_is_reported() {
        let wrong = KnownVector {
            label: "wrong",
            input: "test",
            encoding: Encoding::Utf8,
            seed: 0,
            expected: 0,
        };
        let report = check(&[KNOWN_VECTORS[0], wrong]);
        assert!(!report.passed());

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].vector.label, "wrong");
        assert_eq!(failures[0].actual, Digest(0xba6b_d213));
    }

    #[test]
    fn empty_report_passes() {
        assert!(check(&[]).passed());
    }
}

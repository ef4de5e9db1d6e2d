// SPDX-License-Identifier: Apache-2.0

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;
const R1: u32 = 15;
const R2: u32 = 13;
const M: u32 = 5;
const N: u32 = 0xe654_6b64;

/// Scramble one little-endian block word before it is folded into the hash
#[inline]
const fn mix_k(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(R1).wrapping_mul(C2)
}

#[inline]
const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// `MurmurHash3` (x86, 32-bit) of a whole buffer with the given seed.
///
/// Blocks are always read as little-endian words, so the result is the same on
/// every host. The byte length is mixed into the finalizer, so `b"abc"` and
/// `b"abc\0"` hash differently.
///
/// Being a `const fn`, the hash of a fixed key can be computed at compile time:
///
/// ```
/// use malwaredb_murmur3::murmur3::hash32;
///
/// const TEST: u32 = hash32(b"test", 0);
/// assert_eq!(TEST, 0xba6b_d213);
/// ```
///
/// This is not a cryptographic hash and offers no collision resistance against
/// chosen input.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn hash32(data: &[u8], seed: u32) -> u32 {
    let len = data.len();
    let block_count = len / 4;
    let mut hash = seed;

    let mut i = 0;
    while i < block_count {
        let at = i * 4;
        let k = u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]);

        hash ^= mix_k(k);
        hash = hash.rotate_left(R2);
        hash = hash.wrapping_mul(M).wrapping_add(N);
        i += 1;
    }

    // Tail bytes only get the k-mix, never the rotate/multiply step
    let mut k = 0u32;
    let mut at = block_count * 4;
    let mut shift = 0u32;
    while at < len {
        k |= (data[at] as u32) << shift;
        shift += 8;
        at += 1;
    }
    if shift > 0 {
        hash ^= mix_k(k);
    }

    fmix32(hash ^ len as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

    #[test]
    fn fox_ascii() {
        assert_eq!(FOX.len(), 43);
        assert_eq!(hash32(FOX, 0), 0x2e4f_f723);
    }

    #[test]
    fn deterministic() {
        assert_eq!(hash32(FOX, 0), hash32(FOX, 0));
        assert_eq!(hash32(b"abracadabra", 42), hash32(b"abracadabra", 42));
    }

    #[test]
    fn empty_input_is_finalized_seed() {
        for seed in [0u32, 1, 0xdead_beef, u32::MAX] {
            assert_eq!(hash32(&[], seed), fmix32(seed));
        }
        assert_eq!(hash32(b"", 0), 0);
        assert_eq!(hash32(b"", 1), 0x514e_28b7);
        assert_eq!(hash32(b"", u32::MAX), 0x81f1_6f39);
    }

    #[test]
    fn seed_changes_result() {
        assert_eq!(hash32(FOX, 1), 0x78e6_9e27);
        assert_ne!(hash32(FOX, 0), hash32(FOX, 1));
        assert_eq!(hash32(b"Hello, world!", 0), 0xc036_3e43);
        assert_eq!(hash32(b"Hello, world!", 1234), 0xfaf6_cdb3);
    }

    #[test]
    fn length_is_mixed_in() {
        assert_eq!(hash32(b"abc", 0), 0xb3dd_93fa);
        assert_eq!(hash32(b"abc\0", 0), 0xa054_b4da);
        assert_ne!(hash32(b"abc", 0), hash32(b"abc\0", 0));
    }

    #[test]
    fn every_tail_length() {
        // 4k, 4k+1, 4k+2, 4k+3 with k = 1, then the next full block
        assert_eq!(hash32(b"abcd", 0), 0x43ed_676a);
        assert_eq!(hash32(b"abcde", 0), 0xe89b_9af6);
        assert_eq!(hash32(b"abcdef", 0), 0x6181_c085);
        assert_eq!(hash32(b"abcdefg", 0), 0x883c_9b06);
        assert_eq!(hash32(b"abcdefgh", 0), 0x49dd_ccc4);
    }

    #[test]
    fn short_inputs() {
        assert_eq!(hash32(b"a", 0), 0x3c25_69b2);
        assert_eq!(hash32(b"ab", 0), 0x9bbf_d75f);
        assert_eq!(hash32(b"test", 0), 0xba6b_d213);
        assert_eq!(hash32(&[0; 4], 0), 0x2362_f9de);
    }

    #[test]
    fn blocks_are_little_endian() {
        assert_eq!(hash32(b"1234", 0), 0x721c_5dc3);
        assert_eq!(hash32(b"12345678", 0), 0x91b3_13ce);
        assert_eq!(hash32(b"bacd", 0), 0xd911_89e8);
        assert_ne!(hash32(b"abcd", 0), hash32(b"bacd", 0));
    }

    #[test]
    fn usable_in_const_context() {
        const FOX_HASH: u32 = hash32(FOX, 0);
        assert_eq!(FOX_HASH, hash32(FOX, 0));
    }

    #[test]
    fn independent_threads_agree() {
        let handles: Vec<_> = (0..4u32)
            .map(|seed| std::thread::spawn(move || (seed, hash32(FOX, seed))))
            .collect();
        for handle in handles {
            let (seed, h) = handle.join().unwrap();
            assert_eq!(h, hash32(FOX, seed));
        }
    }
}

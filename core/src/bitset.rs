//! Fixed-width bitset over the country domain.
//!
//! Bit `b` of word `w` is set iff country code `w * 64 + b` is a member.
//! The serialized form is every word as 8 big-endian bytes, word 0 first.

use crate::constants::{BITSET_WORDS, ENCODED_LEN, WORD_BITS};
use crate::countries::Countries;
use crate::country::Country;
use crate::error::{CodecError, Result};

/// Membership table for a set of countries, one bit per code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CountryBitset(pub [u64; BITSET_WORDS]);

/// Word index and bit index holding `country`.
#[inline]
fn locate(country: Country) -> (usize, usize) {
    let code = country.code() as usize;
    (code / WORD_BITS, code % WORD_BITS)
}

impl CountryBitset {
    pub const fn empty() -> Self {
        CountryBitset([0; BITSET_WORDS])
    }

    pub const fn words(&self) -> [u64; BITSET_WORDS] {
        self.0
    }

    #[inline]
    pub fn insert(&mut self, country: Country) {
        let (word, bit) = locate(country);
        self.0[word] |= 1u64 << bit;
    }

    #[inline]
    pub fn contains(&self, country: Country) -> bool {
        let (word, bit) = locate(country);
        self.0[word] & (1u64 << bit) != 0
    }

    /// Number of set bits, including bits past the domain.
    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Expands the bitset into the codes it holds, in ascending order.
    ///
    /// Bits past the domain are kept as synthetic codes so that converting the
    /// result back reproduces this exact bitset.
    pub fn to_countries(&self) -> Countries {
        let mut countries = Vec::with_capacity(self.len());
        for (word_idx, &word) in self.0.iter().enumerate() {
            for bit in 0..WORD_BITS {
                if word & (1u64 << bit) != 0 {
                    countries.push(Country::from_bit_index(word_idx * WORD_BITS + bit));
                }
            }
        }
        Countries::from(countries)
    }

    pub fn to_be_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut buf = [0u8; ENCODED_LEN];
        for (chunk, word) in buf.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        buf
    }

    /// Parses the serialized form. Any length other than `ENCODED_LEN` is a
    /// format error; nothing is truncated or padded.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ENCODED_LEN {
            return Err(CodecError::Format {
                expected: ENCODED_LEN,
                actual: bytes.len(),
            });
        }

        let mut words = [0u64; BITSET_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            *word = u64::from_be_bytes(raw);
        }
        Ok(CountryBitset(words))
    }
}

impl From<[u64; BITSET_WORDS]> for CountryBitset {
    fn from(words: [u64; BITSET_WORDS]) -> Self {
        CountryBitset(words)
    }
}

impl FromIterator<Country> for CountryBitset {
    fn from_iter<I: IntoIterator<Item = Country>>(iter: I) -> Self {
        let mut bitset = CountryBitset::empty();
        for country in iter {
            bitset.insert(country);
        }
        bitset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BITSET_CAPACITY;

    #[test]
    fn test_insert_uses_word_and_bit_formula() {
        let mut bitset = CountryBitset::empty();
        bitset.insert(Country::AD); // 5
        bitset.insert(Country::FR); // 76
        bitset.insert(Country::NU); // 161
        bitset.insert(Country::ZW); // 245
        assert_eq!(bitset.words(), [1u64 << 5, 1u64 << 12, 1u64 << 33, 1u64 << 53]);
        assert!(bitset.contains(Country::FR));
        assert!(!bitset.contains(Country::AG));
        assert_eq!(bitset.len(), 4);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut bitset = CountryBitset::empty();
        bitset.insert(Country::FR);
        bitset.insert(Country::FR);
        assert_eq!(bitset.len(), 1);
    }

    #[test]
    fn test_to_countries_is_ascending() {
        let bitset = CountryBitset([1 << 9 | 1 << 5, 1 << 12, 0, 1 << 63]);
        let codes: Vec<u8> = bitset.to_countries().iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec![5, 9, 76, 255]);
    }

    #[test]
    fn test_all_ones_expands_to_full_capacity() {
        let bitset = CountryBitset([u64::MAX; BITSET_WORDS]);
        let countries = bitset.to_countries();
        assert_eq!(countries.len(), BITSET_CAPACITY);
        assert_eq!(countries.to_bitset(), bitset);
    }

    #[test]
    fn test_big_endian_layout() {
        let bitset = CountryBitset([1, 0x0102_0304_0506_0708, 0, u64::MAX]);
        let bytes = bitset.to_be_bytes();
        assert_eq!(&bytes[0..8], &[0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(&bytes[8..16], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&bytes[16..24], &[0; 8]);
        assert_eq!(&bytes[24..32], &[0xFF; 8]);
        assert_eq!(CountryBitset::from_be_bytes(&bytes), Ok(bitset));
    }

    #[test]
    fn test_from_be_bytes_rejects_wrong_length() {
        for len in [0usize, 1, 8, 31, 33, 64] {
            let bytes = vec![0u8; len];
            assert_eq!(
                CountryBitset::from_be_bytes(&bytes),
                Err(CodecError::Format {
                    expected: ENCODED_LEN,
                    actual: len
                })
            );
        }
    }
}

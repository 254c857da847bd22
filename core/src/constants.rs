//! Constants module - sizes of the country domain and its binary encodings

/// Number of valid country codes. Codes are dense, `0..COUNTRY_COUNT`.
pub const COUNTRY_COUNT: usize = 246;

/// Bits per bitset word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Words needed to cover the whole domain: `ceil(COUNTRY_COUNT / 64)`.
pub const BITSET_WORDS: usize = COUNTRY_COUNT.div_ceil(WORD_BITS);

/// Highest number of codes a bitset can hold (including codes past the domain).
pub const BITSET_CAPACITY: usize = BITSET_WORDS * WORD_BITS;

/// Length in bytes of a serialized bitset: each word as 8 big-endian bytes.
pub const ENCODED_LEN: usize = BITSET_WORDS * 8;

/// Display name used for codes without a table entry.
pub const UNKNOWN_COUNTRY_NAME: &str = "Unknown";

/// ISO code used for codes without a table entry.
pub const UNKNOWN_COUNTRY_ISO: &str = "??";

const _: () = assert!(BITSET_CAPACITY <= u8::MAX as usize + 1);
const _: () = assert!(ENCODED_LEN == 32);

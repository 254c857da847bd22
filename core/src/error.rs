//! Error types for the country codec.

use crate::constants::COUNTRY_COUNT;
use thiserror::Error;

/// Failures raised while building or decoding country sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A serialized buffer did not have the fixed encoded length.
    #[error("malformed country bitset: expected {expected} bytes, got {actual}")]
    Format { expected: usize, actual: usize },

    /// An integer was outside the valid country code range.
    #[error("country code {0} is outside the domain 0..{max}", max = COUNTRY_COUNT)]
    Domain(i64),
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

use crate::error::Result;

/// A value stored in a fixed-length binary column.
///
/// Storage adapters call `to_column_bytes` on write and `from_column_bytes`
/// on read. Implementations must always produce exactly `WIDTH` bytes and
/// must reject any other length on read.
pub trait FixedWidthColumn: Sized {
    /// Exact length of the column value in bytes.
    const WIDTH: usize;

    fn to_column_bytes(&self) -> Vec<u8>;

    fn from_column_bytes(bytes: &[u8]) -> Result<Self>;
}

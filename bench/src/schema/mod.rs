//! Schema definitions and the common `BenchSchema` trait.
//!
//! Two implementations are provided:
//! - [`bitset::BitsetSchema`] — country sets stored as 32-byte BLOBs
//! - [`json::JsonSchema`] — country sets stored as JSON text

pub mod bitset;
pub mod json;

use anyhow::Result;
use cs_core::{Countries, FixedWidthColumn};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::Connection;

/// Trait implemented by each storage variant (bitset vs JSON).
///
/// Row ids are assigned by SQLite and start at 1 after [`BenchSchema::clear`].
pub trait BenchSchema {
    /// Human-readable name for reports.
    fn name(&self) -> &'static str;

    /// Table holding the `(id, countries)` rows.
    fn table(&self) -> &'static str;

    /// Create the table if it does not exist.
    fn create_tables(&self, conn: &Connection) -> Result<()>;

    /// Drop and recreate the table so ids restart at 1.
    fn clear(&self, conn: &Connection) -> Result<()> {
        conn.execute_batch(&format!("DROP TABLE IF EXISTS {};", self.table()))?;
        self.create_tables(conn)
    }

    /// Insert one row per set, in order, inside a single transaction.
    fn write_rows(&self, conn: &Connection, rows: &[Countries]) -> Result<()>;

    /// Read back the set stored under `id`.
    fn read_row(&self, conn: &Connection, id: u64) -> Result<Countries>;

    /// Read every row, ordered by id.
    fn read_all(&self, conn: &Connection) -> Result<Vec<(u64, Countries)>>;

    fn row_count(&self, conn: &Connection) -> Result<u64> {
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", self.table()),
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}

/// Reads a [`FixedWidthColumn`] value out of a BLOB column.
///
/// Rejects non-BLOB values and BLOBs of any size other than `T::WIDTH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<T>(pub T);

impl<T> Column<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Writes a borrowed [`FixedWidthColumn`] value as a BLOB of exactly `T::WIDTH` bytes.
#[derive(Debug)]
pub struct ColumnRef<'a, T>(pub &'a T);

impl<T: FixedWidthColumn> ToSql for ColumnRef<'_, T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.to_column_bytes()))
    }
}

impl<T: FixedWidthColumn> FromSql for Column<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let bytes = value.as_blob()?;
        if bytes.len() != T::WIDTH {
            log::warn!(
                "rejecting column value of {} bytes (expected {})",
                bytes.len(),
                T::WIDTH
            );
            return Err(FromSqlError::InvalidBlobSize {
                expected_size: T::WIDTH,
                blob_size: bytes.len(),
            });
        }
        T::from_column_bytes(bytes)
            .map(Column)
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// Configure a connection for benchmarking.
pub fn configure_connection(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = OFF;
         PRAGMA cache_size = -131072;
         PRAGMA temp_store = MEMORY;",
    )?;
    Ok(())
}

/// Open the benchmark database: a file when `path` is given, otherwise in memory.
pub fn open_connection(path: Option<&std::path::Path>) -> Result<Connection> {
    let conn = match path {
        Some(path) => Connection::open(path)?,
        None => Connection::open_in_memory()?,
    };
    configure_connection(&conn)?;
    Ok(conn)
}

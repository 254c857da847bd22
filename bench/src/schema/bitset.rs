//! Bitset schema: each set stored as a fixed 32-byte BLOB.

use super::{BenchSchema, Column, ColumnRef};
use anyhow::{Context, Result};
use cs_core::constants::ENCODED_LEN;
use cs_core::Countries;
use rusqlite::{params, Connection};

pub struct BitsetSchema;

impl BitsetSchema {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BitsetSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchSchema for BitsetSchema {
    fn name(&self) -> &'static str {
        "bitset"
    }

    fn table(&self) -> &'static str {
        "countries_bitset"
    }

    fn create_tables(&self, conn: &Connection) -> Result<()> {
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS countries_bitset (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                countries BLOB NOT NULL CHECK (length(countries) = {ENCODED_LEN})
            );"
        ))?;
        Ok(())
    }

    fn write_rows(&self, conn: &Connection, rows: &[Countries]) -> Result<()> {
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt =
                tx.prepare_cached("INSERT INTO countries_bitset (countries) VALUES (?1)")?;
            for (i, countries) in rows.iter().enumerate() {
                stmt.execute(params![ColumnRef(countries)])?;
                log::trace!("bitset: wrote row {} ({} countries)", i + 1, countries.len());
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn read_row(&self, conn: &Connection, id: u64) -> Result<Countries> {
        let mut stmt =
            conn.prepare_cached("SELECT countries FROM countries_bitset WHERE id = ?1")?;
        let Column(countries) = stmt
            .query_row(params![id as i64], |row| row.get::<_, Column<Countries>>(0))
            .with_context(|| format!("reading bitset row {id}"))?;
        Ok(countries)
    }

    fn read_all(&self, conn: &Connection) -> Result<Vec<(u64, Countries)>> {
        let mut stmt =
            conn.prepare_cached("SELECT id, countries FROM countries_bitset ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)? as u64,
                row.get::<_, Column<Countries>>(1)?.into_inner(),
            ))
        })?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }
}

//! JSON schema: each set stored as a JSON array of country codes in a TEXT column.
//!
//! This is the structured-text baseline the bitset schema is measured against.

use super::BenchSchema;
use anyhow::{Context, Result};
use cs_core::Countries;
use rusqlite::{params, Connection};

pub struct JsonSchema;

impl JsonSchema {
    pub fn new() -> Self {
        Self
    }

    fn parse(id: u64, text: &str) -> Result<Countries> {
        serde_json::from_str(text).with_context(|| format!("decoding json row {id}"))
    }
}

impl Default for JsonSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchSchema for JsonSchema {
    fn name(&self) -> &'static str {
        "json"
    }

    fn table(&self) -> &'static str {
        "countries_json"
    }

    fn create_tables(&self, conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS countries_json (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                countries TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    fn write_rows(&self, conn: &Connection, rows: &[Countries]) -> Result<()> {
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt =
                tx.prepare_cached("INSERT INTO countries_json (countries) VALUES (?1)")?;
            for (i, countries) in rows.iter().enumerate() {
                let text = serde_json::to_string(countries)?;
                stmt.execute(params![text])?;
                log::trace!("json: wrote row {} ({} bytes)", i + 1, text.len());
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn read_row(&self, conn: &Connection, id: u64) -> Result<Countries> {
        let mut stmt =
            conn.prepare_cached("SELECT countries FROM countries_json WHERE id = ?1")?;
        let text: String = stmt
            .query_row(params![id as i64], |row| row.get(0))
            .with_context(|| format!("reading json row {id}"))?;
        Self::parse(id, &text)
    }

    fn read_all(&self, conn: &Connection) -> Result<Vec<(u64, Countries)>> {
        let mut stmt =
            conn.prepare_cached("SELECT id, countries FROM countries_json ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, i64>(0)? as u64, row.get::<_, String>(1)?))
        })?;
        let mut result = Vec::new();
        for row in rows {
            let (id, text) = row?;
            result.push((id, Self::parse(id, &text)?));
        }
        Ok(result)
    }
}

//! Write and read phases of the storage benchmark.
//!
//! Each iteration works on freshly generated data in a freshly cleared table,
//! and only the storage calls themselves are timed.

use crate::config::BenchConfig;
use crate::populate::generate_test_data;
use crate::schema::BenchSchema;
use crate::timer::Timer;
use anyhow::{bail, Result};
use cs_core::Countries;
use rand::rngs::StdRng;
use rusqlite::Connection;

/// Rows per write batch; progress is logged after each batch in verbose mode.
pub const PROGRESS_INTERVAL: usize = 10_000;

fn new_timer(schema: &dyn BenchSchema, config: &BenchConfig) -> Timer {
    let timer = Timer::new(schema.name());
    if config.verbose {
        timer
    } else {
        timer.set_silent()
    }
}

fn write_all(
    conn: &Connection,
    schema: &dyn BenchSchema,
    data: &[Countries],
    verbose: bool,
) -> Result<()> {
    let mut written = 0;
    for chunk in data.chunks(PROGRESS_INTERVAL) {
        schema.write_rows(conn, chunk)?;
        written += chunk.len();
        if verbose && written < data.len() {
            log::info!("\t{}: written {} rows", schema.name(), written);
        }
    }
    Ok(())
}

/// Times inserting `config.rows` random sets, `config.iterations` times.
pub fn bench_writes(
    conn: &Connection,
    schema: &dyn BenchSchema,
    config: &BenchConfig,
    rng: &mut StdRng,
) -> Result<Timer> {
    let mut timer = new_timer(schema, config);
    for iteration in 0..config.iterations {
        let data = generate_test_data(config.rows, rng);
        schema.clear(conn)?;
        timer.time_it(|| write_all(conn, schema, &data, config.verbose))?;
        log::debug!("{} write iteration {} done", schema.name(), iteration + 1);
    }
    Ok(timer)
}

/// Times reading every row back by id, `config.iterations` times. The table is
/// refilled (untimed) before each iteration and every decoded set is checked
/// against what was written.
pub fn bench_reads(
    conn: &Connection,
    schema: &dyn BenchSchema,
    config: &BenchConfig,
    rng: &mut StdRng,
) -> Result<Timer> {
    let mut timer = new_timer(schema, config);
    for iteration in 0..config.iterations {
        let data = generate_test_data(config.rows, rng);
        schema.clear(conn)?;
        write_all(conn, schema, &data, false)?;

        let read = timer.time_it(|| -> Result<Vec<Countries>> {
            (1..=data.len() as u64)
                .map(|id| schema.read_row(conn, id))
                .collect()
        })?;

        verify(schema, &data, &read)?;
        log::debug!("{} read iteration {} done", schema.name(), iteration + 1);
    }
    Ok(timer)
}

/// Times one `SELECT` over the whole table, `config.iterations` times. Same
/// untimed refill and verification as [`bench_reads`]; ids must come back as
/// `1..=rows` in order.
pub fn bench_scans(
    conn: &Connection,
    schema: &dyn BenchSchema,
    config: &BenchConfig,
    rng: &mut StdRng,
) -> Result<Timer> {
    let mut timer = new_timer(schema, config);
    for iteration in 0..config.iterations {
        let data = generate_test_data(config.rows, rng);
        schema.clear(conn)?;
        write_all(conn, schema, &data, false)?;

        let rows = timer.time_it(|| schema.read_all(conn))?;

        let mut read = Vec::with_capacity(rows.len());
        for (expected_id, (id, countries)) in (1u64..).zip(rows) {
            if id != expected_id {
                bail!("{}: scan returned id {id}, expected {expected_id}", schema.name());
            }
            read.push(countries);
        }
        verify(schema, &data, &read)?;
        log::debug!("{} scan iteration {} done", schema.name(), iteration + 1);
    }
    Ok(timer)
}

/// Checks that every row read back holds the same countries that were written.
pub fn verify(schema: &dyn BenchSchema, written: &[Countries], read: &[Countries]) -> Result<()> {
    if written.len() != read.len() {
        bail!(
            "{}: wrote {} rows but read {}",
            schema.name(),
            written.len(),
            read.len()
        );
    }
    for (idx, (expected, actual)) in written.iter().zip(read).enumerate() {
        if expected != actual {
            bail!(
                "{}: row {} read back {:?}, expected {:?}",
                schema.name(),
                idx + 1,
                actual.distinct(),
                expected.distinct()
            );
        }
    }
    Ok(())
}

//! Standalone benchmark runner that prints the formatted report.
//!
//! Writes and reads back random country sets with both schemas and compares
//! the timings. Configuration comes from `BENCH_*` environment variables or a
//! `.env` file (see `config.rs`).
//!
//! Usage:
//!   cargo run --release
//!   BENCH_ROWS=10000 BENCH_ITERATIONS=10 cargo run --release

use anyhow::Result;
use countryset_bench::config::BenchConfig;
use countryset_bench::populate::rng_from_seed;
use countryset_bench::report::print_comparison;
use countryset_bench::runner::{bench_reads, bench_scans, bench_writes};
use countryset_bench::schema::bitset::BitsetSchema;
use countryset_bench::schema::json::JsonSchema;
use countryset_bench::schema::{open_connection, BenchSchema};
use countryset_bench::timer::Timer;
use std::process;

fn save_timings(config: &BenchConfig, phase: &str, timers: &[&Timer]) -> Result<()> {
    let Some(dir) = &config.timings_dir else {
        return Ok(());
    };
    std::fs::create_dir_all(dir)?;
    for timer in timers {
        timer.save(&dir.join(format!("{}-{}.txt", timer.name(), phase)))?;
    }
    Ok(())
}

fn run(config: &BenchConfig) -> Result<()> {
    let conn = open_connection(config.db_path.as_deref())?;
    let mut rng = rng_from_seed(config.seed);

    let json = JsonSchema::new();
    let bitset = BitsetSchema::new();
    let schemas: [&dyn BenchSchema; 2] = [&json, &bitset];
    for schema in schemas {
        schema.create_tables(&conn)?;
    }

    println!("Running country set storage benchmark...");
    println!("  Iterations:    {}", config.iterations);
    println!("  Rows/iter:     {}", config.rows);
    match &config.db_path {
        Some(path) => println!("  Database:      {}", path.display()),
        None => println!("  Database:      in-memory"),
    }

    // ── Writes ──────────────────────────────────────────────────────
    let mut write_timers = Vec::new();
    for schema in schemas {
        log::info!("Benchmarking {} writes...", schema.name());
        write_timers.push(bench_writes(&conn, schema, config, &mut rng)?);
    }
    let write_refs: Vec<&Timer> = write_timers.iter().collect();
    for timer in &write_refs {
        timer.echo();
    }
    print_comparison("JSON vs Bitset (Writing)", &write_refs);
    save_timings(config, "w", &write_refs)?;

    // ── Reads ───────────────────────────────────────────────────────
    let mut read_timers = Vec::new();
    for schema in schemas {
        log::info!("Benchmarking {} reads...", schema.name());
        read_timers.push(bench_reads(&conn, schema, config, &mut rng)?);
    }
    let read_refs: Vec<&Timer> = read_timers.iter().collect();
    for timer in &read_refs {
        timer.echo();
    }
    print_comparison("JSON vs Bitset (Reading)", &read_refs);
    save_timings(config, "r", &read_refs)?;

    // ── Full scans ──────────────────────────────────────────────────
    let mut scan_timers = Vec::new();
    for schema in schemas {
        log::info!("Benchmarking {} full-table scans...", schema.name());
        scan_timers.push(bench_scans(&conn, schema, config, &mut rng)?);
    }
    let scan_refs: Vec<&Timer> = scan_timers.iter().collect();
    for timer in &scan_refs {
        timer.echo();
    }
    print_comparison("JSON vs Bitset (Scanning)", &scan_refs);
    save_timings(config, "s", &scan_refs)?;

    Ok(())
}

fn main() {
    let config = BenchConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {e:#}. Exiting.");
        process::exit(1);
    });

    cs_core::initialize_logger(config.log_level, config.log_file.as_deref()).unwrap_or_else(
        |e| {
            eprintln!("Failed to initialize logger: {}. Exiting.", e);
            process::exit(1);
        },
    );

    if let Err(e) = run(&config) {
        log::error!("Benchmark failed: {e:#}");
        process::exit(1);
    }
}

//! Benchmark configuration read from the environment (and an optional `.env`).

use anyhow::{Context, Result};
use log::LevelFilter;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_ITERATIONS: usize = 30;
pub const DEFAULT_ROWS: usize = 1000;

#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Timed iterations per schema and phase.
    pub iterations: usize,
    /// Rows written and read back per iteration.
    pub rows: usize,
    /// SQLite database file; in-memory when `None`.
    pub db_path: Option<PathBuf>,
    /// Seed for test data generation; OS entropy when `None`.
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
    pub log_file: Option<String>,
    /// Directory that receives one timings file per timer.
    pub timings_dir: Option<PathBuf>,
    /// Print every measurement and log write progress.
    pub verbose: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            rows: DEFAULT_ROWS,
            db_path: None,
            seed: None,
            log_level: LevelFilter::Info,
            log_file: None,
            timings_dir: None,
            verbose: false,
        }
    }
}

impl BenchConfig {
    /// Loads `.env` if present, then reads the `BENCH_*` variables.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e).context("loading .env");
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unset or empty
    /// variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let config = Self {
            iterations: parse_var(&get, "BENCH_ITERATIONS")?.unwrap_or(defaults.iterations),
            rows: parse_var(&get, "BENCH_ROWS")?.unwrap_or(defaults.rows),
            db_path: get("BENCH_DB_PATH").map(PathBuf::from),
            seed: parse_var(&get, "BENCH_SEED")?,
            log_level: parse_var(&get, "BENCH_LOG_LEVEL")?.unwrap_or(defaults.log_level),
            log_file: get("BENCH_LOG_FILE"),
            timings_dir: get("BENCH_TIMINGS_DIR").map(PathBuf::from),
            verbose: parse_var(&get, "BENCH_VERBOSE")?.unwrap_or(defaults.verbose),
        };

        if config.iterations == 0 {
            anyhow::bail!("BENCH_ITERATIONS must be at least 1");
        }
        Ok(config)
    }
}

fn parse_var<T, G>(get: &G, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("invalid value {raw:?} for {key}: {e}")),
        None => Ok(None),
    }
}

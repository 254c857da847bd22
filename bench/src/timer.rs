//! Wall-clock timer that accumulates one duration per measured call.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Timer {
    name: String,
    durations: Vec<Duration>,
    silent: bool,
}

impl Timer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            durations: Vec::new(),
            silent: false,
        }
    }

    /// Stops `time_it` from logging every measurement.
    pub fn set_silent(mut self) -> Self {
        self.silent = true;
        self
    }

    /// Runs `f` and records how long it took.
    pub fn time_it<R>(&mut self, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();
        self.record(elapsed);
        if !self.silent {
            log::info!("{} time taken: {:?}", self.name, elapsed);
        }
        result
    }

    pub fn record(&mut self, duration: Duration) {
        self.durations.push(duration);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn durations(&self) -> &[Duration] {
        &self.durations
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Durations in whole milliseconds, joined by `", "`.
    pub fn format_timings(&self) -> String {
        self.durations
            .iter()
            .map(|d| d.as_millis().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Prints the recorded timings to stdout.
    pub fn echo(&self) {
        println!("{} timings:", self.name);
        println!("{}", self.format_timings());
    }

    /// Appends the recorded durations to `path`, one value in milliseconds per line.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .with_context(|| format!("opening timings file {}", path.display()))?;
        for duration in &self.durations {
            writeln!(file, "{}", duration.as_millis())?;
        }
        log::info!("saved {} {} timings to {}", self.len(), self.name, path.display());
        Ok(())
    }
}

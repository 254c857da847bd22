//! Report module: prints a human-readable comparison of timers.

use crate::timer::Timer;
use std::time::Duration;

/// Summary statistics over one timer's samples.
#[derive(Debug, Clone)]
pub struct Summary {
    pub name: String,
    pub samples: usize,
    pub mean_us: f64,
    pub min_us: f64,
    pub max_us: f64,
    pub p50_us: f64,
    pub p95_us: f64,
}

fn as_us(d: &Duration) -> f64 {
    d.as_secs_f64() * 1e6
}

impl Summary {
    pub fn from_timer(timer: &Timer) -> Self {
        let mut sorted: Vec<f64> = timer.durations().iter().map(as_us).collect();
        sorted.sort_by(f64::total_cmp);

        let mean_us = if sorted.is_empty() {
            0.0
        } else {
            sorted.iter().sum::<f64>() / sorted.len() as f64
        };

        Self {
            name: timer.name().to_string(),
            samples: sorted.len(),
            mean_us,
            min_us: sorted.first().copied().unwrap_or(0.0),
            max_us: sorted.last().copied().unwrap_or(0.0),
            p50_us: percentile(&sorted, 50.0),
            p95_us: percentile(&sorted, 95.0),
        }
    }

    /// How many times slower this summary's mean is than `baseline`'s.
    pub fn ratio_to(&self, baseline: &Summary) -> f64 {
        if baseline.mean_us <= 0.0 {
            return 0.0;
        }
        self.mean_us / baseline.mean_us
    }
}

/// Nearest-rank percentile over already sorted samples.
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((pct / 100.0) * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Print a formatted table comparing timers. Ratios are relative to the first timer.
pub fn print_comparison(title: &str, timers: &[&Timer]) {
    let summaries: Vec<Summary> = timers.iter().map(|t| Summary::from_timer(t)).collect();

    println!("\n{}", "=".repeat(80));
    println!("  {title}");
    println!("{}", "=".repeat(80));
    println!(
        "  {:12} {:>8} {:>12} {:>12} {:>12} {:>12} {:>8}",
        "Encoding", "Samples", "Mean (ms)", "p50 (ms)", "p95 (ms)", "Max (ms)", "Ratio"
    );
    println!("  {}", "-".repeat(78));

    let baseline = summaries.first().cloned();
    for s in &summaries {
        let ratio = baseline.as_ref().map_or(0.0, |b| s.ratio_to(b));
        println!(
            "  {:12} {:>8} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>7.2}x",
            s.name,
            s.samples,
            s.mean_us / 1000.0,
            s.p50_us / 1000.0,
            s.p95_us / 1000.0,
            s.max_us / 1000.0,
            ratio,
        );
    }

    println!();
}

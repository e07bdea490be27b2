//! Benchmark command
//!
//! Runs the solver against many secrets and summarizes how many guesses it
//! needed. Every secret gets its own solver, so secrets run in parallel.

use super::solve::{SolveConfig, solve_code};
use crate::core::{Code, EngineError, GameConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// How many of the hardest secrets to keep
const HARDEST_KEPT: usize = 10;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub hardest: Vec<(Code, usize)>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Solve every secret in `secrets` and collect statistics
///
/// # Errors
///
/// Returns the first engine error raised while solving, e.g. a secret that
/// does not fit `config`.
pub fn run_benchmark(
    config: &GameConfig,
    secrets: &[Code],
    show_progress: bool,
) -> Result<BenchmarkResult, EngineError> {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let results: Vec<(Code, usize)> = secrets
        .par_iter()
        .map(|secret| -> Result<(Code, usize), EngineError> {
            let result = solve_code(SolveConfig::new(secret.clone()), config)?;
            pb.inc(1);
            Ok((secret.clone(), result.guesses.len()))
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_codes = results.len();
    let total_guesses: usize = results.iter().map(|(_, n)| n).sum();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for &(_, guesses) in &results {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let mut hardest = results.clone();
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(HARDEST_KEPT);

    let average_guesses = if total_codes > 0 {
        total_guesses as f64 / total_codes as f64
    } else {
        0.0
    };

    info!(
        total_codes,
        average_guesses,
        elapsed_ms = duration.as_millis() as u64,
        "benchmark finished"
    );

    Ok(BenchmarkResult {
        total_codes,
        total_guesses,
        average_guesses,
        min_guesses: results.iter().map(|(_, n)| *n).min().unwrap_or(0),
        max_guesses: results.iter().map(|(_, n)| *n).max().unwrap_or(0),
        distribution,
        hardest,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

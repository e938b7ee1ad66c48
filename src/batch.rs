//! Exhaustive autoplay over a whole dictionary.
//!
//! Every word takes a turn as the hidden solution. Games share nothing but the
//! read-only dictionary, so they run on the rayon pool.

use std::fmt;
use std::time::Instant;

use rayon::prelude::*;

use crate::error::Result;
use crate::game_state::{GameConfig, GameRecord, Outcome, Simulator};

/// One line of the per-word log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub index: usize,
    pub record: GameRecord,
}

impl fmt::Display for BatchEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path: Vec<&str> = self.record.guesses.iter().map(|(g, _)| g.as_str()).collect();
        match &self.record.outcome {
            Outcome::Solved { turns } => write!(
                f,
                "{:>5} {} solved in {}: {}",
                self.index,
                self.record.solution,
                turns,
                path.join(" ")
            ),
            Outcome::Failed { residual, .. } => write!(
                f,
                "{:>5} {} FAILED: {} (left: {})",
                self.index,
                self.record.solution,
                path.join(" "),
                residual.join(" ")
            ),
            Outcome::NoCandidates { .. } => write!(
                f,
                "{:>5} {} FAILED: {} (no candidates left)",
                self.index,
                self.record.solution,
                path.join(" ")
            ),
            Outcome::Aborted => write!(f, "{:>5} {} aborted", self.index, self.record.solution),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    entries: Vec<BatchEntry>,
    /// `histogram[n - 1]` counts the words solved in `n` guesses.
    histogram: Vec<usize>,
    failures: usize,
}

impl BatchReport {
    pub fn from_entries(entries: Vec<BatchEntry>, max_turns: usize) -> Self {
        let mut histogram = vec![0; max_turns];
        let mut failures = 0;
        for entry in &entries {
            match entry.record.outcome.solved_in() {
                Some(turns) if (1..=max_turns).contains(&turns) => histogram[turns - 1] += 1,
                _ => failures += 1,
            }
        }
        Self {
            entries,
            histogram,
            failures,
        }
    }

    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    pub fn histogram(&self) -> &[usize] {
        &self.histogram
    }

    /// Words solved in exactly `turns` guesses.
    pub fn solved_in(&self, turns: usize) -> usize {
        turns
            .checked_sub(1)
            .and_then(|i| self.histogram.get(i))
            .copied()
            .unwrap_or(0)
    }

    pub fn solved(&self) -> usize {
        self.histogram.iter().sum()
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Games played; always the dictionary size.
    pub fn total(&self) -> usize {
        self.solved() + self.failures
    }

    /// Mean guesses over solved games only.
    pub fn mean_turns(&self) -> Option<f64> {
        let solved = self.solved();
        if solved == 0 {
            return None;
        }
        let guesses: usize = self.histogram.iter().enumerate().map(|(i, n)| (i + 1) * n).sum();
        Some(guesses as f64 / solved as f64)
    }

    pub fn failed_entries(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.record.outcome.solved_in().is_none())
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games played: {}", self.total())?;
        for (i, count) in self.histogram.iter().enumerate() {
            writeln!(f, "  {} guess{}: {}", i + 1, if i == 0 { "" } else { "es" }, count)?;
        }
        writeln!(f, "  failed:    {}", self.failures)?;
        match self.mean_turns() {
            Some(mean) => write!(f, "Average guesses (solved games): {mean:.4}"),
            None => write!(f, "Average guesses (solved games): n/a"),
        }
    }
}

/// Autoplay every word of `dictionary` as the solution.
///
/// `jobs` caps the number of worker threads; `None` uses rayon's global pool.
pub fn run_batch(dictionary: &[String], config: GameConfig, jobs: Option<usize>) -> Result<BatchReport> {
    let max_turns = config.max_turns;
    let simulator = Simulator::new(dictionary, config)?;
    log::info!(
        "batch over {} words, opening {}",
        dictionary.len(),
        simulator.opening().unwrap_or("-")
    );
    let started = Instant::now();

    let play_all = || -> Result<Vec<BatchEntry>> {
        dictionary
            .par_iter()
            .enumerate()
            .map(|(index, word)| simulator.play(word).map(|record| BatchEntry { index, record }))
            .collect()
    };
    let entries = match jobs {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(play_all)?,
        None => play_all()?,
    };

    let report = BatchReport::from_entries(entries, max_turns);
    log::info!(
        "batch finished in {:.2?}: {} solved, {} failed",
        started.elapsed(),
        report.solved(),
        report.failures()
    );
    Ok(report)
}

use anyhow::{Context, Result};
use colored::Colorize;
use monty_game::{ProportionTable, batch_rng, play_n_games, play_n_games_parallel};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// How a batch was executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Execution {
    /// One seeded stream shared by every trial, in order.
    Sequential,
    /// One stream per trial, spread over the rayon pool.
    Parallel,
}

/// Summary of one seeded batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRun {
    pub seed: u64,
    pub trials: usize,
    pub execution: Execution,
    pub table: ProportionTable,
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

pub struct BatchRunner {
    trials: usize,
    execution: Execution,
    verbose: bool,
}

impl BatchRunner {
    pub const fn new(trials: usize, execution: Execution, verbose: bool) -> Self {
        Self {
            trials,
            execution,
            verbose,
        }
    }

    /// Run one batch per seed, in seed order.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the batch, e.g. for zero trials.
    pub fn run_all(&self, seeds: &[u64]) -> Result<Vec<SeedRun>> {
        seeds.iter().map(|&seed| self.run_seed(seed)).collect()
    }

    /// Run a single seeded batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the batch.
    pub fn run_seed(&self, seed: u64) -> Result<SeedRun> {
        if self.verbose {
            println!(
                "🎲 Running {} trials (seed: {}, {:?})",
                self.trials.to_string().bright_white(),
                seed,
                self.execution
            );
        }

        let started = Instant::now();
        let batch = match self.execution {
            Execution::Sequential => play_n_games(self.trials, &mut batch_rng(seed)),
            Execution::Parallel => play_n_games_parallel(self.trials, seed),
        }
        .with_context(|| format!("batch for seed {seed} failed"))?;
        let duration = started.elapsed();

        log::debug!(
            "seed {seed}: {} results collected in {duration:?}",
            batch.results.len()
        );

        Ok(SeedRun {
            seed,
            trials: batch.trials,
            execution: self.execution,
            table: batch.table,
            duration,
        })
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

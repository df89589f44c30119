//! Batches of independent trials and their win/lose proportions.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::numbers::{ratio, round_hundredths};
use crate::outcome::Outcome;
use crate::rng::trial_rng;
use crate::strategy::Strategy;
use crate::trial::{TrialResult, play_game};

/// Trial count used when the caller does not choose one.
pub const DEFAULT_TRIALS: usize = 100;

/// Win/lose tallies and proportions for one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyRow {
    pub strategy: Strategy,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub lose_rate: f64,
}

impl StrategyRow {
    fn from_counts(strategy: Strategy, wins: usize, losses: usize) -> Self {
        let total = wins + losses;
        Self {
            strategy,
            wins,
            losses,
            win_rate: ratio(wins, total),
            lose_rate: ratio(losses, total),
        }
    }

    #[must_use]
    pub const fn games(&self) -> usize {
        self.wins + self.losses
    }

    #[must_use]
    pub const fn rate(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Win => self.win_rate,
            Outcome::Lose => self.lose_rate,
        }
    }
}

/// Proportion of each outcome per strategy; each row sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProportionTable {
    pub stay: StrategyRow,
    pub switch: StrategyRow,
}

impl ProportionTable {
    #[must_use]
    pub const fn row(&self, strategy: Strategy) -> &StrategyRow {
        match strategy {
            Strategy::Stay => &self.stay,
            Strategy::Switch => &self.switch,
        }
    }

    #[must_use]
    pub const fn rows(&self) -> [StrategyRow; 2] {
        [self.stay, self.switch]
    }

    #[must_use]
    pub const fn proportion(&self, strategy: Strategy, outcome: Outcome) -> f64 {
        self.row(strategy).rate(outcome)
    }

    /// Proportion rounded to two decimals for display.
    #[must_use]
    pub fn rounded(&self, strategy: Strategy, outcome: Outcome) -> f64 {
        round_hundredths(self.proportion(strategy, outcome))
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    stay_wins: usize,
    stay_losses: usize,
    switch_wins: usize,
    switch_losses: usize,
}

impl Tally {
    const fn ingest(mut self, result: &TrialResult) -> Self {
        match (result.strategy, result.outcome) {
            (Strategy::Stay, Outcome::Win) => self.stay_wins += 1,
            (Strategy::Stay, Outcome::Lose) => self.stay_losses += 1,
            (Strategy::Switch, Outcome::Win) => self.switch_wins += 1,
            (Strategy::Switch, Outcome::Lose) => self.switch_losses += 1,
        }
        self
    }

    fn finish(self) -> ProportionTable {
        ProportionTable {
            stay: StrategyRow::from_counts(Strategy::Stay, self.stay_wins, self.stay_losses),
            switch: StrategyRow::from_counts(
                Strategy::Switch,
                self.switch_wins,
                self.switch_losses,
            ),
        }
    }
}

/// Every trial result in generation order plus the derived proportions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub trials: usize,
    pub results: Vec<TrialResult>,
    pub table: ProportionTable,
}

impl BatchResult {
    fn from_pairs(pairs: Vec<[TrialResult; 2]>) -> Self {
        let trials = pairs.len();
        let results: Vec<TrialResult> = pairs.into_iter().flatten().collect();
        let table = results.iter().fold(Tally::default(), Tally::ingest).finish();
        log_table(trials, &table);
        Self {
            trials,
            results,
            table,
        }
    }

    /// Results for one strategy, in trial order.
    pub fn results_for(&self, strategy: Strategy) -> impl Iterator<Item = &TrialResult> + '_ {
        self.results
            .iter()
            .filter(move |result| result.strategy == strategy)
    }
}

fn log_table(trials: usize, table: &ProportionTable) {
    log::info!("batch of {trials} trials");
    for row in table.rows() {
        log::info!(
            "  {:<6} win {:.2}  lose {:.2}",
            row.strategy.label(),
            round_hundredths(row.win_rate),
            round_hundredths(row.lose_rate)
        );
    }
}

/// Run `trials` independent games drawing from one shared stream.
///
/// # Errors
///
/// Returns [`SimError::EmptyBatch`] when `trials` is zero.
pub fn play_n_games<R: Rng + ?Sized>(
    trials: usize,
    rng: &mut R,
) -> Result<BatchResult, SimError> {
    if trials == 0 {
        return Err(SimError::EmptyBatch);
    }
    let pairs = (0..trials)
        .map(|_| play_game(rng))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BatchResult::from_pairs(pairs))
}

/// Run `trials` games sequentially, trial `i` drawing from its own stream.
///
/// Produces the same batch as [`play_n_games_parallel`] for the same seed.
///
/// # Errors
///
/// Returns [`SimError::EmptyBatch`] when `trials` is zero.
pub fn play_n_games_seeded(trials: usize, seed: u64) -> Result<BatchResult, SimError> {
    if trials == 0 {
        return Err(SimError::EmptyBatch);
    }
    let pairs = (0..trials)
        .map(|index| play_game(&mut trial_rng(seed, trial_index(index))))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BatchResult::from_pairs(pairs))
}

/// Run `trials` games across the rayon pool, one stream per trial.
///
/// # Errors
///
/// Returns [`SimError::EmptyBatch`] when `trials` is zero.
pub fn play_n_games_parallel(trials: usize, seed: u64) -> Result<BatchResult, SimError> {
    if trials == 0 {
        return Err(SimError::EmptyBatch);
    }
    let pairs = (0..trials)
        .into_par_iter()
        .map(|index| play_game(&mut trial_rng(seed, trial_index(index))))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BatchResult::from_pairs(pairs))
}

fn trial_index(index: usize) -> u64 {
    u64::try_from(index).unwrap_or(u64::MAX)
}

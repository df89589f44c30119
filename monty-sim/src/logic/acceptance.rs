use anyhow::{Result, ensure};
use monty_game::{Outcome, Strategy};

use super::runner::SeedRun;

/// Long-run win rate each strategy should approach.
#[must_use]
pub const fn expected_win_rate(strategy: Strategy) -> f64 {
    match strategy {
        Strategy::Stay => 1.0 / 3.0,
        Strategy::Switch => 2.0 / 3.0,
    }
}

/// Check every run's win rates against the theoretical values.
///
/// # Errors
///
/// Returns an error naming the first seed and strategy outside `tolerance`.
pub fn validate_convergence(runs: &[SeedRun], tolerance: f64) -> Result<()> {
    ensure!(!runs.is_empty(), "no batches were run");
    for run in runs {
        for strategy in Strategy::ALL {
            let observed = run.table.proportion(strategy, Outcome::Win);
            let expected = expected_win_rate(strategy);
            ensure!(
                (observed - expected).abs() <= tolerance,
                "seed {} {strategy} win rate {observed:.4} outside {expected:.4} ± {tolerance}",
                run.seed
            );
        }
    }
    Ok(())
}

//! One full game played under both strategies.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::contestant::initial_pick;
use crate::door::DoorIndex;
use crate::error::SimError;
use crate::host::host_reveal;
use crate::outcome::{Outcome, evaluate};
use crate::setup::GameInstance;
use crate::strategy::{Strategy, resolve_final_pick};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrialResult {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

impl TrialResult {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.outcome, Outcome::Win)
    }
}

/// Everything that happened in one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub game: GameInstance,
    pub initial_pick: DoorIndex,
    pub revealed: DoorIndex,
    pub stay_pick: DoorIndex,
    pub switch_pick: DoorIndex,
    pub stay: TrialResult,
    pub switch: TrialResult,
}

impl TrialRecord {
    /// Stay result followed by switch result.
    #[must_use]
    pub const fn results(&self) -> [TrialResult; 2] {
        [self.stay, self.switch]
    }
}

/// Play one game: shuffle, pick, reveal, then resolve both strategies.
///
/// Draw order on `rng` is fixed: layout shuffle, first pick, host coin.
///
/// # Errors
///
/// Propagates [`SimError`] from strategy resolution, which a well-behaved
/// host never triggers.
pub fn play_trial<R: Rng + ?Sized>(rng: &mut R) -> Result<TrialRecord, SimError> {
    let game = GameInstance::shuffled(rng);
    let pick = initial_pick(rng);
    replay_trial(game, pick, rng)
}

/// Play a trial from a known layout and first pick. Only the host coin is drawn.
///
/// # Errors
///
/// See [`play_trial`].
pub fn replay_trial<R: Rng + ?Sized>(
    game: GameInstance,
    initial_pick: DoorIndex,
    rng: &mut R,
) -> Result<TrialRecord, SimError> {
    let revealed = host_reveal(&game, initial_pick, rng);
    let stay_pick = resolve_final_pick(Strategy::Stay, revealed, initial_pick)?;
    let switch_pick = resolve_final_pick(Strategy::Switch, revealed, initial_pick)?;
    let record = TrialRecord {
        game,
        initial_pick,
        revealed,
        stay_pick,
        switch_pick,
        stay: TrialResult {
            strategy: Strategy::Stay,
            outcome: evaluate(stay_pick, &game),
        },
        switch: TrialResult {
            strategy: Strategy::Switch,
            outcome: evaluate(switch_pick, &game),
        },
    };
    log::trace!(
        "trial: car {} pick {} reveal {} -> stay {} switch {}",
        game.car_door(),
        initial_pick,
        revealed,
        record.stay.outcome,
        record.switch.outcome
    );
    Ok(record)
}

/// Paired results for one game, stay first.
///
/// # Errors
///
/// See [`play_trial`].
pub fn play_game<R: Rng + ?Sized>(rng: &mut R) -> Result<[TrialResult; 2], SimError> {
    play_trial(rng).map(|record| record.results())
}

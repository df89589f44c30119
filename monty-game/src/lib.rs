//! Monty Hall Simulation Engine
//!
//! Platform-agnostic core logic for comparing the "stay" and "switch"
//! strategies of the Monty Hall puzzle. Every operation takes its random
//! source explicitly so batches are reproducible from a seed.

pub mod batch;
pub mod contestant;
pub mod door;
pub mod error;
pub mod host;
pub mod numbers;
pub mod outcome;
pub mod rng;
pub mod setup;
pub mod strategy;
pub mod trial;

// Re-export commonly used types
pub use batch::{
    BatchResult, DEFAULT_TRIALS, ProportionTable, StrategyRow, play_n_games,
    play_n_games_parallel, play_n_games_seeded,
};
pub use contestant::initial_pick;
pub use door::{DOOR_COUNT, DoorIndex, Prize};
pub use error::SimError;
pub use host::host_reveal;
pub use outcome::{Outcome, evaluate};
pub use rng::{CountingRng, DEFAULT_SEED, batch_rng, derive_stream_seed, trial_rng};
pub use setup::GameInstance;
pub use strategy::{Strategy, resolve_final_pick};
pub use trial::{TrialRecord, TrialResult, play_game, play_trial, replay_trial};

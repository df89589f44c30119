//! Error taxonomy for the simulation engine.

use thiserror::Error;

use crate::door::DoorIndex;

/// Errors raised when a caller hands the engine values that break its preconditions.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("door index must be 1, 2 or 3 (got {0})")]
    InvalidDoor(u8),
    #[error("a game needs exactly one car behind its doors (found {cars})")]
    InvalidLayout { cars: usize },
    #[error("revealed door {0} is the contestant's own pick")]
    RevealMatchesPick(DoorIndex),
    #[error("trial count must be positive")]
    EmptyBatch,
}

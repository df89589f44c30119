//! Stay or switch after the host opens a door.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::door::DoorIndex;
use crate::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Stay,
    Switch,
}

impl Strategy {
    /// Both strategies, in reporting order.
    pub const ALL: [Self; 2] = [Self::Stay, Self::Switch];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stay => "stay",
            Self::Switch => "switch",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final door under `strategy`, given the opened door and the first pick.
///
/// # Errors
///
/// Returns [`SimError::RevealMatchesPick`] when `revealed == initial`. The
/// host never opens the picked door, so this only fires on caller misuse;
/// it is checked for both strategies so the mistake cannot hide behind `Stay`.
pub fn resolve_final_pick(
    strategy: Strategy,
    revealed: DoorIndex,
    initial: DoorIndex,
) -> Result<DoorIndex, SimError> {
    let remaining = initial
        .third(revealed)
        .ok_or(SimError::RevealMatchesPick(revealed))?;
    Ok(match strategy {
        Strategy::Stay => initial,
        Strategy::Switch => remaining,
    })
}

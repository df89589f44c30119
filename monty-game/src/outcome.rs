//! Whether the final door hides the car.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::door::DoorIndex;
use crate::setup::GameInstance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub const ALL: [Self; 2] = [Self::Win, Self::Lose];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Open the final door: a car wins, a goat loses.
#[must_use]
pub const fn evaluate(final_pick: DoorIndex, game: &GameInstance) -> Outcome {
    if game.prize_at(final_pick).is_car() {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_door_wins_goat_doors_lose() {
        let game = GameInstance::with_car_behind(DoorIndex::THREE);
        assert_eq!(evaluate(DoorIndex::THREE, &game), Outcome::Win);
        assert_eq!(evaluate(DoorIndex::ONE, &game), Outcome::Lose);
        assert_eq!(evaluate(DoorIndex::TWO, &game), Outcome::Lose);
    }
}

//! Stage setup: where the car hides.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::door::{DOOR_COUNT, DoorIndex, Prize};
use crate::error::SimError;

/// The prize layout for one game. Exactly one door hides the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Prize; DOOR_COUNT]", into = "[Prize; DOOR_COUNT]")]
pub struct GameInstance {
    slots: [Prize; DOOR_COUNT],
}

impl GameInstance {
    /// Shuffle `{Car, Goat, Goat}` across the three doors.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut slots = [Prize::Car, Prize::Goat, Prize::Goat];
        slots.shuffle(rng);
        Self { slots }
    }

    /// Build a layout from explicit slots, e.g. for replays.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidLayout`] unless exactly one slot is a car.
    pub fn from_slots(slots: [Prize; DOOR_COUNT]) -> Result<Self, SimError> {
        let cars = slots.iter().filter(|prize| prize.is_car()).count();
        if cars != 1 {
            return Err(SimError::InvalidLayout { cars });
        }
        Ok(Self { slots })
    }

    /// Game with the car behind `door`.
    #[must_use]
    pub fn with_car_behind(door: DoorIndex) -> Self {
        let mut slots = [Prize::Goat; DOOR_COUNT];
        slots[door.slot()] = Prize::Car;
        Self { slots }
    }

    #[must_use]
    pub const fn prize_at(&self, door: DoorIndex) -> Prize {
        self.slots[door.slot()]
    }

    #[must_use]
    pub fn car_door(&self) -> DoorIndex {
        let slot = self
            .slots
            .iter()
            .position(|prize| prize.is_car())
            .unwrap_or_default();
        DoorIndex::from_slot(slot)
    }

    #[must_use]
    pub const fn slots(&self) -> &[Prize; DOOR_COUNT] {
        &self.slots
    }
}

impl TryFrom<[Prize; DOOR_COUNT]> for GameInstance {
    type Error = SimError;

    fn try_from(slots: [Prize; DOOR_COUNT]) -> Result<Self, Self::Error> {
        Self::from_slots(slots)
    }
}

impl From<GameInstance> for [Prize; DOOR_COUNT] {
    fn from(game: GameInstance) -> Self {
        game.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn shuffled_layouts_hold_one_car() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let game = GameInstance::shuffled(&mut rng);
            let cars = game.slots().iter().filter(|p| p.is_car()).count();
            assert_eq!(cars, 1);
            assert_eq!(game.prize_at(game.car_door()), Prize::Car);
        }
    }

    #[test]
    fn every_car_position_is_reachable() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut seen = [false; DOOR_COUNT];
        for _ in 0..200 {
            seen[GameInstance::shuffled(&mut rng).car_door().slot()] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn from_slots_validates_car_count() {
        assert_eq!(
            GameInstance::from_slots([Prize::Goat; 3]),
            Err(SimError::InvalidLayout { cars: 0 })
        );
        assert_eq!(
            GameInstance::from_slots([Prize::Car, Prize::Car, Prize::Goat]),
            Err(SimError::InvalidLayout { cars: 2 })
        );
        let game = GameInstance::from_slots([Prize::Goat, Prize::Car, Prize::Goat]).unwrap();
        assert_eq!(game, GameInstance::with_car_behind(DoorIndex::TWO));
    }

    #[test]
    fn deserialize_enforces_one_car() {
        let game = GameInstance::with_car_behind(DoorIndex::THREE);
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(json, r#"["Goat","Goat","Car"]"#);
        assert_eq!(serde_json::from_str::<GameInstance>(&json).unwrap(), game);

        let err = serde_json::from_str::<GameInstance>(r#"["Goat","Goat","Goat"]"#).unwrap_err();
        assert!(err.to_string().contains("exactly one car"));
        assert!(serde_json::from_str::<GameInstance>(r#"["Car","Car","Goat"]"#).is_err());
        assert!(
            serde_json::from_str::<GameInstance>(r#"{"slots":["Goat","Goat","Goat"]}"#).is_err()
        );
    }
}

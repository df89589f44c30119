//! Doors and the prizes hidden behind them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimError;

/// Number of doors on stage.
pub const DOOR_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prize {
    Car,
    Goat,
}

impl Prize {
    #[must_use]
    pub const fn is_car(self) -> bool {
        matches!(self, Self::Car)
    }
}

/// One-based door label. Only 1, 2 and 3 are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DoorIndex(u8);

impl DoorIndex {
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);

    /// Every door, in stage order.
    pub const ALL: [Self; DOOR_COUNT] = [Self::ONE, Self::TWO, Self::THREE];

    /// Validate a raw door number.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidDoor`] for anything outside `1..=3`.
    pub const fn new(value: u8) -> Result<Self, SimError> {
        match value {
            1..=3 => Ok(Self(value)),
            other => Err(SimError::InvalidDoor(other)),
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position of this door inside a slot array.
    #[must_use]
    pub const fn slot(self) -> usize {
        (self.0 - 1) as usize
    }

    pub(crate) const fn from_slot(slot: usize) -> Self {
        Self::ALL[slot]
    }

    /// The two doors other than `self`, in stage order.
    #[must_use]
    pub fn others(self) -> [Self; 2] {
        let mut out = [self; 2];
        let mut filled = 0;
        for door in Self::ALL {
            if door != self {
                out[filled] = door;
                filled += 1;
            }
        }
        out
    }

    /// The door that is neither `self` nor `other`, or `None` when both are the same door.
    #[must_use]
    pub const fn third(self, other: Self) -> Option<Self> {
        if self.0 == other.0 {
            return None;
        }
        // Labels sum to 6, so the missing one falls out directly.
        Some(Self(6 - self.0 - other.0))
    }
}

impl TryFrom<u8> for DoorIndex {
    type Error = SimError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DoorIndex> for u8 {
    fn from(door: DoorIndex) -> Self {
        door.0
    }
}

impl fmt::Display for DoorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_labels() {
        assert_eq!(DoorIndex::new(0), Err(SimError::InvalidDoor(0)));
        assert_eq!(DoorIndex::new(4), Err(SimError::InvalidDoor(4)));
        assert_eq!(DoorIndex::new(2).map(DoorIndex::get), Ok(2));
    }

    #[test]
    fn third_door_is_unique() {
        for a in DoorIndex::ALL {
            assert_eq!(a.third(a), None);
            for b in a.others() {
                let c = a.third(b).expect("distinct doors");
                assert_ne!(c, a);
                assert_ne!(c, b);
            }
        }
    }

    #[test]
    fn others_skips_self() {
        assert_eq!(DoorIndex::TWO.others(), [DoorIndex::ONE, DoorIndex::THREE]);
    }

    #[test]
    fn serde_rejects_bad_door() {
        let ok: DoorIndex = serde_json::from_str("3").unwrap();
        assert_eq!(ok, DoorIndex::THREE);
        assert!(serde_json::from_str::<DoorIndex>("7").is_err());
    }
}

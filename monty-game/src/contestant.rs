//! The contestant's first guess.

use rand::Rng;

use crate::door::{DOOR_COUNT, DoorIndex};

/// Pick a door uniformly at random.
pub fn initial_pick<R: Rng + ?Sized>(rng: &mut R) -> DoorIndex {
    DoorIndex::from_slot(rng.gen_range(0..DOOR_COUNT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn picks_cover_every_door() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut counts = [0usize; DOOR_COUNT];
        for _ in 0..3000 {
            counts[initial_pick(&mut rng).slot()] += 1;
        }
        for count in counts {
            assert!((850..=1150).contains(&count), "skewed pick counts {counts:?}");
        }
    }
}

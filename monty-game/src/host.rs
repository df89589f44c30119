//! The host opens a door that hides a goat and was not picked.

use rand::Rng;

use crate::door::DoorIndex;
use crate::setup::GameInstance;

/// Choose the door the host opens after the contestant's first pick.
///
/// When the pick hides the car both other doors hide goats and the host
/// chooses between them with a fair coin. The coin is flipped even though
/// it cannot change either strategy's outcome, so a seeded stream is consumed
/// identically for every layout with the car under the pick. When the pick
/// hides a goat the host has exactly one legal door and draws nothing.
pub fn host_reveal<R: Rng + ?Sized>(
    game: &GameInstance,
    pick: DoorIndex,
    rng: &mut R,
) -> DoorIndex {
    let [first, second] = pick.others();
    if game.prize_at(pick).is_car() {
        let revealed = if rng.gen_bool(0.5) { first } else { second };
        log::trace!("host coin flip: pick {pick} hides the car, opening {revealed}");
        return revealed;
    }
    if game.prize_at(first).is_car() {
        second
    } else {
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::door::Prize;
    use crate::rng::CountingRng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn goat_pick_forces_the_other_goat() {
        let game = GameInstance::from_slots([Prize::Goat, Prize::Car, Prize::Goat]).unwrap();
        let mut rng = CountingRng::new(SmallRng::seed_from_u64(1));
        assert_eq!(host_reveal(&game, DoorIndex::ONE, &mut rng), DoorIndex::THREE);
        assert_eq!(host_reveal(&game, DoorIndex::THREE, &mut rng), DoorIndex::ONE);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn car_pick_flips_a_coin_between_goats() {
        let game = GameInstance::with_car_behind(DoorIndex::ONE);
        let mut rng = CountingRng::new(SmallRng::seed_from_u64(2));
        let mut opened_two = 0usize;
        let rounds = 2000;
        for _ in 0..rounds {
            let revealed = host_reveal(&game, DoorIndex::ONE, &mut rng);
            assert!(revealed == DoorIndex::TWO || revealed == DoorIndex::THREE);
            if revealed == DoorIndex::TWO {
                opened_two += 1;
            }
        }
        assert_eq!(rng.draws(), rounds);
        assert!((900..=1100).contains(&opened_two), "biased coin: {opened_two}");
    }

    #[test]
    fn reveal_never_hits_pick_or_car() {
        let mut rng = SmallRng::seed_from_u64(11);
        for car in DoorIndex::ALL {
            let game = GameInstance::with_car_behind(car);
            for pick in DoorIndex::ALL {
                for _ in 0..20 {
                    let revealed = host_reveal(&game, pick, &mut rng);
                    assert_ne!(revealed, pick);
                    assert_eq!(game.prize_at(revealed), Prize::Goat);
                }
            }
        }
    }
}

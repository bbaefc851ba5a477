//! Metabolism System
//!
//! Hourly aging and drift: hunger rises, happiness falls.

use crate::components::Pet;
use crate::config::SimConfig;
use crate::random::RandomSource;

/// Age the pet one hour and apply the random hunger/happiness drift.
///
/// Draws hunger rise first, then happiness decay.
pub fn metabolism_system<R: RandomSource + ?Sized>(pet: &mut Pet, config: &SimConfig, rng: &mut R) {
    pet.age_hours += 1;

    let rise = rng.next_in_range(config.hunger_rise.min, config.hunger_rise.max);
    pet.adjust_hunger(rise);

    let decay = rng.next_in_range(config.happiness_decay.min, config.happiness_decay.max);
    pet.adjust_happiness(-decay);
}

/// Extra happiness loss while the pet is too hungry.
/// Returns true when the penalty applied.
pub fn hunger_penalty_system(pet: &mut Pet, config: &SimConfig) -> bool {
    if pet.hunger > config.hunger_penalty_threshold {
        pet.adjust_happiness(-config.hunger_penalty);
        true
    } else {
        false
    }
}

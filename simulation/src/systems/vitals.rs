//! Vitals System
//!
//! Ends the game when hunger maxes out or happiness bottoms out.

use crate::components::{DeathCause, LifeState, Pet, MAX_LEVEL, MIN_LEVEL};

/// Check terminal conditions. Starvation is checked before sadness.
/// Returns the cause when the pet just reached game over.
pub fn vitals_system(pet: &mut Pet) -> Option<DeathCause> {
    if !pet.is_alive() {
        return None;
    }

    let cause = if pet.hunger >= MAX_LEVEL {
        DeathCause::Starved
    } else if pet.happiness <= MIN_LEVEL {
        DeathCause::TooSad
    } else {
        return None;
    };

    pet.state = LifeState::GameOver(cause);
    tracing::info!(pet = %pet.name, ?cause, age_hours = pet.age_hours, "game over");
    Some(cause)
}

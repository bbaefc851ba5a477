//! Random Event System
//!
//! Each hour there is a chance that something happens to the pet.

use serde::Serialize;
use std::fmt;

use crate::components::Pet;
use crate::config::SimConfig;
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RandomEvent {
    pub name: &'static str,
    pub hunger_delta: i32,
    pub happiness_delta: i32,
}

impl fmt::Display for RandomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Event table, selected uniformly when an event fires.
pub const RANDOM_EVENTS: &[RandomEvent] = &[
    RandomEvent { name: "Found a snack", hunger_delta: -10, happiness_delta: 0 },
    RandomEvent { name: "Found a toy", hunger_delta: 0, happiness_delta: 10 },
    RandomEvent { name: "Got sick", hunger_delta: 15, happiness_delta: -10 },
    RandomEvent { name: "Took a nap", hunger_delta: -5, happiness_delta: 5 },
];

/// Roll for a random event and apply it.
/// Returns the event that fired, if any.
pub fn random_event_system<R: RandomSource + ?Sized>(
    pet: &mut Pet,
    config: &SimConfig,
    rng: &mut R,
) -> Option<RandomEvent> {
    if rng.next_fraction() >= config.event_probability {
        return None;
    }

    let last = RANDOM_EVENTS.len() as i32 - 1;
    let index = rng.next_in_range(0, last) as usize;
    let event = RANDOM_EVENTS[index];

    pet.adjust_hunger(event.hunger_delta);
    pet.adjust_happiness(event.happiness_delta);
    tracing::debug!(pet = %pet.name, event = event.name, "random event");

    Some(event)
}

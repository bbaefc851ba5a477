//! Pet simulator - care actions and the hourly tick

use serde::Serialize;

use crate::components::{DeathCause, Pet};
use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::random::RandomSource;
use crate::systems::{self, ActionOutcome, CareAction, RandomEvent};

/// Notification raised while ticking. Purely observational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PetEvent {
    RandomEvent(RandomEvent),
    GameOver(DeathCause),
}

impl PetEvent {
    /// Human-readable line for the given pet.
    pub fn describe(&self, pet_name: &str) -> String {
        match self {
            PetEvent::RandomEvent(event) => format!("[Random event] {pet_name}: {event}"),
            PetEvent::GameOver(DeathCause::Starved) => {
                format!("{pet_name} became too hungry. Game over.")
            }
            PetEvent::GameOver(DeathCause::TooSad) => {
                format!("{pet_name} became too sad. Game over.")
            }
        }
    }
}

/// Result of advancing a pet's clock
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TickResult {
    /// Hours actually simulated; fewer than requested when the game ended.
    pub hours_elapsed: u32,
    pub events: Vec<PetEvent>,
}

impl TickResult {
    pub fn game_over(&self) -> Option<DeathCause> {
        self.events.iter().find_map(|event| match event {
            PetEvent::GameOver(cause) => Some(*cause),
            PetEvent::RandomEvent(_) => None,
        })
    }
}

impl Pet {
    pub fn apply(&mut self, action: CareAction) -> ActionOutcome {
        systems::care_system(self, action)
    }

    pub fn feed(&mut self) -> ActionOutcome {
        self.apply(CareAction::Feed)
    }

    pub fn play(&mut self) -> ActionOutcome {
        self.apply(CareAction::Play)
    }

    pub fn give_toy(&mut self) -> ActionOutcome {
        self.apply(CareAction::GiveToy)
    }

    pub fn give_medicine(&mut self) -> ActionOutcome {
        self.apply(CareAction::GiveMedicine)
    }

    /// Advance time by `hours`, one hour at a time.
    ///
    /// Each hour runs metabolism, a possible random event, the hunger
    /// penalty and the vitals check. Stops early once the game is over;
    /// ticking a pet that is already over is a no-op.
    pub fn tick<R: RandomSource + ?Sized>(
        &mut self,
        hours: u32,
        config: &SimConfig,
        rng: &mut R,
    ) -> SimResult<TickResult> {
        if hours < 1 {
            return Err(SimError::InvalidArgument(format!(
                "tick duration must be at least 1 hour, got {hours}"
            )));
        }

        let mut result = TickResult::default();

        for _ in 0..hours {
            if !self.is_alive() {
                break;
            }

            systems::metabolism_system(self, config, rng);
            if let Some(event) = systems::random_event_system(self, config, rng) {
                result.events.push(PetEvent::RandomEvent(event));
            }
            if systems::hunger_penalty_system(self, config) {
                tracing::debug!(pet = %self.name, hunger = self.hunger, "too hungry, extra happiness loss");
            }
            result.hours_elapsed += 1;

            tracing::debug!(
                pet = %self.name,
                age_hours = self.age_hours,
                hunger = self.hunger,
                happiness = self.happiness,
                "hour elapsed"
            );

            if let Some(cause) = systems::vitals_system(self) {
                result.events.push(PetEvent::GameOver(cause));
                break;
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::LifeState;
    use crate::random::{seeded_rng, ScriptedSource};

    /// R1 = 5, R2 = 3, never an event.
    fn quiet() -> ScriptedSource {
        ScriptedSource::new([5, 3], [0.9])
    }

    #[test]
    fn test_single_quiet_tick() {
        let mut pet = Pet::new("Rex");
        let result = pet.tick(1, &SimConfig::default(), &mut quiet()).unwrap();

        assert_eq!(result.hours_elapsed, 1);
        assert!(result.events.is_empty());
        assert_eq!((pet.hunger(), pet.happiness()), (55, 47));
        assert_eq!(pet.age_hours(), 1);
        assert!(pet.is_alive());
    }

    #[test]
    fn test_zero_hours_rejected() {
        let mut pet = Pet::new("Rex");
        let err = pet.tick(0, &SimConfig::default(), &mut quiet()).unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument(_)));
        assert_eq!(pet, Pet::new("Rex"));
    }

    #[test]
    fn test_starves_and_stays_dead() {
        let config = SimConfig::default();
        let mut pet = Pet::with_levels("Rex", 95, 50);
        let result = pet.tick(5, &config, &mut quiet()).unwrap();

        assert_eq!(result.hours_elapsed, 1);
        assert_eq!(result.game_over(), Some(DeathCause::Starved));
        assert_eq!(pet.hunger(), 100);
        assert_eq!(pet.state(), LifeState::GameOver(DeathCause::Starved));

        let frozen = pet.clone();
        let later = pet.tick(3, &config, &mut quiet()).unwrap();
        assert_eq!(later, TickResult::default());
        assert_eq!(pet.feed(), ActionOutcome::Ignored);
        assert_eq!(pet.play(), ActionOutcome::Ignored);
        assert_eq!(pet.give_toy(), ActionOutcome::Ignored);
        assert_eq!(pet.give_medicine(), ActionOutcome::Ignored);
        assert_eq!(pet, frozen);
    }

    #[test]
    fn test_dies_of_sadness() {
        let mut pet = Pet::with_levels("Rex", 20, 4);
        let mut rng = ScriptedSource::new([5, 4], [0.9]);
        let result = pet.tick(1, &SimConfig::default(), &mut rng).unwrap();

        assert_eq!(result.game_over(), Some(DeathCause::TooSad));
        assert_eq!(pet.happiness(), 0);
        assert!(!pet.is_alive());
    }

    #[test]
    fn test_hunger_penalty_before_terminal_check() {
        // 80 + 5 = 85 -> penalty: 50 - 3 - 5 = 42
        let mut pet = Pet::with_levels("Rex", 80, 50);
        pet.tick(1, &SimConfig::default(), &mut quiet()).unwrap();
        assert_eq!((pet.hunger(), pet.happiness()), (85, 42));

        // Penalty is what finishes the pet off this hour
        let mut fragile = Pet::with_levels("Rex", 80, 8);
        let result = fragile.tick(1, &SimConfig::default(), &mut quiet()).unwrap();
        assert_eq!(fragile.happiness(), 0);
        assert_eq!(result.game_over(), Some(DeathCause::TooSad));
    }

    #[test]
    fn test_largest_configured_rise_still_starves() {
        let config = SimConfig::from_json(r#"{"hunger_rise": {"min": 100, "max": 100}}"#).unwrap();
        let mut pet = Pet::with_levels("Rex", 95, 50);
        let result = pet.tick(1, &config, &mut quiet()).unwrap();

        assert_eq!(pet.hunger(), 100);
        assert_eq!(result.game_over(), Some(DeathCause::Starved));
    }

    #[test]
    fn test_event_applies_before_penalty() {
        // "Found a snack" takes 78 + 5 = 83 down to 73, so no penalty
        let mut pet = Pet::with_levels("Rex", 78, 50);
        let mut rng = ScriptedSource::new([5, 3, 0], [0.1]);
        let result = pet.tick(1, &SimConfig::default(), &mut rng).unwrap();

        assert_eq!(result.events, vec![PetEvent::RandomEvent(systems::RANDOM_EVENTS[0])]);
        assert_eq!((pet.hunger(), pet.happiness()), (73, 47));
    }

    #[test]
    fn test_age_advances_until_terminal() {
        let config = SimConfig::default();
        let mut pet = Pet::new("Rex");
        pet.tick(4, &config, &mut quiet()).unwrap();
        assert_eq!(pet.age_hours(), 4);

        // 50 -> 100 in ten hours at +5/hour
        let mut doomed = Pet::new("Rex");
        let result = doomed.tick(24, &config, &mut quiet()).unwrap();
        assert_eq!(result.hours_elapsed, 10);
        assert_eq!(doomed.age_hours(), 10);
        assert!(!doomed.is_alive());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimConfig::default();
        let mut a = Pet::new("Rex");
        let mut b = Pet::new("Rex");
        let ra = a.tick(12, &config, &mut seeded_rng(Some(99))).unwrap();
        let rb = b.tick(12, &config, &mut seeded_rng(Some(99))).unwrap();
        assert_eq!(a, b);
        assert_eq!(ra, rb);
    }

    #[test]
    fn test_describe_events() {
        let snack = PetEvent::RandomEvent(systems::RANDOM_EVENTS[0]);
        assert_eq!(snack.describe("Rex"), "[Random event] Rex: Found a snack");
        assert_eq!(
            PetEvent::GameOver(DeathCause::Starved).describe("Rex"),
            "Rex became too hungry. Game over."
        );
        assert_eq!(
            PetEvent::GameOver(DeathCause::TooSad).describe("Rex"),
            "Rex became too sad. Game over."
        );
    }
}

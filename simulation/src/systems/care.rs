//! Care System
//!
//! Player-driven actions. Each action shifts hunger and happiness by a
//! fixed amount.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::Pet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareAction {
    Feed,
    Play,
    GiveToy,
    GiveMedicine,
}

impl CareAction {
    pub const ALL: [CareAction; 4] = [
        CareAction::Feed,
        CareAction::Play,
        CareAction::GiveToy,
        CareAction::GiveMedicine,
    ];

    /// `(hunger delta, happiness delta)`
    pub const fn deltas(self) -> (i32, i32) {
        match self {
            CareAction::Feed => (-15, -2),
            CareAction::Play => (6, 12),
            CareAction::GiveToy => (2, 8),
            CareAction::GiveMedicine => (-8, 3),
        }
    }
}

impl fmt::Display for CareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CareAction::Feed => "feed",
            CareAction::Play => "play",
            CareAction::GiveToy => "give toy",
            CareAction::GiveMedicine => "give medicine",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ActionOutcome {
    Applied,
    /// The pet's game is over; nothing changed.
    Ignored,
}

/// Apply a care action. Dead pets are left untouched.
pub fn care_system(pet: &mut Pet, action: CareAction) -> ActionOutcome {
    if !pet.is_alive() {
        tracing::warn!(pet = %pet.name, %action, "ignoring care action after game over");
        return ActionOutcome::Ignored;
    }

    let (hunger, happiness) = action.deltas();
    pet.adjust_hunger(hunger);
    pet.adjust_happiness(happiness);
    ActionOutcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{DeathCause, LifeState};

    #[test]
    fn test_action_deltas() {
        for (action, hunger, happiness) in [
            (CareAction::Feed, 35, 48),
            (CareAction::Play, 56, 62),
            (CareAction::GiveToy, 52, 58),
            (CareAction::GiveMedicine, 42, 53),
        ] {
            let mut pet = Pet::new("Rex");
            assert_eq!(care_system(&mut pet, action), ActionOutcome::Applied);
            assert_eq!((pet.hunger(), pet.happiness()), (hunger, happiness), "{action}");
        }
    }

    #[test]
    fn test_feed_clamps_at_full() {
        let mut pet = Pet::with_levels("Rex", 10, 50);
        let _ = care_system(&mut pet, CareAction::Feed);
        assert_eq!(pet.hunger(), 0);
        assert_eq!(pet.happiness(), 48);
    }

    #[test]
    fn test_play_clamps_at_max() {
        let mut pet = Pet::with_levels("Rex", 97, 95);
        let _ = care_system(&mut pet, CareAction::Play);
        assert_eq!(pet.hunger(), 100);
        assert_eq!(pet.happiness(), 100);
    }

    #[test]
    fn test_dead_pet_ignores_care() {
        let mut pet = Pet::with_levels("Rex", 100, 20);
        pet.state = LifeState::GameOver(DeathCause::Starved);
        let before = pet.clone();

        for action in CareAction::ALL {
            assert_eq!(care_system(&mut pet, action), ActionOutcome::Ignored);
        }
        assert_eq!(pet, before);
    }
}

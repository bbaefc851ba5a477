//! Pet components and the attribute level domain

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SimConfig;

pub const MIN_LEVEL: i32 = 0;
pub const MAX_LEVEL: i32 = 100;

/// Bound `value` to `[low, high]`.
pub fn clamp(value: i32, low: i32, high: i32) -> i32 {
    value.min(high).max(low)
}

/// Bound `value` to the attribute domain `[MIN_LEVEL, MAX_LEVEL]`.
pub fn clamp_level(value: i32) -> i32 {
    clamp(value, MIN_LEVEL, MAX_LEVEL)
}

// ============================================================================
// Identity Components
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PetId(pub u64);

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Pet Components
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Hunger reached the maximum level.
    Starved,
    /// Happiness reached the minimum level.
    TooSad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    Alive,
    /// Terminal; nothing moves a pet out of this state.
    GameOver(DeathCause),
}

/// A single virtual pet.
///
/// Hunger runs from 0 (full) to 100 (starving), happiness from 0 (sad) to
/// 100 (elated). Both stay inside `[MIN_LEVEL, MAX_LEVEL]` after every
/// mutation, and nothing mutates a pet once its state is `GameOver`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pet {
    pub(crate) name: String,
    pub(crate) hunger: i32,
    pub(crate) happiness: i32,
    pub(crate) age_hours: u64,
    pub(crate) state: LifeState,
}

impl Pet {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_config(name, &SimConfig::default())
    }

    pub fn from_config(name: impl Into<String>, config: &SimConfig) -> Self {
        Self::with_levels(name, config.initial_hunger, config.initial_happiness)
    }

    /// Create a live pet with explicit starting levels (clamped).
    pub fn with_levels(name: impl Into<String>, hunger: i32, happiness: i32) -> Self {
        Self {
            name: name.into(),
            hunger: clamp_level(hunger),
            happiness: clamp_level(happiness),
            age_hours: 0,
            state: LifeState::Alive,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hunger(&self) -> i32 {
        self.hunger
    }

    pub fn happiness(&self) -> i32 {
        self.happiness
    }

    pub fn age_hours(&self) -> u64 {
        self.age_hours
    }

    pub fn state(&self) -> LifeState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == LifeState::Alive
    }

    pub fn status(&self) -> PetStatus {
        PetStatus {
            name: self.name.clone(),
            hunger: self.hunger,
            happiness: self.happiness,
            age_hours: self.age_hours,
            alive: self.is_alive(),
            state: self.state,
        }
    }

    pub(crate) fn adjust_hunger(&mut self, delta: i32) {
        self.hunger = clamp_level(self.hunger.saturating_add(delta));
    }

    pub(crate) fn adjust_happiness(&mut self, delta: i32) {
        self.happiness = clamp_level(self.happiness.saturating_add(delta));
    }
}

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetStatus {
    pub name: String,
    pub hunger: i32,
    pub happiness: i32,
    pub age_hours: u64,
    pub alive: bool,
    pub state: LifeState,
}

//! Simulation tuning
//!
//! Every knob has a default matching the stock game, so an empty JSON
//! object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::components::{MAX_LEVEL, MIN_LEVEL};
use crate::error::{SimError, SimResult};

/// Closed integer range `[min, max]` for per-hour random drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
    pub min: i32,
    pub max: i32,
}

impl LevelRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub initial_hunger: i32,
    pub initial_happiness: i32,
    /// Added to hunger every hour.
    pub hunger_rise: LevelRange,
    /// Subtracted from happiness every hour.
    pub happiness_decay: LevelRange,
    /// Chance per hour that a random event fires.
    pub event_probability: f64,
    /// Hunger strictly above this costs extra happiness each hour.
    pub hunger_penalty_threshold: i32,
    pub hunger_penalty: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_hunger: 50,
            initial_happiness: 50,
            hunger_rise: LevelRange::new(3, 7),
            happiness_decay: LevelRange::new(2, 5),
            event_probability: 0.20,
            hunger_penalty_threshold: 80,
            hunger_penalty: 5,
        }
    }
}

impl SimConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        check_level("initial_hunger", self.initial_hunger)?;
        check_level("initial_happiness", self.initial_happiness)?;
        check_range("hunger_rise", self.hunger_rise)?;
        check_range("happiness_decay", self.happiness_decay)?;

        if !(0.0..=1.0).contains(&self.event_probability) {
            return Err(SimError::InvalidConfig(format!(
                "event_probability must be within [0, 1], got {}",
                self.event_probability
            )));
        }
        check_level("hunger_penalty_threshold", self.hunger_penalty_threshold)?;
        check_level("hunger_penalty", self.hunger_penalty)?;
        Ok(())
    }
}

fn check_level(field: &str, value: i32) -> SimResult<()> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&value) {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "{field} must be within [{MIN_LEVEL}, {MAX_LEVEL}], got {value}"
        )))
    }
}

fn check_range(field: &str, range: LevelRange) -> SimResult<()> {
    if range.min < MIN_LEVEL || range.min > range.max || range.max > MAX_LEVEL {
        return Err(SimError::InvalidConfig(format!(
            "{field} must satisfy {MIN_LEVEL} <= min <= max <= {MAX_LEVEL}, got [{}, {}]",
            range.min, range.max
        )));
    }
    Ok(())
}

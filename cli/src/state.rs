use rand::rngs::StdRng;
use simulation::{seeded_rng, PetWorld, SimConfig};

/// Upper bound for a single "advance time" request.
pub const DEFAULT_MAX_ADVANCE_HOURS: u32 = 24;

/// Session state shared by every menu command
pub struct AppState {
    pub world: PetWorld,
    pub rng: StdRng,
    pub seed: u64,
    pub max_advance_hours: u32,
}

impl AppState {
    pub fn new(config: SimConfig, seed: u64, max_advance_hours: u32) -> Self {
        Self {
            world: PetWorld::new(config),
            rng: seeded_rng(Some(seed)),
            seed,
            max_advance_hours: max_advance_hours.max(1),
        }
    }
}

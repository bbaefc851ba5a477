//! Pet World - owns every pet and tracks which one is active

use hecs::{Entity, World};
use serde::Serialize;

use crate::components::*;
use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::random::RandomSource;
use crate::simulator::TickResult;
use crate::systems::{ActionOutcome, CareAction};

/// One row of the pet list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetSummary {
    pub id: PetId,
    pub status: PetStatus,
    pub active: bool,
}

pub struct PetWorld {
    world: World,
    config: SimConfig,
    next_pet_id: u64,
    active: Option<Entity>,
}

impl PetWorld {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            config,
            next_pet_id: 1,
            active: None,
        }
    }

    /// Adopt a new pet and make it the active one.
    pub fn create_pet(&mut self, name: &str) -> SimResult<PetId> {
        let name = name.trim();
        if name.is_empty() {
            tracing::warn!("rejected blank pet name");
            return Err(SimError::InvalidName);
        }

        let id = PetId(self.next_pet_id);
        self.next_pet_id += 1;

        let entity = self.world.spawn((id, Pet::from_config(name, &self.config)));
        self.active = Some(entity);
        tracing::info!(%id, name, "pet created");

        Ok(id)
    }

    /// Remove a pet. Clears the active selection if it pointed at this pet.
    pub fn remove_pet(&mut self, id: PetId) -> SimResult<Pet> {
        let entity = self.entity(id)?;
        let pet = self
            .world
            .remove_one::<Pet>(entity)
            .map_err(|_| SimError::PetNotFound(id))?;
        let _ = self.world.despawn(entity);

        if self.active == Some(entity) {
            self.active = None;
        }
        tracing::info!(%id, name = pet.name(), "pet removed");

        Ok(pet)
    }

    /// All pets ordered by id.
    pub fn pets(&self) -> Vec<PetSummary> {
        let mut pets: Vec<PetSummary> = self
            .world
            .query::<(&PetId, &Pet)>()
            .iter()
            .map(|(entity, (id, pet))| PetSummary {
                id: *id,
                status: pet.status(),
                active: self.active == Some(entity),
            })
            .collect();
        pets.sort_by_key(|summary| summary.id);
        pets
    }

    pub fn pet_count(&self) -> usize {
        self.world.query::<&Pet>().iter().count()
    }

    pub fn switch_active(&mut self, id: PetId) -> SimResult<()> {
        let entity = self.entity(id)?;
        self.active = Some(entity);
        Ok(())
    }

    pub fn active_id(&self) -> Option<PetId> {
        let entity = self.active?;
        self.world.get::<&PetId>(entity).ok().map(|id| *id)
    }

    pub fn active_status(&self) -> Option<PetStatus> {
        let entity = self.active?;
        self.world.get::<&Pet>(entity).ok().map(|pet| pet.status())
    }

    pub fn status(&self, id: PetId) -> SimResult<PetStatus> {
        let entity = self.entity(id)?;
        self.world
            .get::<&Pet>(entity)
            .map(|pet| pet.status())
            .map_err(|_| SimError::PetNotFound(id))
    }

    /// Apply a care action to the active pet.
    pub fn care_active(&mut self, action: CareAction) -> SimResult<ActionOutcome> {
        let entity = self.active.ok_or(SimError::NoActivePet)?;
        let mut pet = self
            .world
            .get::<&mut Pet>(entity)
            .map_err(|_| SimError::NoActivePet)?;
        Ok(pet.apply(action))
    }

    /// Advance the active pet's clock.
    pub fn tick_active<R: RandomSource + ?Sized>(&mut self, hours: u32, rng: &mut R) -> SimResult<TickResult> {
        let entity = self.active.ok_or(SimError::NoActivePet)?;
        let mut pet = self
            .world
            .get::<&mut Pet>(entity)
            .map_err(|_| SimError::NoActivePet)?;
        pet.tick(hours, &self.config, rng)
    }

    fn entity(&self, id: PetId) -> SimResult<Entity> {
        self.world
            .query::<&PetId>()
            .iter()
            .find(|(_, pet_id)| **pet_id == id)
            .map(|(entity, _)| entity)
            .ok_or(SimError::PetNotFound(id))
    }
}

impl Default for PetWorld {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

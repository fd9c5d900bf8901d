//! Habitats - areas animals live in, referenced by id

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{MealMaxError, Result};
use crate::core::types::{AnimalId, HabitatId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habitat {
    pub habitat_id: HabitatId,
    pub geographic_area: String,
    pub size: u32,
    pub environment_type: String,
    /// Residents by id; the animals themselves live in `AnimalManager`
    pub animals: Vec<AnimalId>,
}

#[derive(Debug, Clone, Default)]
pub struct HabitatManager {
    habitats: AHashMap<HabitatId, Habitat>,
}

impl HabitatManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_habitat(
        &mut self,
        habitat_id: HabitatId,
        geographic_area: &str,
        size: u32,
        environment_type: &str,
    ) -> Result<&Habitat> {
        if size == 0 {
            return Err(MealMaxError::Validation(format!(
                "Habitat {} must have a positive size",
                habitat_id
            )));
        }
        if self.habitats.contains_key(&habitat_id) {
            return Err(MealMaxError::Duplicate(format!("Habitat with ID {}", habitat_id)));
        }

        tracing::debug!("Created habitat {} in {}", habitat_id, geographic_area);
        let habitat = Habitat {
            habitat_id,
            geographic_area: geographic_area.to_string(),
            size,
            environment_type: environment_type.to_string(),
            animals: Vec::new(),
        };
        Ok(self.habitats.entry(habitat_id).or_insert(habitat))
    }

    pub fn get_habitat_by_id(&self, id: HabitatId) -> Result<&Habitat> {
        self.habitats
            .get(&id)
            .ok_or_else(|| MealMaxError::NotFound(format!("Habitat with ID {}", id)))
    }

    pub fn get_habitats_by_geographic_area(&self, geographic_area: &str) -> Vec<&Habitat> {
        self.filtered(|h| h.geographic_area == geographic_area)
    }

    pub fn get_habitats_by_size(&self, size: u32) -> Vec<&Habitat> {
        self.filtered(|h| h.size == size)
    }

    pub fn get_habitats_by_type(&self, environment_type: &str) -> Vec<&Habitat> {
        self.filtered(|h| h.environment_type == environment_type)
    }

    /// Add residents to a habitat, skipping ones already there
    pub fn assign_animals_to_habitat(&mut self, id: HabitatId, animals: &[AnimalId]) -> Result<()> {
        let habitat = self
            .habitats
            .get_mut(&id)
            .ok_or_else(|| MealMaxError::NotFound(format!("Habitat with ID {}", id)))?;
        for animal in animals {
            if !habitat.animals.contains(animal) {
                habitat.animals.push(*animal);
            }
        }
        Ok(())
    }

    pub fn remove_habitat(&mut self, id: HabitatId) -> Result<Habitat> {
        self.habitats
            .remove(&id)
            .ok_or_else(|| MealMaxError::NotFound(format!("Habitat with ID {}", id)))
    }

    pub fn contains(&self, id: HabitatId) -> bool {
        self.habitats.contains_key(&id)
    }

    fn filtered(&self, predicate: impl Fn(&Habitat) -> bool) -> Vec<&Habitat> {
        let mut matches: Vec<&Habitat> = self.habitats.values().filter(|h| predicate(h)).collect();
        matches.sort_by_key(|h| h.habitat_id);
        matches
    }
}

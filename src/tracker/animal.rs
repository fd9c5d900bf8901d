//! Animals and the manager that owns them

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{MealMaxError, Result};
use crate::core::types::AnimalId;

/// A tracked animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub animal_id: AnimalId,
    pub species: String,
    pub age: Option<u32>,
    pub health_status: Option<String>,
}

impl Animal {
    pub fn new(animal_id: AnimalId, species: impl Into<String>) -> Self {
        Self {
            animal_id,
            species: species.into(),
            age: None,
            health_status: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_health_status(mut self, status: impl Into<String>) -> Self {
        self.health_status = Some(status.into());
        self
    }

    /// Apply the fields that are set in `update`
    pub fn apply(&mut self, update: AnimalUpdate) {
        if let Some(species) = update.species {
            self.species = species;
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        if let Some(status) = update.health_status {
            self.health_status = Some(status);
        }
    }
}

/// Partial update for an animal; `None` leaves a field alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalUpdate {
    pub species: Option<String>,
    pub age: Option<u32>,
    pub health_status: Option<String>,
}

/// Owns every registered animal
#[derive(Debug, Clone, Default)]
pub struct AnimalManager {
    animals: AHashMap<AnimalId, Animal>,
}

impl AnimalManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manager around an existing set of animals
    pub fn from_animals(animals: impl IntoIterator<Item = Animal>) -> Result<Self> {
        let mut manager = Self::new();
        for animal in animals {
            manager.register_animal(animal)?;
        }
        Ok(manager)
    }

    pub fn get_animal_by_id(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.get(&id)
    }

    pub fn register_animal(&mut self, animal: Animal) -> Result<()> {
        if self.animals.contains_key(&animal.animal_id) {
            return Err(MealMaxError::Duplicate(format!("Animal with ID {}", animal.animal_id)));
        }
        tracing::debug!("Registered animal {} ({})", animal.animal_id, animal.species);
        self.animals.insert(animal.animal_id, animal);
        Ok(())
    }

    pub fn update_animal(&mut self, id: AnimalId, update: AnimalUpdate) -> Result<&Animal> {
        let animal = self
            .animals
            .get_mut(&id)
            .ok_or_else(|| MealMaxError::NotFound(format!("Animal with ID {}", id)))?;
        animal.apply(update);
        Ok(animal)
    }

    pub fn remove_animal(&mut self, id: AnimalId) -> Result<Animal> {
        let animal = self
            .animals
            .remove(&id)
            .ok_or_else(|| MealMaxError::NotFound(format!("Animal with ID {}", id)))?;
        tracing::debug!("Removed animal {}", id);
        Ok(animal)
    }

    /// All animals in id order
    pub fn animals(&self) -> Vec<&Animal> {
        let mut animals: Vec<&Animal> = self.animals.values().collect();
        animals.sort_by_key(|animal| animal.animal_id);
        animals
    }

    pub fn contains(&self, id: AnimalId) -> bool {
        self.animals.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut manager = AnimalManager::new();
        manager
            .register_animal(Animal::new(AnimalId(1), "Wildebeest").with_age(4))
            .unwrap();

        let animal = manager.get_animal_by_id(AnimalId(1)).unwrap();
        assert_eq!(animal.species, "Wildebeest");
        assert_eq!(animal.age, Some(4));
        assert!(manager.get_animal_by_id(AnimalId(2)).is_none());
    }

    #[test]
    fn test_register_duplicate() {
        let mut manager = AnimalManager::new();
        manager.register_animal(Animal::new(AnimalId(1), "Zebra")).unwrap();
        let err = manager.register_animal(Animal::new(AnimalId(1), "Gazelle")).unwrap_err();
        assert!(matches!(err, MealMaxError::Duplicate(_)));
        assert_eq!(manager.get_animal_by_id(AnimalId(1)).unwrap().species, "Zebra");
    }

    #[test]
    fn test_partial_update() {
        let mut manager = AnimalManager::new();
        manager
            .register_animal(Animal::new(AnimalId(1), "Zebra").with_age(3))
            .unwrap();

        let updated = manager
            .update_animal(
                AnimalId(1),
                AnimalUpdate {
                    health_status: Some("injured".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.age, Some(3));
        assert_eq!(updated.health_status.as_deref(), Some("injured"));
    }

    #[test]
    fn test_remove_missing() {
        let mut manager = AnimalManager::new();
        assert!(matches!(
            manager.remove_animal(AnimalId(9)),
            Err(MealMaxError::NotFound(_))
        ));
    }

    #[test]
    fn test_managers_do_not_share_state() {
        let mut a = AnimalManager::new();
        let b = AnimalManager::new();
        a.register_animal(Animal::new(AnimalId(1), "Zebra")).unwrap();
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }
}

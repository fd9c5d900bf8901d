//! Combatant roster - the bounded working set for one battle

use crate::core::error::{MealMaxError, Result};
use crate::core::types::MealId;
use crate::kitchen::Meal;

/// Maximum number of meals that can be prepped for a battle
pub const ROSTER_CAPACITY: usize = 2;

/// Meals prepped for the next battle, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    combatants: Vec<Meal>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            combatants: Vec::with_capacity(ROSTER_CAPACITY),
        }
    }

    /// Append a meal; fails without mutation when the roster is full
    pub fn add(&mut self, meal: Meal) -> Result<()> {
        if self.combatants.len() >= ROSTER_CAPACITY {
            return Err(MealMaxError::CapacityExceeded(ROSTER_CAPACITY));
        }
        self.combatants.push(meal);
        Ok(())
    }

    /// Empty the roster; never fails
    pub fn clear(&mut self) {
        if self.combatants.is_empty() {
            tracing::warn!("Clearing an empty combatant roster");
        }
        self.combatants.clear();
    }

    pub fn list(&self) -> &[Meal] {
        &self.combatants
    }

    /// Remove the meal with the given id and return it
    pub fn remove(&mut self, id: MealId) -> Result<Meal> {
        let index = self
            .position(id)
            .ok_or_else(|| MealMaxError::NotFound(format!("Combatant with ID {}", id)))?;
        Ok(self.combatants.remove(index))
    }

    /// Remove by slot; callers guarantee the slot is occupied
    pub(crate) fn remove_at(&mut self, slot: usize) -> Meal {
        self.combatants.remove(slot)
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.combatants.len() >= ROSTER_CAPACITY
    }

    fn position(&self, id: MealId) -> Option<usize> {
        self.combatants.iter().position(|meal| meal.id() == id)
    }
}

//! Kitchen - in-memory meal catalog with battle stats
//!
//! Owns every meal record, hands out owned `Meal` values to the battle core and
//! receives battle outcomes back through `StatsRecorder`.

use ahash::AHashMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::battle::collaborators::{MealCatalog, StatsRecorder};
use crate::core::error::{MealMaxError, Result};
use crate::core::types::{MealId, Outcome, Tier};
use crate::kitchen::leaderboard::{LeaderboardEntry, LeaderboardSort};
use crate::kitchen::meal::{validate_price, Meal, MealSpec};

/// A stored meal plus its battle record
#[derive(Debug, Clone)]
struct MealRecord {
    meal: Meal,
    battles: u32,
    wins: u32,
    deleted: bool,
}

/// TOML layout of a catalog file: a `[[meals]]` array
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    meals: Vec<MealSpec>,
}

/// Meal catalog keyed by id, with a name index
#[derive(Debug, Clone)]
pub struct Kitchen {
    meals: AHashMap<MealId, MealRecord>,
    by_name: AHashMap<String, MealId>,
    next_id: u32,
}

impl Default for Kitchen {
    fn default() -> Self {
        Self::new()
    }
}

impl Kitchen {
    /// Create an empty kitchen
    pub fn new() -> Self {
        Self {
            meals: AHashMap::new(),
            by_name: AHashMap::new(),
            next_id: 1,
        }
    }

    /// Build a kitchen from catalog TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        let mut kitchen = Self::new();
        for row in file.meals {
            let difficulty = row.difficulty.parse::<Tier>()?;
            kitchen.create_meal(&row.meal, &row.cuisine, row.price, difficulty)?;
        }
        Ok(kitchen)
    }

    /// Load a kitchen from a catalog TOML file
    pub fn load_catalog(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let kitchen = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded {} meals from {}", kitchen.len(), path.display());
        Ok(kitchen)
    }

    /// Number of stored meals, including soft-deleted ones
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Add a new meal and return its assigned id
    pub fn create_meal(
        &mut self,
        meal: &str,
        cuisine: &str,
        price: f64,
        difficulty: Tier,
    ) -> Result<MealId> {
        validate_price(price)?;

        // Names stay reserved after a soft delete
        if self.by_name.contains_key(meal) {
            tracing::error!("Duplicate meal name: {}", meal);
            return Err(MealMaxError::Duplicate(format!("Meal with name '{}'", meal)));
        }

        let id = MealId(self.next_id);
        let record = MealRecord {
            meal: Meal::new(id, meal, cuisine, price, difficulty)?,
            battles: 0,
            wins: 0,
            deleted: false,
        };
        self.next_id += 1;
        self.by_name.insert(meal.to_string(), id);
        self.meals.insert(id, record);

        tracing::info!("Meal successfully added to the catalog: {}", meal);
        Ok(id)
    }

    /// Remove every meal and restart id assignment
    pub fn clear_meals(&mut self) {
        self.meals.clear();
        self.by_name.clear();
        self.next_id = 1;
        tracing::info!("Meals cleared successfully.");
    }

    /// Mark a meal as deleted; it keeps its name and stats
    pub fn delete_meal(&mut self, id: MealId) -> Result<()> {
        let record = self.live_record_mut(id)?;
        record.deleted = true;
        tracing::info!("Meal with ID {} marked as deleted.", id);
        Ok(())
    }

    /// Look up a live meal by id
    pub fn get_meal_by_id(&self, id: MealId) -> Result<Meal> {
        self.live_record(id).map(|record| record.meal.clone())
    }

    /// Look up a live meal by name
    pub fn get_meal_by_name(&self, name: &str) -> Result<Meal> {
        let record = self.by_name.get(name).and_then(|id| self.meals.get(id));
        match record {
            Some(record) if record.deleted => {
                tracing::info!("Meal with name {} has been deleted", name);
                Err(MealMaxError::Deleted(format!("Meal with name {}", name)))
            }
            Some(record) => Ok(record.meal.clone()),
            None => {
                tracing::info!("Meal with name {} not found", name);
                Err(MealMaxError::NotFound(format!("Meal with name {}", name)))
            }
        }
    }

    /// Apply one battle outcome to a meal's record
    pub fn update_meal_stats(&mut self, id: MealId, outcome: Outcome) -> Result<()> {
        let record = self.live_record_mut(id)?;
        record.battles += 1;
        if outcome == Outcome::Win {
            record.wins += 1;
        }
        tracing::info!("Recorded {} for meal with ID {}", outcome, id);
        Ok(())
    }

    /// Battle record of a meal as `(battles, wins)`
    pub fn stats(&self, id: MealId) -> Result<(u32, u32)> {
        self.live_record(id).map(|record| (record.battles, record.wins))
    }

    /// Live meals in id order
    pub fn meals(&self) -> Vec<Meal> {
        let mut meals: Vec<Meal> = self
            .meals
            .values()
            .filter(|record| !record.deleted)
            .map(|record| record.meal.clone())
            .collect();
        meals.sort_by_key(|meal| meal.id());
        meals
    }

    /// Live meals that have fought at least once, best first
    pub fn get_leaderboard(&self, sort_by: LeaderboardSort) -> Vec<LeaderboardEntry> {
        let mut board: Vec<LeaderboardEntry> = self
            .meals
            .values()
            .filter(|record| !record.deleted && record.battles > 0)
            .map(|record| {
                LeaderboardEntry::new(&record.meal, record.battles, record.wins)
            })
            .collect();

        // Id order first so equal keys keep a stable, deterministic order
        board.sort_by_key(|entry| entry.id);
        match sort_by {
            LeaderboardSort::Wins => board.sort_by(|a, b| b.wins.cmp(&a.wins)),
            LeaderboardSort::WinPct => board.sort_by(|a, b| b.win_pct.total_cmp(&a.win_pct)),
        }

        tracing::info!("Leaderboard retrieved successfully");
        board
    }

    fn live_record(&self, id: MealId) -> Result<&MealRecord> {
        match self.meals.get(&id) {
            Some(record) if record.deleted => {
                tracing::info!("Meal with ID {} has been deleted", id);
                Err(MealMaxError::Deleted(format!("Meal with ID {}", id)))
            }
            Some(record) => Ok(record),
            None => {
                tracing::info!("Meal with ID {} not found", id);
                Err(MealMaxError::NotFound(format!("Meal with ID {}", id)))
            }
        }
    }

    fn live_record_mut(&mut self, id: MealId) -> Result<&mut MealRecord> {
        match self.meals.get_mut(&id) {
            Some(record) if record.deleted => {
                tracing::info!("Meal with ID {} has been deleted", id);
                Err(MealMaxError::Deleted(format!("Meal with ID {}", id)))
            }
            Some(record) => Ok(record),
            None => {
                tracing::info!("Meal with ID {} not found", id);
                Err(MealMaxError::NotFound(format!("Meal with ID {}", id)))
            }
        }
    }
}

impl MealCatalog for Kitchen {
    fn meal_by_id(&self, id: MealId) -> Result<Meal> {
        self.get_meal_by_id(id)
    }

    fn meal_by_name(&self, name: &str) -> Result<Meal> {
        self.get_meal_by_name(name)
    }
}

impl StatsRecorder for Kitchen {
    fn record_result(&mut self, id: MealId, outcome: Outcome) -> Result<()> {
        self.update_meal_stats(id, outcome)
    }

    /// Both meals must be live before either record changes
    fn record_battle(&mut self, winner: MealId, loser: MealId) -> Result<()> {
        self.live_record(winner)?;
        self.live_record(loser)?;
        self.update_meal_stats(winner, Outcome::Win)?;
        self.update_meal_stats(loser, Outcome::Loss)
    }
}

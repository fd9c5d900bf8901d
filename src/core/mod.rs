pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, BattleConfig, TierPenalties};
pub use error::{MealMaxError, Result};
pub use types::{AnimalId, HabitatId, MealId, MigrationId, Outcome, PathId, Tier};

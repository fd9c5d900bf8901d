//! Meal battles
//!
//! Architecture: a bounded `Roster` holds the two prepped meals, `scoring`
//! turns meals into numbers, and `BattleModel` draws the outcome and reports
//! it through the `StatsRecorder` collaborator.

pub mod collaborators;
pub mod resolver;
pub mod roster;
pub mod scoring;

pub use collaborators::{MealCatalog, StatsRecorder};
pub use resolver::{BattleModel, BattleReport};
pub use roster::{Roster, ROSTER_CAPACITY};
pub use scoring::{battle_score, win_probability};

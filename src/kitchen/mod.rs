//! Meal catalog: meals, battle stats and the leaderboard

pub mod catalog;
pub mod leaderboard;
pub mod meal;

pub use catalog::Kitchen;
pub use leaderboard::{LeaderboardEntry, LeaderboardSort};
pub use meal::{Meal, MealSpec};

//! Leaderboard rows and sort orders

use serde::Serialize;
use std::str::FromStr;

use crate::core::error::MealMaxError;
use crate::core::types::{MealId, Tier};
use crate::kitchen::meal::Meal;

/// Sort order for the leaderboard (always descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderboardSort {
    #[default]
    Wins,
    WinPct,
}

impl FromStr for LeaderboardSort {
    type Err = MealMaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(LeaderboardSort::Wins),
            "win_pct" => Ok(LeaderboardSort::WinPct),
            other => {
                tracing::error!("Invalid sort_by parameter: {}", other);
                Err(MealMaxError::Validation(format!(
                    "Invalid sort_by parameter: {}",
                    other
                )))
            }
        }
    }
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub id: MealId,
    pub meal: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Tier,
    pub battles: u32,
    pub wins: u32,
    /// Percentage rounded to one decimal place
    pub win_pct: f64,
}

impl LeaderboardEntry {
    pub(crate) fn new(meal: &Meal, battles: u32, wins: u32) -> Self {
        Self {
            id: meal.id(),
            meal: meal.meal().to_string(),
            cuisine: meal.cuisine().to_string(),
            price: meal.price(),
            difficulty: meal.difficulty(),
            battles,
            wins,
            win_pct: win_percentage(battles, wins),
        }
    }
}

fn win_percentage(battles: u32, wins: u32) -> f64 {
    if battles == 0 {
        return 0.0;
    }
    let pct = wins as f64 / battles as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

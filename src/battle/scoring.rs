//! Battle scoring
//!
//! Pure functions only: the same meal and config always produce the same score.

use crate::core::config::{BattleConfig, TierPenalties};
use crate::kitchen::Meal;

/// Score a meal: `price * name length - tier penalty`
///
/// Name length counts characters, not bytes.
pub fn battle_score(meal: &Meal, penalties: &TierPenalties) -> f64 {
    let name_len = meal.meal().chars().count() as f64;
    meal.price() * name_len - penalties.penalty(meal.difficulty())
}

/// Chance that the first meal wins, given both scores
///
/// The score gap is squashed into `[0, 1]` by the scaling constant and split
/// evenly around a coin flip. Equal scores give exactly 0.5.
pub fn win_probability(score_a: f64, score_b: f64, config: &BattleConfig) -> f64 {
    let diff = score_a - score_b;
    let delta = (diff.abs() / config.scaling_constant).min(1.0);
    let sign = if diff > 0.0 {
        1.0
    } else if diff < 0.0 {
        -1.0
    } else {
        0.0
    };

    (0.5 + sign * delta / 2.0).clamp(0.0, 1.0)
}

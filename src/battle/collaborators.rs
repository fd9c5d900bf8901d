//! Interfaces the battle core depends on but does not implement
//!
//! Architecture: the resolver only sees these traits, so the kitchen, a test
//! double or a remote service can stand behind them.

use crate::core::error::Result;
use crate::core::types::{MealId, Outcome};
use crate::kitchen::Meal;

/// Receives the outcome of every battle, once per participant
pub trait StatsRecorder {
    /// Record a win or loss for one meal. Errors are passed through unchanged.
    fn record_result(&mut self, id: MealId, outcome: Outcome) -> Result<()>;

    /// Record one finished battle: a win for `winner`, then a loss for `loser`.
    ///
    /// The default reports each side in turn, so a failure on the loss leaves
    /// the win applied. Implementors that can validate both meals up front
    /// should override this to make the pair all-or-nothing.
    fn record_battle(&mut self, winner: MealId, loser: MealId) -> Result<()> {
        self.record_result(winner, Outcome::Win)?;
        self.record_result(loser, Outcome::Loss)
    }
}

/// Supplies meals by identifier or name
pub trait MealCatalog {
    fn meal_by_id(&self, id: MealId) -> Result<Meal>;

    fn meal_by_name(&self, name: &str) -> Result<Meal>;
}

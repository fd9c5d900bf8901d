//! Battle resolver - scores two prepped meals and eliminates one
//!
//! Owns the roster, the config and the RNG. Resolution either completes fully
//! (both results recorded, loser removed) or leaves the roster untouched.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::battle::collaborators::{MealCatalog, StatsRecorder};
use crate::battle::roster::{Roster, ROSTER_CAPACITY};
use crate::battle::scoring::{battle_score, win_probability};
use crate::core::config::BattleConfig;
use crate::core::error::{MealMaxError, Result};
use crate::core::types::MealId;
use crate::kitchen::Meal;

/// What happened in a single battle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleReport {
    pub winner: MealId,
    pub loser: MealId,
    /// Scores in roster order
    pub scores: [f64; 2],
    /// Chance the first prepped meal had of winning
    pub win_probability: f64,
    /// The uniform draw in `[0, 1)` that decided the battle
    pub draw: f64,
}

/// Roster plus resolution rules
pub struct BattleModel<R = ChaCha8Rng> {
    roster: Roster,
    config: BattleConfig,
    rng: R,
}

impl BattleModel<ChaCha8Rng> {
    /// Create a model seeded from OS entropy
    pub fn new(config: BattleConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Create with specific RNG seed for deterministic behavior
    pub fn with_seed(config: BattleConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> BattleModel<R> {
    /// Create with any random source
    pub fn with_rng(config: BattleConfig, rng: R) -> Self {
        Self {
            roster: Roster::new(),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Add a meal to the roster
    pub fn prep_combatant(&mut self, meal: Meal) -> Result<()> {
        self.roster.add(meal)
    }

    /// Look a meal up by name and add it to the roster
    pub fn prep_from_catalog<C: MealCatalog + ?Sized>(
        &mut self,
        catalog: &C,
        name: &str,
    ) -> Result<()> {
        if self.roster.is_full() {
            return Err(MealMaxError::CapacityExceeded(ROSTER_CAPACITY));
        }
        let meal = catalog.meal_by_name(name)?;
        self.roster.add(meal)
    }

    pub fn clear_combatants(&mut self) {
        self.roster.clear();
    }

    pub fn get_combatants(&self) -> &[Meal] {
        self.roster.list()
    }

    pub fn remove_combatant(&mut self, id: MealId) -> Result<Meal> {
        self.roster.remove(id)
    }

    /// Score a meal under this model's config
    pub fn get_battle_score(&self, meal: &Meal) -> f64 {
        battle_score(meal, &self.config.tier_penalties)
    }

    /// Fight the two prepped meals
    ///
    /// The first meal wins iff the draw is below its win probability. The
    /// result is reported before the loser leaves the roster; a reporting
    /// error is returned as-is with the roster unchanged.
    pub fn battle<S: StatsRecorder + ?Sized>(&mut self, stats: &mut S) -> Result<BattleReport> {
        let (first, second) = match self.roster.list() {
            [first, second] => (first, second),
            other => return Err(MealMaxError::InsufficientCombatants(other.len())),
        };

        let score_a = self.get_battle_score(first);
        let score_b = self.get_battle_score(second);
        let probability = win_probability(score_a, score_b, &self.config);
        let draw: f64 = self.rng.gen();

        let (winner, loser) = if draw < probability {
            (first.id(), second.id())
        } else {
            (second.id(), first.id())
        };

        stats.record_battle(winner, loser)?;

        // Remove by slot, not id: a meal may be prepped against itself
        let loser_slot = if draw < probability { 1 } else { 0 };
        self.roster.remove_at(loser_slot);

        Ok(BattleReport {
            winner,
            loser,
            scores: [score_a, score_b],
            win_probability: probability,
            draw,
        })
    }
}

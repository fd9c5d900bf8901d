//! Meal - a battle-eligible catalog entry

use serde::{Deserialize, Serialize};

use crate::core::error::{MealMaxError, Result};
use crate::core::types::{MealId, Tier};

/// A meal as handed out by the catalog
///
/// Fields are private so a `Meal` can only exist with a positive price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    id: MealId,
    meal: String,
    cuisine: String,
    price: f64,
    difficulty: Tier,
}

impl Meal {
    /// Create a meal, rejecting non-positive or non-finite prices
    pub fn new(
        id: MealId,
        meal: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: Tier,
    ) -> Result<Self> {
        validate_price(price)?;
        Ok(Self {
            id,
            meal: meal.into(),
            cuisine: cuisine.into(),
            price,
            difficulty,
        })
    }

    /// Create a meal from a raw difficulty label (`LOW`, `MED` or `HIGH`)
    pub fn parse(
        id: MealId,
        meal: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: &str,
    ) -> Result<Self> {
        let difficulty = difficulty.parse::<Tier>()?;
        Self::new(id, meal, cuisine, price, difficulty)
    }

    pub fn id(&self) -> MealId {
        self.id
    }

    pub fn meal(&self) -> &str {
        &self.meal
    }

    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn difficulty(&self) -> Tier {
        self.difficulty
    }
}

/// Prices must be finite and strictly positive
pub(crate) fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(MealMaxError::Validation(format!(
            "Invalid price: {:?}. Price must be a positive number.",
            price
        )));
    }
    Ok(())
}

/// Raw meal row as written in catalog TOML files
#[derive(Debug, Clone, Deserialize)]
pub struct MealSpec {
    pub meal: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: String,
}

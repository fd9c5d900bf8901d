use thiserror::Error;

#[derive(Error, Debug)]
pub enum MealMaxError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Combatant list is full, cannot add more combatants (capacity {0})")]
    CapacityExceeded(usize),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Two combatants must be prepped for a battle, found {0}")]
    InsufficientCombatants(usize),

    #[error("{0} has been deleted")]
    Deleted(String),

    #[error("{0} already exists")]
    Duplicate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MealMaxError>;

//! Wildlife tracker
//!
//! Each manager owns a map from id to record. Records refer to each other by
//! id only, so managers can be built, passed around and dropped independently.

pub mod animal;
pub mod habitat;
pub mod migration;

pub use animal::{Animal, AnimalManager, AnimalUpdate};
pub use habitat::{Habitat, HabitatManager};
pub use migration::{
    Migration, MigrationManager, MigrationPath, MigrationPathUpdate, MigrationStatus,
    MigrationUpdate,
};

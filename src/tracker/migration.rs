//! Migration paths and scheduled migrations
//!
//! Paths point at habitats by id and migrations point at paths by id, so
//! removing or updating one record never invalidates a live reference.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{MealMaxError, Result};
use crate::core::types::{HabitatId, MigrationId, PathId};

/// Lifecycle of a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MigrationStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl MigrationStatus {
    /// Scheduled and in-progress migrations still depend on their path
    pub fn is_active(&self) -> bool {
        matches!(self, MigrationStatus::Scheduled | MigrationStatus::InProgress)
    }
}

/// A route a species travels between two habitats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationPath {
    pub path_id: PathId,
    pub species: String,
    pub start_location: HabitatId,
    pub destination: HabitatId,
    /// Expected duration in days
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrationPathUpdate {
    pub species: Option<String>,
    pub start_location: Option<HabitatId>,
    pub destination: Option<HabitatId>,
    pub duration: Option<u32>,
}

/// One scheduled run along a path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Migration {
    pub migration_id: MigrationId,
    pub path_id: PathId,
    pub species: String,
    pub start_date: String,
    pub current_date: String,
    pub current_location: String,
    pub status: MigrationStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrationUpdate {
    pub current_date: Option<String>,
    pub current_location: Option<String>,
    pub status: Option<MigrationStatus>,
}

/// Owns all paths and migrations
#[derive(Debug, Clone)]
pub struct MigrationManager {
    migrations: AHashMap<MigrationId, Migration>,
    paths: AHashMap<PathId, MigrationPath>,
    next_path_id: u32,
    next_migration_id: u32,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        Self {
            migrations: AHashMap::new(),
            paths: AHashMap::new(),
            next_path_id: 1,
            next_migration_id: 1,
        }
    }

    // === PATHS ===

    pub fn create_migration_path(
        &mut self,
        species: &str,
        start_location: HabitatId,
        destination: HabitatId,
        duration: Option<u32>,
    ) -> Result<PathId> {
        if start_location == destination {
            return Err(MigrationManager::same_endpoints(start_location));
        }

        let path_id = PathId(self.next_path_id);
        self.next_path_id += 1;
        self.paths.insert(
            path_id,
            MigrationPath {
                path_id,
                species: species.to_string(),
                start_location,
                destination,
                duration,
            },
        );
        tracing::debug!(
            "Created migration path {} for {}: {} -> {}",
            path_id,
            species,
            start_location,
            destination
        );
        Ok(path_id)
    }

    pub fn get_migration_path_by_id(&self, id: PathId) -> Result<&MigrationPath> {
        self.paths
            .get(&id)
            .ok_or_else(|| MealMaxError::NotFound(format!("Migration path with ID {}", id)))
    }

    pub fn get_migration_paths(&self) -> Vec<&MigrationPath> {
        self.paths_where(|_| true)
    }

    pub fn get_migration_paths_by_destination(
        &self,
        destination: HabitatId,
    ) -> Vec<&MigrationPath> {
        self.paths_where(|p| p.destination == destination)
    }

    pub fn get_migration_paths_by_species(&self, species: &str) -> Vec<&MigrationPath> {
        self.paths_where(|p| p.species == species)
    }

    pub fn get_migration_paths_by_start_location(&self, start: HabitatId) -> Vec<&MigrationPath> {
        self.paths_where(|p| p.start_location == start)
    }

    pub fn update_migration_path(
        &mut self,
        id: PathId,
        update: MigrationPathUpdate,
    ) -> Result<&MigrationPath> {
        let path = self
            .paths
            .get_mut(&id)
            .ok_or_else(|| MealMaxError::NotFound(format!("Migration path with ID {}", id)))?;

        let start = update.start_location.unwrap_or(path.start_location);
        let destination = update.destination.unwrap_or(path.destination);
        if start == destination {
            return Err(MigrationManager::same_endpoints(start));
        }

        path.start_location = start;
        path.destination = destination;
        if let Some(species) = update.species {
            path.species = species;
        }
        if let Some(duration) = update.duration {
            path.duration = Some(duration);
        }
        Ok(path)
    }

    /// Remove a path that no active migration is using
    pub fn remove_migration_path(&mut self, id: PathId) -> Result<MigrationPath> {
        if !self.paths.contains_key(&id) {
            return Err(MealMaxError::NotFound(format!("Migration path with ID {}", id)));
        }
        if self
            .migrations
            .values()
            .any(|m| m.path_id == id && m.status.is_active())
        {
            return Err(MealMaxError::Validation(format!(
                "Migration path {} is used by an active migration",
                id
            )));
        }

        tracing::debug!("Removed migration path {}", id);
        self.paths
            .remove(&id)
            .ok_or_else(|| MealMaxError::NotFound(format!("Migration path with ID {}", id)))
    }

    // === MIGRATIONS ===

    /// Schedule a migration along an existing path
    ///
    /// The migration starts at the path's start habitat on `start_date`.
    pub fn schedule_migration(&mut self, path_id: PathId, start_date: &str) -> Result<MigrationId> {
        let path = self.get_migration_path_by_id(path_id)?;
        let migration_id = MigrationId(self.next_migration_id);
        let migration = Migration {
            migration_id,
            path_id,
            species: path.species.clone(),
            start_date: start_date.to_string(),
            current_date: start_date.to_string(),
            current_location: format!("habitat {}", path.start_location),
            status: MigrationStatus::Scheduled,
        };

        self.next_migration_id += 1;
        self.migrations.insert(migration_id, migration);
        tracing::debug!("Scheduled migration {} on path {}", migration_id, path_id);
        Ok(migration_id)
    }

    pub fn get_migration_by_id(&self, id: MigrationId) -> Result<&Migration> {
        self.migrations
            .get(&id)
            .ok_or_else(|| MealMaxError::NotFound(format!("Migration with ID {}", id)))
    }

    pub fn get_migrations(&self) -> Vec<&Migration> {
        self.migrations_where(|_| true)
    }

    pub fn get_migrations_by_current_location(&self, location: &str) -> Vec<&Migration> {
        self.migrations_where(|m| m.current_location == location)
    }

    pub fn get_migrations_by_migration_path(&self, path_id: PathId) -> Vec<&Migration> {
        self.migrations_where(|m| m.path_id == path_id)
    }

    pub fn get_migrations_by_start_date(&self, start_date: &str) -> Vec<&Migration> {
        self.migrations_where(|m| m.start_date == start_date)
    }

    pub fn get_migrations_by_status(&self, status: MigrationStatus) -> Vec<&Migration> {
        self.migrations_where(|m| m.status == status)
    }

    pub fn update_migration(
        &mut self,
        id: MigrationId,
        update: MigrationUpdate,
    ) -> Result<&Migration> {
        let migration = self
            .migrations
            .get_mut(&id)
            .ok_or_else(|| MealMaxError::NotFound(format!("Migration with ID {}", id)))?;
        if let Some(date) = update.current_date {
            migration.current_date = date;
        }
        if let Some(location) = update.current_location {
            migration.current_location = location;
        }
        if let Some(status) = update.status {
            migration.status = status;
        }
        Ok(migration)
    }

    /// Cancel a scheduled or in-progress migration
    pub fn cancel_migration(&mut self, id: MigrationId) -> Result<()> {
        let migration = self
            .migrations
            .get_mut(&id)
            .ok_or_else(|| MealMaxError::NotFound(format!("Migration with ID {}", id)))?;
        if !migration.status.is_active() {
            return Err(MealMaxError::Validation(format!(
                "Migration {} is {:?} and cannot be cancelled",
                id, migration.status
            )));
        }
        migration.status = MigrationStatus::Cancelled;
        tracing::debug!("Cancelled migration {}", id);
        Ok(())
    }

    fn paths_where(&self, predicate: impl Fn(&MigrationPath) -> bool) -> Vec<&MigrationPath> {
        let mut paths: Vec<&MigrationPath> = self.paths.values().filter(|p| predicate(p)).collect();
        paths.sort_by_key(|p| p.path_id);
        paths
    }

    fn migrations_where(&self, predicate: impl Fn(&Migration) -> bool) -> Vec<&Migration> {
        let mut migrations: Vec<&Migration> =
            self.migrations.values().filter(|m| predicate(m)).collect();
        migrations.sort_by_key(|m| m.migration_id);
        migrations
    }

    fn same_endpoints(habitat: HabitatId) -> MealMaxError {
        MealMaxError::Validation(format!(
            "Migration path cannot start and end at habitat {}",
            habitat
        ))
    }
}

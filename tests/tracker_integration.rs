//! Wildlife tracker integration tests
//!
//! Exercises the three managers together through id-only cross references.

use meal_max::core::error::MealMaxError;
use meal_max::core::types::{AnimalId, HabitatId};
use meal_max::tracker::{
    Animal, AnimalManager, HabitatManager, MigrationManager, MigrationStatus, MigrationUpdate,
};

#[test]
fn test_herd_migration_flow() {
    let mut animals = AnimalManager::from_animals([
        Animal::new(AnimalId(1), "Wildebeest").with_age(5),
        Animal::new(AnimalId(2), "Wildebeest").with_health_status("healthy"),
        Animal::new(AnimalId(3), "Zebra"),
    ])
    .unwrap();

    let mut habitats = HabitatManager::new();
    habitats.create_habitat(HabitatId(10), "Serengeti", 14_750, "savanna").unwrap();
    habitats.create_habitat(HabitatId(20), "Masai Mara", 1_510, "savanna").unwrap();
    habitats
        .assign_animals_to_habitat(HabitatId(10), &[AnimalId(1), AnimalId(2)])
        .unwrap();

    let mut migrations = MigrationManager::new();
    let path = migrations
        .create_migration_path("Wildebeest", HabitatId(10), HabitatId(20), Some(60))
        .unwrap();
    let run = migrations.schedule_migration(path, "2024-07-01").unwrap();

    migrations
        .update_migration(
            run,
            MigrationUpdate {
                current_date: Some("2024-07-20".into()),
                current_location: Some("Grumeti River".into()),
                status: Some(MigrationStatus::InProgress),
            },
        )
        .unwrap();

    assert_eq!(migrations.get_migrations_by_status(MigrationStatus::InProgress).len(), 1);
    assert_eq!(migrations.get_migrations_by_current_location("Grumeti River").len(), 1);
    assert_eq!(migrations.get_migrations_by_start_date("2024-07-01").len(), 1);
    assert_eq!(migrations.get_migrations_by_migration_path(path).len(), 1);
    assert_eq!(migrations.get_migration_paths_by_destination(HabitatId(20)).len(), 1);
    assert_eq!(migrations.get_migration_paths_by_start_location(HabitatId(10)).len(), 1);
    assert_eq!(migrations.get_migration_paths_by_species("Zebra").len(), 0);

    // Removing an animal leaves the habitat's id list alone
    animals.remove_animal(AnimalId(1)).unwrap();
    let home = habitats.get_habitat_by_id(HabitatId(10)).unwrap();
    assert!(home.animals.contains(&AnimalId(1)));
    assert!(!animals.contains(AnimalId(1)));

    // A habitat can go away while the path still names it by id
    habitats.remove_habitat(HabitatId(20)).unwrap();
    assert_eq!(
        migrations.get_migration_path_by_id(path).unwrap().destination,
        HabitatId(20)
    );
}

#[test]
fn test_completed_migration_frees_path() {
    let mut migrations = MigrationManager::new();
    let path = migrations
        .create_migration_path("Caribou", HabitatId(1), HabitatId(2), None)
        .unwrap();
    let run = migrations.schedule_migration(path, "2024-04-01").unwrap();

    migrations
        .update_migration(
            run,
            MigrationUpdate {
                status: Some(MigrationStatus::Completed),
                ..Default::default()
            },
        )
        .unwrap();

    assert!(matches!(
        migrations.cancel_migration(run),
        Err(MealMaxError::Validation(_))
    ));
    migrations.remove_migration_path(path).unwrap();
    assert_eq!(migrations.get_migrations().len(), 1);
}

#[test]
fn test_from_animals_rejects_duplicate_ids() {
    let result = AnimalManager::from_animals([
        Animal::new(AnimalId(1), "Lion"),
        Animal::new(AnimalId(1), "Leopard"),
    ]);
    assert!(matches!(result, Err(MealMaxError::Duplicate(_))));
}

//! Battle integration tests
//!
//! Drives the roster and resolver against the kitchen, the way the binary does.

use meal_max::battle::{BattleModel, StatsRecorder};
use meal_max::core::config::BattleConfig;
use meal_max::core::error::{MealMaxError, Result};
use meal_max::core::types::{MealId, Outcome, Tier};
use meal_max::kitchen::{Kitchen, LeaderboardSort, Meal};
use rand::rngs::mock::StepRng;

fn sample_meal1() -> Meal {
    Meal::new(MealId(1), "Meal 1", "French", 15.0, Tier::Low).unwrap()
}

fn sample_meal2() -> Meal {
    Meal::new(MealId(2), "Meal 2", "Italian", 20.0, Tier::High).unwrap()
}

fn sample_kitchen() -> Kitchen {
    let mut kitchen = Kitchen::new();
    kitchen.create_meal("Meal 1", "French", 15.0, Tier::Low).unwrap();
    kitchen.create_meal("Meal 2", "Italian", 20.0, Tier::High).unwrap();
    kitchen
}

/// Stats sink that remembers every report
#[derive(Default)]
struct StatsLog(Vec<(MealId, Outcome)>);

impl StatsRecorder for StatsLog {
    fn record_result(&mut self, id: MealId, outcome: Outcome) -> Result<()> {
        self.0.push((id, outcome));
        Ok(())
    }
}

#[test]
fn test_battle_example_reports_both_sides() {
    let mut model = BattleModel::with_seed(BattleConfig::default(), 2024);
    model.prep_combatant(sample_meal1()).unwrap();
    model.prep_combatant(sample_meal2()).unwrap();

    let mut stats = StatsLog::default();
    let report = model.battle(&mut stats).unwrap();

    assert_eq!(model.get_combatants().len(), 1);
    let winner = model.get_combatants()[0].id();
    let loser = if winner == MealId(1) { MealId(2) } else { MealId(1) };

    assert_eq!(report.winner, winner);
    assert_eq!(report.loser, loser);
    assert_eq!(stats.0.len(), 2);
    assert!(stats.0.contains(&(winner, Outcome::Win)));
    assert!(stats.0.contains(&(loser, Outcome::Loss)));
}

#[test]
fn test_battle_updates_kitchen_stats() {
    let mut kitchen = sample_kitchen();
    let mut model = BattleModel::with_rng(BattleConfig::default(), StepRng::new(0, 0));
    model.prep_from_catalog(&kitchen, "Meal 1").unwrap();
    model.prep_from_catalog(&kitchen, "Meal 2").unwrap();

    let report = model.battle(&mut kitchen).unwrap();
    assert_eq!(report.winner, MealId(1));

    assert_eq!(kitchen.stats(MealId(1)).unwrap(), (1, 1));
    assert_eq!(kitchen.stats(MealId(2)).unwrap(), (1, 0));

    let board = kitchen.get_leaderboard(LeaderboardSort::Wins);
    assert_eq!(board[0].id, MealId(1));
    assert_eq!(board[0].win_pct, 100.0);
    assert_eq!(board[1].win_pct, 0.0);
}

#[test]
fn test_stats_failure_is_propagated_and_roster_kept() {
    let mut kitchen = sample_kitchen();
    let mut model = BattleModel::with_rng(BattleConfig::default(), StepRng::new(0, 0));
    model.prep_from_catalog(&kitchen, "Meal 1").unwrap();
    model.prep_from_catalog(&kitchen, "Meal 2").unwrap();

    // The winner disappears from the catalog between prep and battle
    kitchen.delete_meal(MealId(1)).unwrap();

    let err = model.battle(&mut kitchen).unwrap_err();
    assert!(matches!(err, MealMaxError::Deleted(_)));
    assert_eq!(err.to_string(), "Meal with ID 1 has been deleted");
    assert_eq!(model.get_combatants().len(), 2);
    assert_eq!(kitchen.stats(MealId(2)).unwrap(), (0, 0));
}

#[test]
fn test_deleted_loser_leaves_winner_stats_alone() {
    let mut kitchen = sample_kitchen();
    let mut model = BattleModel::with_rng(BattleConfig::default(), StepRng::new(0, 0));
    model.prep_from_catalog(&kitchen, "Meal 1").unwrap();
    model.prep_from_catalog(&kitchen, "Meal 2").unwrap();

    // Meal 1 wins on a zero draw; its opponent is gone before the result lands
    kitchen.delete_meal(MealId(2)).unwrap();

    let err = model.battle(&mut kitchen).unwrap_err();
    assert_eq!(err.to_string(), "Meal with ID 2 has been deleted");
    assert_eq!(model.get_combatants().len(), 2);
    assert_eq!(kitchen.stats(MealId(1)).unwrap(), (0, 0));

    // A retry fails the same way and still credits nothing
    assert!(model.battle(&mut kitchen).is_err());
    assert_eq!(kitchen.stats(MealId(1)).unwrap(), (0, 0));
}

#[test]
fn test_winner_stays_for_next_challenger() {
    let mut kitchen = sample_kitchen();
    kitchen.create_meal("Meal 3", "Thai", 9.0, Tier::Med).unwrap();

    let mut model = BattleModel::with_seed(BattleConfig::default(), 11);
    model.prep_from_catalog(&kitchen, "Meal 1").unwrap();
    model.prep_from_catalog(&kitchen, "Meal 2").unwrap();
    let first = model.battle(&mut kitchen).unwrap();

    model.prep_from_catalog(&kitchen, "Meal 3").unwrap();
    assert_eq!(model.get_combatants()[0].id(), first.winner);

    let second = model.battle(&mut kitchen).unwrap();
    assert!(second.winner == first.winner || second.winner == MealId(3));

    let total_battles: u32 = kitchen
        .get_leaderboard(LeaderboardSort::Wins)
        .iter()
        .map(|entry| entry.battles)
        .sum();
    assert_eq!(total_battles, 4);
}

#[test]
fn test_prep_unknown_meal() {
    let kitchen = sample_kitchen();
    let mut model = BattleModel::with_seed(BattleConfig::default(), 3);

    let err = model.prep_from_catalog(&kitchen, "Meal 9").unwrap_err();
    assert!(matches!(err, MealMaxError::NotFound(_)));
    assert!(model.get_combatants().is_empty());
}

#[test]
fn test_remove_and_clear_combatants() {
    let mut model = BattleModel::with_seed(BattleConfig::default(), 5);
    model.prep_combatant(sample_meal1()).unwrap();
    model.prep_combatant(sample_meal2()).unwrap();

    let removed = model.remove_combatant(MealId(1)).unwrap();
    assert_eq!(removed.meal(), "Meal 1");
    assert!(matches!(
        model.remove_combatant(MealId(1)),
        Err(MealMaxError::NotFound(_))
    ));

    model.clear_combatants();
    assert!(model.get_combatants().is_empty());
    model.clear_combatants();
    assert!(model.get_combatants().is_empty());
}

#[test]
fn test_configured_penalties_change_scores() {
    let config = BattleConfig::from_toml_str(
        r#"
        [tier_penalties]
        low = 1.0
        med = 2.0
        high = 3.0
        "#,
    )
    .unwrap();
    let model = BattleModel::with_seed(config, 1);

    assert_eq!(model.get_battle_score(&sample_meal1()), 89.0);
    assert_eq!(model.get_battle_score(&sample_meal2()), 117.0);
}

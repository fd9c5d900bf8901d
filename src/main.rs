//! Meal Max - Entry Point
//!
//! Loads a meal catalog, runs king-of-the-hill battles between the chosen
//! meals and prints the resulting leaderboard.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use meal_max::battle::BattleModel;
use meal_max::core::config::{load_config, BattleConfig};
use meal_max::core::error::{MealMaxError, Result};
use meal_max::kitchen::{Kitchen, LeaderboardEntry, LeaderboardSort};

/// Catalog used when no `--catalog` file is given
const DEMO_CATALOG: &str = r#"
[[meals]]
meal = "Spaghetti Carbonara"
cuisine = "Italian"
price = 14.5
difficulty = "MED"

[[meals]]
meal = "Pad Thai"
cuisine = "Thai"
price = 11.0
difficulty = "LOW"

[[meals]]
meal = "Beef Wellington"
cuisine = "British"
price = 32.0
difficulty = "HIGH"

[[meals]]
meal = "Ramen"
cuisine = "Japanese"
price = 12.0
difficulty = "MED"
"#;

/// Meal Max - run meal battles and print the leaderboard
#[derive(Parser, Debug)]
#[command(name = "meal-max")]
#[command(about = "Run king-of-the-hill meal battles and print the leaderboard")]
struct Args {
    /// Meal catalog TOML file (a built-in demo catalog is used if omitted)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Battle config TOML file (tier penalties, scaling constant)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// How many times to run through the meal list
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Leaderboard order: wins or win_pct
    #[arg(long, default_value = "wins")]
    sort: String,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Meals to battle, in order (defaults to the whole catalog)
    meals: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("meal_max=info")),
        )
        .init();

    let args = Args::parse();
    let sort: LeaderboardSort = args.sort.parse()?;

    let mut kitchen = match &args.catalog {
        Some(path) => Kitchen::load_catalog(path)?,
        None => Kitchen::from_toml_str(DEMO_CATALOG)?,
    };

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => BattleConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Meal Max starting with seed {}", seed);
    let mut model = BattleModel::with_seed(config, seed);

    let lineup: Vec<String> = if args.meals.is_empty() {
        kitchen.meals().iter().map(|meal| meal.meal().to_string()).collect()
    } else {
        args.meals.clone()
    };
    if lineup.len() < 2 {
        return Err(MealMaxError::InsufficientCombatants(lineup.len()));
    }

    for round in 1..=args.rounds {
        if !model.get_combatants().is_empty() {
            model.clear_combatants();
        }

        let mut names = lineup.iter();
        if let Some(first) = names.next() {
            model.prep_from_catalog(&kitchen, first)?;
        }

        // The winner stays in the roster and meets the next challenger
        for challenger in names {
            model.prep_from_catalog(&kitchen, challenger)?;
            let report = model.battle(&mut kitchen)?;
            tracing::info!(
                "Round {}: meal {} beat meal {} (p={:.2}, draw={:.2})",
                round,
                report.winner,
                report.loser,
                report.win_probability,
                report.draw
            );
        }
    }

    let board = kitchen.get_leaderboard(sort);
    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&board)?),
        "text" => print!("{}", render_table(&board)),
        other => {
            eprintln!("Unknown format '{}', defaulting to text", other);
            print!("{}", render_table(&board));
        }
    }

    Ok(())
}

/// Fixed-width leaderboard table, one line per entry after the header
fn render_table(board: &[LeaderboardEntry]) -> String {
    let mut table = format!(
        "{:<4} {:<24} {:<12} {:>7} {:>5} {:>7}\n",
        "ID", "Meal", "Cuisine", "Battles", "Wins", "Win %"
    );
    for entry in board {
        table.push_str(&format!(
            "{:<4} {:<24} {:<12} {:>7} {:>5} {:>7.1}\n",
            entry.id.0, entry.meal, entry.cuisine, entry.battles, entry.wins, entry.win_pct
        ));
    }
    table
}

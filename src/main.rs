use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use pantryswipe::config::Config;
use pantryswipe::observability::init_observability;
use pantryswipe::store;
use pantryswipe_mealplan::{Day, Meal};
use pantryswipe_pantry::PantryEntry;
use pantryswipe_shopping::{
    compute_grocery_list, distribute, format_quantity, pantry_display_line, to_base_lenient,
};

/// pantryswipe - pantry tracking and meal-plan grocery lists
#[derive(Parser)]
#[command(name = "pantryswipe")]
#[command(about = "Pantry tracking and meal-plan grocery lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or change the pantry
    Pantry {
        #[command(subcommand)]
        command: PantryCommands,
    },
    /// Inspect or change the weekly meal plan
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Derive the grocery list from the planned meals
    Grocery {
        /// Also print lines the pantry already covers
        #[arg(long)]
        all: bool,
    },
    /// Convert an amount to an ingredient's base unit
    Convert {
        ingredient: String,
        amount: f64,
        unit: String,
    },
}

#[derive(Subcommand)]
enum PantryCommands {
    /// List pantry contents with aggregated quantities
    Show,
    /// Add an amount of a catalog ingredient
    Add {
        ingredient: String,
        amount: f64,
        unit: String,
    },
    /// Remove an ingredient entirely
    Remove { ingredient: String },
    /// Mark a grocery line as owned ("I have this")
    Have { text: String },
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Show the planned recipes
    Show,
    /// Clear one slot (e.g. monday dinner)
    Remove { day: String, meal: String },
    /// Clear the whole plan
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_observability(&config.observability.log_level)?;
    tracing::debug!(data = ?config.data, "configuration loaded");

    match cli.command {
        Commands::Pantry { command } => match command {
            PantryCommands::Show => pantry_show(&config),
            PantryCommands::Add {
                ingredient,
                amount,
                unit,
            } => pantry_add(&config, &ingredient, amount, &unit),
            PantryCommands::Remove { ingredient } => pantry_remove(&config, &ingredient),
            PantryCommands::Have { text } => pantry_have(&config, &text),
        },
        Commands::Plan { command } => match command {
            PlanCommands::Show => plan_show(&config),
            PlanCommands::Remove { day, meal } => plan_remove(&config, &day, &meal),
            PlanCommands::Clear => plan_clear(&config),
        },
        Commands::Grocery { all } => grocery(&config, all),
        Commands::Convert {
            ingredient,
            amount,
            unit,
        } => convert(&config, &ingredient, amount, &unit),
    }
}

fn pantry_show(config: &Config) -> Result<()> {
    let catalog = store::load_catalog(Path::new(&config.data.catalog_path))?;
    let pantry = store::load_pantry(Path::new(&config.data.pantry_path))?;

    for (id, entries) in pantry.grouped() {
        let line = pantry_display_line(catalog.get(id), id, entries.iter().copied());
        println!("{line}");
    }
    for line in pantry.free_texts() {
        println!("{line}");
    }
    Ok(())
}

fn pantry_add(config: &Config, ingredient: &str, amount: f64, unit: &str) -> Result<()> {
    let catalog = store::load_catalog(Path::new(&config.data.catalog_path))?;
    let pantry_path = Path::new(&config.data.pantry_path);
    let mut pantry = store::load_pantry(pantry_path)?;

    let def = catalog.get(ingredient);
    let normalized = to_base_lenient(def, ingredient, amount, unit)?;
    pantry.add_entry(PantryEntry {
        ingredient_id: ingredient.to_string(),
        quantity: amount,
        unit: unit.to_string(),
        normalized,
    });
    store::save_pantry(pantry_path, &pantry)?;

    if let Some((_, entries)) = pantry.grouped().iter().find(|(id, _)| *id == ingredient) {
        let line = pantry_display_line(def, ingredient, entries.iter().copied());
        println!("{line}");
    }
    Ok(())
}

fn pantry_remove(config: &Config, ingredient: &str) -> Result<()> {
    let pantry_path = Path::new(&config.data.pantry_path);
    let mut pantry = store::load_pantry(pantry_path)?;
    let removed = pantry.remove_ingredient(ingredient);
    if removed == 0 {
        bail!("no pantry entries for '{ingredient}'");
    }
    store::save_pantry(pantry_path, &pantry)?;
    println!("removed {removed} entries of {ingredient}");
    Ok(())
}

fn pantry_have(config: &Config, text: &str) -> Result<()> {
    let pantry_path = Path::new(&config.data.pantry_path);
    let mut pantry = store::load_pantry(pantry_path)?;
    pantry.record_owned(text);
    store::save_pantry(pantry_path, &pantry)?;
    Ok(())
}

fn plan_show(config: &Config) -> Result<()> {
    let plan = store::load_meal_plan(Path::new(&config.data.mealplan_path))?;
    for recipe in plan.recipes() {
        println!("{}", recipe.title);
    }
    Ok(())
}

fn plan_remove(config: &Config, day: &str, meal: &str) -> Result<()> {
    let plan_path = Path::new(&config.data.mealplan_path);
    let mut plan = store::load_meal_plan(plan_path)?;
    let day = Day::from_str(day).map_err(|_| anyhow::anyhow!("unknown day '{day}'"))?;
    let meal = Meal::from_str(meal).map_err(|_| anyhow::anyhow!("unknown meal '{meal}'"))?;
    match plan.remove(day, meal) {
        Some(recipe) => {
            store::save_meal_plan(plan_path, &plan)?;
            println!("removed {}", recipe.title);
            Ok(())
        }
        None => bail!("nothing planned for {day} {meal}"),
    }
}

fn plan_clear(config: &Config) -> Result<()> {
    let plan_path = Path::new(&config.data.mealplan_path);
    let mut plan = store::load_meal_plan(plan_path)?;
    plan.clear();
    store::save_meal_plan(plan_path, &plan)?;
    Ok(())
}

fn grocery(config: &Config, all: bool) -> Result<()> {
    let pantry = store::load_pantry(Path::new(&config.data.pantry_path))?;
    let plan = store::load_meal_plan(Path::new(&config.data.mealplan_path))?;

    for item in compute_grocery_list(&plan, &pantry) {
        if item.already_owned {
            if all {
                println!("{} (owned)", item.display_text);
            }
        } else {
            println!("{}", item.display_text);
        }
    }
    Ok(())
}

fn convert(config: &Config, ingredient: &str, amount: f64, unit: &str) -> Result<()> {
    let catalog = store::load_catalog(Path::new(&config.data.catalog_path))?;
    let def = catalog.get(ingredient);
    let base = to_base_lenient(def, ingredient, amount, unit)?;

    match def {
        Some(def) => {
            println!("{base} {}", def.base_unit);
            println!("{}", format_quantity(def, &distribute(def, base)));
        }
        None => println!("{base} (no catalog entry, assumed base units)"),
    }
    Ok(())
}

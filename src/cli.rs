use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ConfigOverrides;

/// Config file read when `--config` is not given. Optional.
pub const DEFAULT_CONFIG_PATH: &str = "mealplan.toml";

/// Meal Planner — picks a week of meals under a budget, favoring what is
/// already in the pantry.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the TOML config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log planner decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan meals for the week.
    Plan(PlanArgs),

    /// Check recipes, prices and config for likely mistakes.
    Check(InputArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

/// Where to read recipe and price tables from.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Recipe CSV (overrides the config file).
    #[arg(long)]
    pub recipes: Option<PathBuf>,

    /// Ingredient price CSV (overrides the config file).
    #[arg(long)]
    pub prices: Option<PathBuf>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Total budget for the week.
    #[arg(long)]
    pub budget: Option<f64>,

    /// Number of meals to plan.
    #[arg(long)]
    pub days: Option<usize>,

    /// Maximum preparation time per meal, in minutes.
    #[arg(long = "max-time")]
    pub max_time: Option<u32>,

    /// Ingredient to exclude entirely. Repeatable.
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,

    /// Exclude meals with animal products.
    #[arg(long)]
    pub vegetarian: bool,

    /// Ask for constraints interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// Also list skipped and rejected recipes with reasons.
    #[arg(long)]
    pub explain: bool,

    /// Print the plan as JSON.
    #[arg(long, conflicts_with = "explain")]
    pub json: bool,
}

impl InputArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            recipes: self.recipes.clone(),
            prices: self.prices.clone(),
            ..Default::default()
        }
    }
}

impl PlanArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            budget: self.budget,
            days: self.days,
            max_time_per_meal: self.max_time,
            allergies: self.allergies.clone(),
            vegetarian: self.vegetarian.then_some(true),
            ..self.input.overrides()
        }
    }
}

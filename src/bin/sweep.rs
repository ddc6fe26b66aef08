use std::path::PathBuf;

use clap::Parser;

use meal_planner_rs::cli::DEFAULT_CONFIG_PATH;
use meal_planner_rs::config::PlannerConfig;
use meal_planner_rs::data::{load_prices, load_recipes};
use meal_planner_rs::logging::init_tracing;
use meal_planner_rs::sweep::{print_table, run_sweep, write_csv, write_json, SweepConfig};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Run the weekly planner across a range of budgets")]
struct Args {
    /// Budgets to evaluate (comma-separated)
    #[arg(long, default_value = "5,10,20,40")]
    budgets: String,

    /// Path to the TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of meals to plan (overrides the config file)
    #[arg(long)]
    days: Option<usize>,

    /// Output CSV file for all results
    #[arg(long, default_value = "sweep_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the summary
    #[arg(long, default_value = "sweep_summary.json")]
    json: PathBuf,

    /// Log planner decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_budgets(s: &str) -> Vec<f64> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_tracing(args.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let config = match &args.config {
        Some(path) => PlannerConfig::load(path, true),
        None => PlannerConfig::load(DEFAULT_CONFIG_PATH, false),
    };
    let mut config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(days) = args.days {
        config.days = days;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let recipes = match load_recipes(&config.data.recipes) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error reading recipes {:?}: {}", config.data.recipes, e);
            std::process::exit(1);
        }
    };
    let prices = match load_prices(&config.data.prices) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error reading prices {:?}: {}", config.data.prices, e);
            std::process::exit(1);
        }
    };

    println!("Loaded {} recipes and {} prices", recipes.len(), prices.len());

    let budgets = parse_budgets(&args.budgets);
    if budgets.is_empty() {
        eprintln!("Error: no valid budgets provided");
        std::process::exit(1);
    }
    println!("Testing budgets: {:?}", budgets);

    let sweep_config = SweepConfig {
        budgets,
        base: config.constraints(),
    };
    let sweep = run_sweep(&sweep_config, &recipes, &prices, &config.pantry());

    print_table(&sweep);

    if let Err(e) = write_csv(&sweep.results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all results to {:?}", args.csv);
    }

    if let Err(e) = write_json(&sweep, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }
}

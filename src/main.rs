use clap::Parser;
use tracing::warn;

use meal_planner_rs::cli::{Cli, Command, InputArgs, PlanArgs, DEFAULT_CONFIG_PATH};
use meal_planner_rs::config::PlannerConfig;
use meal_planner_rs::data::{check_inputs, load_prices, load_recipes, RecipeCatalog};
use meal_planner_rs::error::Result;
use meal_planner_rs::interface::{
    collect_user_constraints, display_meal_plan, display_meal_plan_json, render_input_report,
};
use meal_planner_rs::logging::init_tracing;
use meal_planner_rs::planner::plan_week;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => PlannerConfig::load(path, true)?,
        None => PlannerConfig::load(DEFAULT_CONFIG_PATH, false)?,
    };

    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(config, &args),
        Command::Check(args) => cmd_check(config, &args),
    }
}

fn load_catalog(config: &PlannerConfig) -> Result<RecipeCatalog> {
    let recipes = load_recipes(&config.data.recipes)?;
    let prices = load_prices(&config.data.prices)?;
    Ok(RecipeCatalog::new(recipes, prices))
}

/// Plan the week and print the report.
fn cmd_plan(mut config: PlannerConfig, args: &PlanArgs) -> Result<()> {
    config.apply_validated(args.overrides())?;
    let catalog = load_catalog(&config)?;

    if catalog.is_empty() {
        warn!(path = %config.data.recipes.display(), "no recipes loaded");
    }

    if args.interactive {
        let answers = collect_user_constraints(&config, &catalog)?;
        config.apply_validated(answers)?;
        println!();
    }

    let pantry = config.pantry();
    let constraints = config.constraints();
    let plan = plan_week(catalog.recipes(), catalog.prices(), &pantry, &constraints);

    if args.json {
        display_meal_plan_json(&plan)?;
    } else {
        display_meal_plan(&plan, pantry.len(), args.explain);
    }

    Ok(())
}

/// Report inputs that would silently change the plan.
fn cmd_check(mut config: PlannerConfig, args: &InputArgs) -> Result<()> {
    config.apply_validated(args.overrides())?;

    let catalog = load_catalog(&config)?;
    let report = check_inputs(&catalog, &config.pantry(), &config.constraints());

    print!("{}", render_input_report(&report, catalog.len()));
    Ok(())
}

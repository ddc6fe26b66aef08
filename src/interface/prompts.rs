use dialoguer::{Confirm, Input, Select};

use crate::config::{ConfigOverrides, PlannerConfig};
use crate::data::RecipeCatalog;
use crate::error::{PlanError, Result};
use crate::planner::constants::{DIET_VEGETARIAN, MAX_PROMPT_CHOICES, PROMPT_MATCH_THRESHOLD};

/// Prompt for the weekly budget.
pub fn prompt_budget(current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What is your budget for the week?")
        .default(format!("{:.2}", current))
        .interact_text()?;

    let budget: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    if !budget.is_finite() || budget < 0.0 {
        return Err(PlanError::InvalidInput(
            "Budget must be zero or more".to_string(),
        ));
    }

    Ok(budget)
}

/// Prompt for the number of meals to plan.
pub fn prompt_days(current: usize) -> Result<usize> {
    let input: String = Input::new()
        .with_prompt("How many days should the plan cover?")
        .default(current.to_string())
        .interact_text()?;

    match input.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(PlanError::InvalidInput(
            "Days must be a positive whole number".to_string(),
        )),
        Ok(days) => Ok(days),
    }
}

/// Prompt for the longest acceptable preparation time.
pub fn prompt_max_time(current: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Maximum minutes per meal?")
        .default(current.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number of minutes".to_string()))
}

/// Prompt for allergies, matching each against known ingredients.
///
/// Exact (case-insensitive) matches are taken as-is; otherwise close
/// candidates are offered. A name nobody recognizes can still be kept.
pub fn prompt_allergies(catalog: &RecipeCatalog) -> Result<Vec<String>> {
    let mut allergies = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter an allergy (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        if let Some(name) = catalog.find_ingredient(input) {
            allergies.push(name.to_string());
            println!("Added: {}", name);
            continue;
        }

        let candidates = catalog.similar_ingredients(input, PROMPT_MATCH_THRESHOLD);

        if candidates.is_empty() {
            if prompt_yes_no(
                &format!("No recipe uses '{}'. Keep it anyway?", input),
                true,
            )? {
                allergies.push(input.to_string());
                println!("Added: {}", input);
            }
            continue;
        }

        if candidates.len() == 1 {
            let name = candidates[0].0;
            if prompt_yes_no(&format!("Did you mean '{}'?", name), true)? {
                allergies.push(name.to_string());
                println!("Added: {}", name);
            }
        } else {
            // Multiple matches - let user select
            let options: Vec<String> = candidates
                .iter()
                .take(MAX_PROMPT_CHOICES)
                .map(|(name, _)| name.to_string())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push(format!("Keep '{}' as typed", input));
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                allergies.push(options[selection].clone());
                println!("Added: {}", options[selection]);
            } else if selection == options.len() {
                allergies.push(input.to_string());
                println!("Added: {}", input);
            }
        }
    }

    Ok(allergies)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask for every planning constraint, starting from the configured values.
pub fn collect_user_constraints(
    config: &PlannerConfig,
    catalog: &RecipeCatalog,
) -> Result<ConfigOverrides> {
    let budget = prompt_budget(config.budget)?;
    let days = prompt_days(config.days)?;
    let max_time = prompt_max_time(config.max_time_per_meal)?;
    let vegetarian_now = config.diet.get(DIET_VEGETARIAN).copied().unwrap_or(false);
    let vegetarian = prompt_yes_no("Vegetarian meals only?", vegetarian_now)?;
    let allergies = prompt_allergies(catalog)?;

    Ok(ConfigOverrides {
        budget: Some(budget),
        days: Some(days),
        max_time_per_meal: Some(max_time),
        allergies,
        vegetarian: Some(vegetarian),
        ..Default::default()
    })
}

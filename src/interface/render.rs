use std::fmt::{self, Write};

use crate::data::InputReport;
use crate::error::Result;
use crate::models::{MealPlan, SkipReason};

/// Write a meal plan as the human-readable weekly report.
pub fn write_meal_plan(out: &mut impl Write, plan: &MealPlan, pantry_size: usize) -> fmt::Result {
    writeln!(out, "=== Weekly Meal Plan ===")?;
    writeln!(
        out,
        "Budget: {:.2} | Pantry items: {} | Target days: {}",
        plan.budget, pantry_size, plan.days
    )?;
    writeln!(
        out,
        "Chosen meals: {} | Estimated new-cost: {:.2}",
        plan.len(),
        plan.total_spend
    )?;
    writeln!(out)?;

    for (i, entry) in plan.entries.iter().enumerate() {
        writeln!(
            out,
            "{}. {}  ({} min)  new-cost≈ {:.2}",
            i + 1,
            entry.recipe.title,
            entry.recipe.time,
            entry.cost
        )?;
        writeln!(out, "   ingredients: {}", entry.recipe.ingredients.join(", "))?;
    }

    if plan.is_partial() {
        writeln!(out)?;
        writeln!(
            out,
            "Note: Not enough compatible recipes under budget/time constraints."
        )?;
    }

    for diet in &plan.unenforced_diets {
        writeln!(
            out,
            "Note: '{}' is requested but not enforced yet; recipes were not checked against it.",
            diet
        )?;
    }

    Ok(())
}

/// Write why recipes were left out of the plan.
pub fn write_explanation(out: &mut impl Write, plan: &MealPlan) -> fmt::Result {
    writeln!(out, "--- Skipped during selection ---")?;
    if plan.skipped.is_empty() {
        writeln!(out, "(none)")?;
    }
    for skip in &plan.skipped {
        let reason = match &skip.reason {
            SkipReason::DuplicateTitle => "title already chosen".to_string(),
            SkipReason::OverBudget { spend } => format!(
                "{:.2} + {:.2} exceeds budget {:.2}",
                spend, skip.cost, plan.budget
            ),
        };
        writeln!(
            out,
            "  {} (score {:.3}, cost {:.2}): {}",
            skip.title, skip.score, skip.cost, reason
        )?;
    }

    writeln!(out, "--- Rejected by constraints ---")?;
    if plan.rejected.is_empty() {
        writeln!(out, "(none)")?;
    }
    for rejected in &plan.rejected {
        writeln!(out, "  {}: {}", rejected.title, rejected.rejection)?;
    }

    Ok(())
}

pub fn render_meal_plan(plan: &MealPlan, pantry_size: usize) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_meal_plan(&mut out, plan, pantry_size);
    out
}

pub fn render_explanation(plan: &MealPlan) -> String {
    let mut out = String::new();
    let _ = write_explanation(&mut out, plan);
    out
}

/// Display a meal plan on stdout.
pub fn display_meal_plan(plan: &MealPlan, pantry_size: usize, explain: bool) {
    print!("{}", render_meal_plan(plan, pantry_size));
    if explain {
        println!();
        print!("{}", render_explanation(plan));
    }
}

/// Print a meal plan as pretty JSON.
pub fn display_meal_plan_json(plan: &MealPlan) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(plan)?);
    Ok(())
}

/// Write the result of an input check.
pub fn write_input_report(
    out: &mut impl Write,
    report: &InputReport,
    recipe_count: usize,
) -> fmt::Result {
    writeln!(
        out,
        "{} recipes loaded, {} pass the hard constraints",
        recipe_count, report.compatible
    )?;

    for (label, names) in [
        ("Pantry item", &report.unknown_pantry),
        ("Allergy", &report.unknown_allergies),
    ] {
        for unknown in names {
            match &unknown.suggestion {
                Some(s) => {
                    writeln!(
                        out,
                        "{} '{}' matches no known ingredient (did you mean '{}'?)",
                        label, unknown.name, s
                    )?;
                }
                None => {
                    writeln!(
                        out,
                        "{} '{}' matches no known ingredient",
                        label, unknown.name
                    )?;
                }
            }
        }
    }

    for (title, ids) in &report.duplicate_titles {
        let ids: Vec<String> = ids.iter().map(u32::to_string).collect();
        writeln!(
            out,
            "Title '{}' is shared by recipes {}; only one can be planned",
            title,
            ids.join(", ")
        )?;
    }

    if !report.unpriced.is_empty() {
        writeln!(
            out,
            "No price for {} ingredient(s), default estimate used: {}",
            report.unpriced.len(),
            report.unpriced.join(", ")
        )?;
    }

    for diet in &report.unenforced_diets {
        writeln!(out, "Diet '{}' is requested but not enforced yet", diet)?;
    }

    if report.is_clean() {
        writeln!(out, "No problems found.")?;
    }

    Ok(())
}

pub fn render_input_report(report: &InputReport, recipe_count: usize) -> String {
    let mut out = String::new();
    let _ = write_input_report(&mut out, report, recipe_count);
    out
}

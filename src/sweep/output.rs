use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::sweep::evaluation::BudgetResult;
use crate::sweep::search::SweepResults;

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write one row per budget to a CSV file.
pub fn write_csv(results: &[BudgetResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "budget",
        "meals",
        "total_spend",
        "unused_budget",
        "utilization",
        "mean_score",
        "titles",
    ])?;

    for result in results {
        wtr.write_record([
            format!("{:.2}", result.budget),
            result.meals.to_string(),
            format!("{:.2}", result.total_spend),
            format!("{:.2}", result.unused_budget()),
            format!("{:.3}", result.utilization()),
            format!("{:.3}", result.mean_score),
            result.titles.join(";"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the sweep summary to a JSON file with rounded floats.
pub fn write_json(sweep: &SweepResults, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "budgets": sweep.results.iter().map(|r| {
            serde_json::json!({
                "budget": truncate(r.budget, 2),
                "meals": r.meals,
                "total_spend": truncate(r.total_spend, 2),
                "unused_budget": truncate(r.unused_budget(), 2),
                "utilization": truncate(r.utilization(), 3),
                "mean_score": truncate(r.mean_score, 3),
                "titles": r.titles,
            })
        }).collect::<Vec<_>>(),
        "shrinking_budgets": sweep
            .shrinking
            .iter()
            .map(|&i| truncate(sweep.results[i].budget, 2))
            .collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print the sweep as a table on stdout.
pub fn print_table(sweep: &SweepResults) {
    println!("\n=== Budget Sweep ({} budgets) ===\n", sweep.results.len());
    println!(
        "{:>10} {:>6} {:>10} {:>10} {:>8}",
        "budget", "meals", "spend", "unused", "score"
    );

    for (i, result) in sweep.results.iter().enumerate() {
        let marker = if sweep.shrinking.contains(&i) { "  ▼ fewer meals" } else { "" };
        println!(
            "{:>10.2} {:>6} {:>10.2} {:>10.2} {:>8.3}{}",
            result.budget,
            result.meals,
            result.total_spend,
            result.unused_budget(),
            result.mean_score,
            marker
        );
    }

    if !sweep.shrinking.is_empty() {
        println!();
        println!("▼ A larger budget let an expensive high scorer crowd out cheaper meals.");
        println!("  Selection is greedy and never revisits a choice.");
    }
    println!();
}

use tracing::info;

use crate::models::{Constraints, Pantry, PriceTable, Recipe};
use crate::sweep::evaluation::{evaluate_budget, shrinking_budgets, BudgetResult};

/// Configuration for a budget sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub budgets: Vec<f64>,
    /// Everything but the budget.
    pub base: Constraints,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            budgets: vec![5.0, 10.0, 20.0, 40.0],
            base: Constraints::default(),
        }
    }
}

/// Results from a sweep, in ascending budget order.
#[derive(Debug)]
pub struct SweepResults {
    pub results: Vec<BudgetResult>,
    /// Indices into `results` where the plan got shorter as budget grew.
    pub shrinking: Vec<usize>,
}

/// Plan once per budget. Negative, non-finite and repeated budgets are dropped.
pub fn run_sweep(
    config: &SweepConfig,
    recipes: &[Recipe],
    prices: &PriceTable,
    pantry: &Pantry,
) -> SweepResults {
    let mut budgets: Vec<f64> = config
        .budgets
        .iter()
        .copied()
        .filter(|b| b.is_finite() && *b >= 0.0)
        .collect();
    budgets.sort_by(f64::total_cmp);
    budgets.dedup();

    let results: Vec<BudgetResult> = budgets
        .into_iter()
        .map(|budget| {
            let result = evaluate_budget(recipes, prices, pantry, &config.base, budget);
            info!(budget, meals = result.meals, spend = result.total_spend, "budget evaluated");
            result
        })
        .collect();

    let shrinking = shrinking_budgets(&results);

    SweepResults { results, shrinking }
}

use crate::models::{Constraints, Pantry, PriceTable, Recipe};
use crate::planner::plan_week;

/// Outcome of planning at one budget.
#[derive(Debug, Clone)]
pub struct BudgetResult {
    pub budget: f64,
    pub meals: usize,
    pub total_spend: f64,
    pub mean_score: f64,
    pub titles: Vec<String>,
}

impl BudgetResult {
    pub fn unused_budget(&self) -> f64 {
        self.budget - self.total_spend
    }

    /// Share of the budget spent, 0.0 for a zero budget.
    pub fn utilization(&self) -> f64 {
        if self.budget > 0.0 {
            self.total_spend / self.budget
        } else {
            0.0
        }
    }
}

/// Plan at `budget`, keeping every other constraint from `base`.
pub fn evaluate_budget(
    recipes: &[Recipe],
    prices: &PriceTable,
    pantry: &Pantry,
    base: &Constraints,
    budget: f64,
) -> BudgetResult {
    let constraints = base.clone().with_budget(budget);
    let plan = plan_week(recipes, prices, pantry, &constraints);

    BudgetResult {
        budget,
        meals: plan.len(),
        total_spend: plan.total_spend,
        mean_score: plan.mean_score(),
        titles: plan.titles().into_iter().map(str::to_string).collect(),
    }
}

/// Indices of results whose plan is shorter than one at a smaller budget.
///
/// Greedy selection can spend a larger budget on one expensive high scorer
/// that crowds out several cheap meals. Expects results in ascending budget.
pub fn shrinking_budgets(results: &[BudgetResult]) -> Vec<usize> {
    let mut best_so_far = 0;
    let mut shrinking = Vec::new();

    for (i, result) in results.iter().enumerate() {
        if result.meals < best_so_far {
            shrinking.push(i);
        }
        best_so_far = best_so_far.max(result.meals);
    }

    shrinking
}

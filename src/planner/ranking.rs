use std::collections::HashSet;

use tracing::{debug, info};

use crate::models::{
    Constraints, MealPlan, Pantry, PlanEntry, PriceTable, Recipe, RejectedRecipe, SkipReason,
    SkippedCandidate,
};
use crate::planner::calculations::score;
use crate::planner::filter::RecipeFilter;

/// A recipe that passed the filter, with its computed score and cost.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub recipe: &'a Recipe,
    pub score: f64,
    pub cost: f64,
}

/// Filter and score recipes, then sort best first.
///
/// The sort is stable, so equal scores keep input order. Rejected recipes are
/// returned alongside.
pub fn rank_candidates<'a>(
    recipes: &'a [Recipe],
    prices: &PriceTable,
    pantry: &Pantry,
    filter: &RecipeFilter<'_>,
) -> (Vec<ScoredCandidate<'a>>, Vec<RejectedRecipe>) {
    let mut candidates = Vec::with_capacity(recipes.len());
    let mut rejected = Vec::new();

    for recipe in recipes {
        match filter.check(recipe) {
            Some(rejection) => {
                debug!(title = %recipe.title, reason = %rejection, "recipe rejected");
                rejected.push(RejectedRecipe {
                    id: recipe.id,
                    title: recipe.title.clone(),
                    rejection,
                });
            }
            None => {
                let (score, cost) = score(recipe, prices, pantry);
                candidates.push(ScoredCandidate {
                    recipe,
                    score,
                    cost,
                });
            }
        }
    }

    // Higher is better, so reverse the comparison
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    (candidates, rejected)
}

/// Greedily pick up to `constraints.days` distinct-titled meals within budget.
///
/// Single pass over candidates in score order: a candidate that does not fit
/// the remaining budget is skipped and never revisited. Returns a partial plan
/// when fewer meals fit. Never fails; a negative or NaN budget admits nothing.
pub fn plan_week(
    recipes: &[Recipe],
    prices: &PriceTable,
    pantry: &Pantry,
    constraints: &Constraints,
) -> MealPlan {
    let filter = RecipeFilter::new(constraints);
    let (candidates, rejected) = rank_candidates(recipes, prices, pantry, &filter);

    let budget = constraints.budget;
    let mut plan = MealPlan {
        budget,
        days: constraints.days,
        rejected,
        unenforced_diets: filter.unenforced_diets(),
        ..Default::default()
    };

    let mut spend = 0.0;
    let mut used_titles: HashSet<&str> = HashSet::new();

    for candidate in candidates {
        if plan.entries.len() >= constraints.days {
            break;
        }

        let recipe = candidate.recipe;

        let reason = if used_titles.contains(recipe.title.as_str()) {
            Some(SkipReason::DuplicateTitle)
        } else if spend + candidate.cost <= budget {
            None
        } else {
            Some(SkipReason::OverBudget { spend })
        };

        match reason {
            None => {
                debug!(
                    title = %recipe.title,
                    score = candidate.score,
                    cost = candidate.cost,
                    "meal chosen"
                );
                spend += candidate.cost;
                used_titles.insert(&recipe.title);
                plan.entries.push(PlanEntry {
                    recipe: recipe.clone(),
                    cost: candidate.cost,
                    score: candidate.score,
                });
            }
            Some(reason) => {
                debug!(title = %recipe.title, ?reason, "candidate skipped");
                plan.skipped.push(SkippedCandidate {
                    id: recipe.id,
                    title: recipe.title.clone(),
                    score: candidate.score,
                    cost: candidate.cost,
                    reason,
                });
            }
        }
    }

    plan.total_spend = spend;

    info!(
        meals = plan.entries.len(),
        days = plan.days,
        spend = plan.total_spend,
        "plan complete"
    );

    plan
}

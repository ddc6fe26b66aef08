use crate::models::{Pantry, PriceTable, Recipe};
use crate::planner::constants::*;

/// Estimated spend to buy every ingredient not already in the pantry.
///
/// Unpriced ingredients cost [`DEFAULT_INGREDIENT_PRICE`]. A name listed twice
/// is paid for twice. A fully stocked recipe costs exactly `0.0`.
pub fn estimate_missing_cost<S: AsRef<str>>(
    ingredients: &[S],
    prices: &PriceTable,
    pantry: &Pantry,
) -> f64 {
    ingredients
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !pantry.contains(*name))
        .map(|name| prices.get(name).copied().unwrap_or(DEFAULT_INGREDIENT_PRICE))
        // `sum()` of no floats is -0.0
        .fold(0.0, |acc, price| acc + price)
}

/// Fraction of a recipe's ingredients already owned.
///
/// An ingredient-less recipe has coverage 0.0 (denominator floored to 1).
pub fn pantry_coverage(recipe: &Recipe, pantry: &Pantry) -> f64 {
    recipe.owned_count(pantry) as f64 / recipe.ingredients.len().max(1) as f64
}

pub fn tag_bonus(recipe: &Recipe) -> f64 {
    if recipe.has_tag(QUICK_TAG) {
        QUICK_BONUS
    } else {
        0.0
    }
}

/// Penalty for having to shop. Linear in cost; can outweigh coverage.
#[inline]
pub fn cost_penalty(cost: f64) -> f64 {
    cost / COST_PENALTY_DIVISOR
}

/// Heuristic desirability and estimated purchase cost of a recipe.
///
/// Formula: coverage + tag bonus - cost / 10
pub fn score(recipe: &Recipe, prices: &PriceTable, pantry: &Pantry) -> (f64, f64) {
    let cost = estimate_missing_cost(&recipe.ingredients, prices, pantry);
    let score = pantry_coverage(recipe, pantry) + tag_bonus(recipe) - cost_penalty(cost);
    (score, cost)
}

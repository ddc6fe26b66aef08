use assert_float_eq::assert_float_absolute_eq;

use meal_planner_rs::models::{Pantry, PriceTable, Recipe};
use meal_planner_rs::planner::{
    cost_penalty, estimate_missing_cost, pantry_coverage, score, tag_bonus,
    DEFAULT_INGREDIENT_PRICE, QUICK_BONUS,
};

fn pantry(items: &[&str]) -> Pantry {
    items.iter().map(|s| s.to_string()).collect()
}

fn prices(items: &[(&str, f64)]) -> PriceTable {
    items.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_unknown_ingredient_uses_default_price() {
    let cost = estimate_missing_cost(&["saffron"], &PriceTable::new(), &Pantry::new());
    assert_float_absolute_eq!(cost, DEFAULT_INGREDIENT_PRICE, 1e-12);
}

#[test]
fn test_known_price_overrides_default() {
    let cost = estimate_missing_cost(
        &["saffron", "rice"],
        &prices(&[("saffron", 9.5), ("rice", 1.0)]),
        &pantry(&["rice"]),
    );
    assert_float_absolute_eq!(cost, 9.5, 1e-12);
}

#[test]
fn test_coverage_fractions() {
    let recipe = Recipe::new(1, "Fried Rice", &[], 15, &["rice", "egg", "peas", "ham"]);
    assert_float_absolute_eq!(pantry_coverage(&recipe, &pantry(&[])), 0.0, 1e-12);
    assert_float_absolute_eq!(pantry_coverage(&recipe, &pantry(&["rice"])), 0.25, 1e-12);
    assert_float_absolute_eq!(
        pantry_coverage(&recipe, &pantry(&["rice", "egg", "peas", "ham"])),
        1.0,
        1e-12
    );
}

#[test]
fn test_only_quick_tag_earns_bonus() {
    let quick = Recipe::new(1, "Toast", &["quick", "cheap"], 5, &["bread"]);
    let slow = Recipe::new(2, "Roast", &["cheap", "Quick"], 120, &["lamb"]);
    assert_float_absolute_eq!(tag_bonus(&quick), QUICK_BONUS, 1e-12);
    assert_float_absolute_eq!(tag_bonus(&slow), 0.0, 1e-12);
}

#[test]
fn test_penalty_is_linear_in_cost() {
    assert_float_absolute_eq!(cost_penalty(0.0), 0.0, 1e-12);
    assert_float_absolute_eq!(cost_penalty(5.0), 0.5, 1e-12);
    assert_float_absolute_eq!(cost_penalty(25.0), 2.5, 1e-12);
}

#[test]
fn test_score_combines_all_terms() {
    // 2/3 owned, quick, one 3.0 ingredient to buy
    let recipe = Recipe::new(1, "Garlic Prawns", &["quick"], 15, &["garlic", "oil", "prawn"]);
    let (s, c) = score(&recipe, &prices(&[("prawn", 3.0)]), &pantry(&["garlic", "oil"]));

    assert_float_absolute_eq!(c, 3.0, 1e-12);
    assert_float_absolute_eq!(s, 2.0 / 3.0 + 0.1 - 0.3, 1e-12);
}

#[test]
fn test_score_without_ingredients() {
    let recipe = Recipe::new(1, "Air", &["quick"], 0, &[]);
    let (s, c) = score(&recipe, &PriceTable::new(), &pantry(&["rice"]));
    assert_float_absolute_eq!(c, 0.0, 1e-12);
    assert_float_absolute_eq!(s, QUICK_BONUS, 1e-12);
}

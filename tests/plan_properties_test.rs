//! Invariant checks over randomly generated recipe sets.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use meal_planner_rs::models::{Constraints, MealPlan, Pantry, PriceTable, Recipe, SkipReason};
use meal_planner_rs::planner::{is_compatible, plan_week, score};

const INGREDIENTS: &[&str] = &[
    "rice", "egg", "garlic", "onion", "oil", "tofu", "chicken", "beef", "salmon", "shrimp",
    "basil", "lime", "noodles", "cabbage", "carrot", "peanut", "fish sauce", "coconut milk",
];

const TAGS: &[&str] = &["quick", "spicy", "cheap", "thai"];

struct Scenario {
    recipes: Vec<Recipe>,
    prices: PriceTable,
    pantry: Pantry,
    constraints: Constraints,
}

fn random_scenario(seed: u64) -> Scenario {
    let mut rng = StdRng::seed_from_u64(seed);

    let recipe_count = rng.gen_range(0..40);
    let recipes = (0..recipe_count)
        .map(|id| {
            let n = rng.gen_range(0..6);
            let ingredients: Vec<&str> =
                INGREDIENTS.choose_multiple(&mut rng, n).copied().collect();
            let tags: Vec<&str> = TAGS
                .iter()
                .copied()
                .filter(|_| rng.gen_bool(0.3))
                .collect();
            // Small title pool so duplicates occur
            let title = format!("Dish {}", rng.gen_range(0..25));
            Recipe::new(id, title, &tags, rng.gen_range(5..70), &ingredients)
        })
        .collect();

    let prices = INGREDIENTS
        .iter()
        .filter_map(|i| {
            rng.gen_bool(0.7)
                .then(|| (i.to_string(), (rng.gen_range(0.0..6.0_f64) * 10.0).round() / 10.0))
        })
        .collect();

    let pantry = INGREDIENTS
        .iter()
        .filter(|_| rng.gen_bool(0.3))
        .map(|i| i.to_string())
        .collect();

    let mut constraints = Constraints::default()
        .with_budget((rng.gen_range(0.0..30.0_f64) * 10.0).round() / 10.0)
        .with_days(rng.gen_range(1..10))
        .with_max_time(rng.gen_range(10..60))
        .with_diet("vegetarian", rng.gen_bool(0.3))
        .with_diet("vegan", rng.gen_bool(0.2));
    if rng.gen_bool(0.4) {
        constraints = constraints.with_allergy("peanut");
    }
    if rng.gen_bool(0.3) {
        constraints = constraints.with_allergy("shrimp");
    }

    Scenario {
        recipes,
        prices,
        pantry,
        constraints,
    }
}

fn plan_for(s: &Scenario) -> MealPlan {
    plan_week(&s.recipes, &s.prices, &s.pantry, &s.constraints)
}

const SEEDS: std::ops::Range<u64> = 0..300;

#[test]
fn test_entries_pass_filter() {
    for seed in SEEDS {
        let s = random_scenario(seed);
        for entry in &plan_for(&s).entries {
            assert!(
                is_compatible(&entry.recipe, &s.constraints),
                "seed {}: {} should have been filtered",
                seed,
                entry.recipe.title
            );
        }
    }
}

#[test]
fn test_titles_unique() {
    for seed in SEEDS {
        let plan = plan_for(&random_scenario(seed));
        let titles: HashSet<&str> = plan.titles().into_iter().collect();
        assert_eq!(titles.len(), plan.len(), "seed {}", seed);
    }
}

#[test]
fn test_spend_within_budget_and_consistent() {
    for seed in SEEDS {
        let s = random_scenario(seed);
        let plan = plan_for(&s);
        let sum: f64 = plan.entries.iter().map(|e| e.cost).sum();

        assert!(plan.total_spend <= s.constraints.budget + 1e-9, "seed {}", seed);
        assert!((sum - plan.total_spend).abs() < 1e-9, "seed {}", seed);
    }
}

#[test]
fn test_length_bounds() {
    for seed in SEEDS {
        let s = random_scenario(seed);
        let plan = plan_for(&s);
        let compatible_titles: HashSet<&str> = s
            .recipes
            .iter()
            .filter(|r| is_compatible(r, &s.constraints))
            .map(|r| r.title.as_str())
            .collect();

        assert!(plan.len() <= s.constraints.days, "seed {}", seed);
        assert!(plan.len() <= compatible_titles.len(), "seed {}", seed);
    }
}

#[test]
fn test_nothing_left_out_that_would_have_fit() {
    for seed in SEEDS {
        let s = random_scenario(seed);
        let plan = plan_for(&s);
        if !plan.is_partial() {
            continue;
        }

        let chosen_ids: HashSet<u32> = plan.entries.iter().map(|e| e.recipe.id).collect();
        let chosen_titles: HashSet<&str> = plan.titles().into_iter().collect();

        for recipe in &s.recipes {
            if chosen_ids.contains(&recipe.id)
                || chosen_titles.contains(recipe.title.as_str())
                || !is_compatible(recipe, &s.constraints)
            {
                continue;
            }
            let (_, cost) = score(recipe, &s.prices, &s.pantry);
            assert!(
                plan.total_spend + cost > s.constraints.budget,
                "seed {}: {} (cost {}) would still fit",
                seed,
                recipe.title,
                cost
            );
        }
    }
}

#[test]
fn test_scores_non_increasing() {
    for seed in SEEDS {
        let plan = plan_for(&random_scenario(seed));
        for pair in plan.entries.windows(2) {
            assert!(pair[0].score >= pair[1].score, "seed {}", seed);
        }
    }
}

#[test]
fn test_deterministic() {
    for seed in SEEDS {
        let s = random_scenario(seed);
        assert_eq!(plan_for(&s), plan_for(&s), "seed {}", seed);
    }
}

#[test]
fn test_larger_budget_keeps_prefix_before_first_budget_skip() {
    for seed in SEEDS {
        let s = random_scenario(seed);
        let small = plan_for(&s);

        let raised = Constraints {
            budget: s.constraints.budget + 5.0,
            ..s.constraints.clone()
        };
        let large = plan_week(&s.recipes, &s.prices, &s.pantry, &raised);

        // Meals admitted before any over-budget skip are admitted again.
        let first_skip_score = small
            .skipped
            .iter()
            .find(|c| c.reason != SkipReason::DuplicateTitle)
            .map(|c| c.score);

        let prefix: Vec<&str> = small
            .entries
            .iter()
            .take_while(|e| first_skip_score.is_none_or(|skip| e.score > skip))
            .map(|e| e.recipe.title.as_str())
            .collect();

        let large_titles = large.titles();
        assert!(
            large_titles.len() >= prefix.len() && large_titles[..prefix.len()] == prefix[..],
            "seed {}: {:?} is not a prefix of {:?}",
            seed,
            prefix,
            large_titles
        );
    }
}

#[test]
fn test_greedy_plan_can_shrink_with_more_budget() {
    // One expensive favorite crowds out two cheap meals once it fits.
    let recipes = vec![
        Recipe::new(1, "Feast", &["quick"], 20, &["rice", "lobster"]),
        Recipe::new(2, "Beans", &[], 10, &["beans"]),
        Recipe::new(3, "Lentils", &[], 10, &["lentils"]),
    ];
    let prices: PriceTable = [
        ("lobster".to_string(), 4.8),
        ("beans".to_string(), 0.5),
        ("lentils".to_string(), 0.5),
    ]
    .into_iter()
    .collect();
    let pantry: Pantry = ["rice".to_string()].into_iter().collect();

    // Feast: 0.5 + 0.1 - 0.48 = 0.12; Beans/Lentils: 0.0 - 0.05 = -0.05
    let small = plan_week(&recipes, &prices, &pantry, &Constraints::default().with_budget(1.0));
    let large = plan_week(&recipes, &prices, &pantry, &Constraints::default().with_budget(5.0));

    assert_eq!(small.titles(), vec!["Beans", "Lentils"]);
    assert_eq!(large.titles(), vec!["Feast"]);
}

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default number of meals to plan (one week).
pub const DEFAULT_DAYS: usize = 7;

/// Default total budget for the week.
pub const DEFAULT_BUDGET: f64 = 20.0;

/// Default upper bound on preparation time, in minutes.
pub const DEFAULT_MAX_TIME_PER_MEAL: u32 = 40;

/// Price assumed for an ingredient missing from the price table.
pub const DEFAULT_INGREDIENT_PRICE: f64 = 0.8;

// ─────────────────────────────────────────────────────────────────────────────
// Scoring
// ─────────────────────────────────────────────────────────────────────────────

/// Tag that earns the quick-meal bonus.
pub const QUICK_TAG: &str = "quick";

/// Score bonus for recipes tagged `quick`.
pub const QUICK_BONUS: f64 = 0.1;

/// Missing-ingredient cost is divided by this before being subtracted.
/// Fixed, not relative to the budget.
pub const COST_PENALTY_DIVISOR: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Diets
// ─────────────────────────────────────────────────────────────────────────────

pub const DIET_VEGETARIAN: &str = "vegetarian";
pub const DIET_VEGAN: &str = "vegan";
pub const DIET_HALAL: &str = "halal";

/// Ingredients a vegetarian plan excludes.
pub static ANIMAL_PRODUCTS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["chicken", "beef", "salmon", "fish sauce"].into_iter().collect());

/// Pantry used when the configuration does not name one.
pub const DEFAULT_PANTRY: &[&str] = &["rice", "egg", "garlic", "onion", "salt", "soy sauce", "oil"];

// ─────────────────────────────────────────────────────────────────────────────
// Input checks
// ─────────────────────────────────────────────────────────────────────────────

/// Similarity above which a name is offered as a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Looser similarity used when prompting interactively.
pub const PROMPT_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum candidates shown in an interactive selection.
pub const MAX_PROMPT_CHOICES: usize = 5;

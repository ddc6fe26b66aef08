use serde::Serialize;

use crate::models::Recipe;

/// A meal admitted into the plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanEntry {
    pub recipe: Recipe,

    /// Estimated spend on ingredients not in the pantry.
    pub cost: f64,

    /// Heuristic score the recipe was ranked by.
    pub score: f64,
}

/// Why a scored candidate was passed over by the selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// A meal with the same title was already chosen.
    DuplicateTitle,
    /// Adding the meal would have pushed spend past the budget.
    OverBudget { spend: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedCandidate {
    pub id: u32,
    pub title: String,
    pub score: f64,
    pub cost: f64,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Why the filter turned a recipe away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    TooSlow { minutes: u32, limit: u32 },
    Allergen { ingredient: String },
    Diet { diet: String, ingredient: String },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::TooSlow { minutes, limit } => {
                write!(f, "takes {} min (limit {})", minutes, limit)
            }
            Rejection::Allergen { ingredient } => write!(f, "contains allergen '{}'", ingredient),
            Rejection::Diet { diet, ingredient } => {
                write!(f, "'{}' is not {}", ingredient, diet)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRecipe {
    pub id: u32,
    pub title: String,
    #[serde(flatten)]
    pub rejection: Rejection,
}

/// Result of one planning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MealPlan {
    /// Chosen meals in selection order (best score first).
    pub entries: Vec<PlanEntry>,

    /// Sum of entry costs.
    pub total_spend: f64,

    pub budget: f64,

    /// Requested number of meals.
    pub days: usize,

    /// Candidates the greedy pass looked at and declined.
    pub skipped: Vec<SkippedCandidate>,

    /// Recipes that failed a hard constraint.
    pub rejected: Vec<RejectedRecipe>,

    /// Requested diets that have no enforcement rule.
    pub unenforced_diets: Vec<String>,
}

impl MealPlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when fewer meals were found than days requested.
    pub fn is_partial(&self) -> bool {
        self.entries.len() < self.days
    }

    pub fn remaining_budget(&self) -> f64 {
        self.budget - self.total_spend
    }

    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.recipe.title.as_str()).collect()
    }

    /// Mean score of chosen meals, 0.0 for an empty plan.
    pub fn mean_score(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.entries.iter().map(|e| e.score).sum::<f64>() / self.entries.len() as f64
    }
}

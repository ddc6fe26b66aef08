mod constraints;
mod plan;
mod recipe;

pub use constraints::Constraints;
pub use plan::{
    MealPlan, PlanEntry, RejectedRecipe, Rejection, SkipReason, SkippedCandidate,
};
pub use recipe::{split_joined, Pantry, PriceRecord, PriceTable, Recipe, RecipeRecord};

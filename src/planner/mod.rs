pub mod calculations;
pub mod constants;
pub mod filter;
pub mod ranking;

pub use calculations::{cost_penalty, estimate_missing_cost, pantry_coverage, score, tag_bonus};
pub use constants::*;
pub use filter::{is_compatible, rule_for, DietRule, DietVerdict, RecipeFilter};
pub use ranking::{plan_week, rank_candidates, ScoredCandidate};

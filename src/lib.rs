pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod sweep;

pub use config::PlannerConfig;
pub use error::{PlanError, Result};
pub use models::{Constraints, MealPlan, Pantry, PlanEntry, PriceTable, Recipe};
pub use planner::{is_compatible, plan_week};

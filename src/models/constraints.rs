use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::planner::constants::{DEFAULT_BUDGET, DEFAULT_DAYS, DEFAULT_MAX_TIME_PER_MEAL};

/// Hard limits and preferences for one planning run.
///
/// Built once from configuration and passed by reference into the planner;
/// nothing in the core mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Total spend allowed across the whole plan.
    pub budget: f64,

    /// Maximum number of meals (one per day).
    pub days: usize,

    /// Longest acceptable preparation time, in minutes.
    pub max_time_per_meal: u32,

    /// Named diets and whether each is requested.
    pub diet: BTreeMap<String, bool>,

    /// Ingredients that disqualify a recipe outright.
    pub allergies: BTreeSet<String>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            days: DEFAULT_DAYS,
            max_time_per_meal: DEFAULT_MAX_TIME_PER_MEAL,
            diet: BTreeMap::new(),
            allergies: BTreeSet::new(),
        }
    }
}

impl Constraints {
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_days(mut self, days: usize) -> Self {
        self.days = days;
        self
    }

    pub fn with_max_time(mut self, minutes: u32) -> Self {
        self.max_time_per_meal = minutes;
        self
    }

    pub fn with_allergy(mut self, ingredient: impl Into<String>) -> Self {
        self.allergies.insert(ingredient.into());
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>, enabled: bool) -> Self {
        self.diet.insert(diet.into(), enabled);
        self
    }

    /// Diet names whose flag is set, in name order.
    pub fn active_diets(&self) -> impl Iterator<Item = &str> {
        self.diet
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Constraints::default();
        assert_eq!(c.days, 7);
        assert_eq!(c.max_time_per_meal, 40);
        assert!((c.budget - 20.0).abs() < 1e-9);
        assert!(c.allergies.is_empty());
    }

    #[test]
    fn test_active_diets_skips_disabled() {
        let c = Constraints::default()
            .with_diet("vegetarian", true)
            .with_diet("vegan", false)
            .with_diet("halal", true);
        let active: Vec<&str> = c.active_diets().collect();
        assert_eq!(active, vec!["halal", "vegetarian"]);
    }
}

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::models::{Constraints, Recipe, Rejection};
use crate::planner::constants::{ANIMAL_PRODUCTS, DIET_HALAL, DIET_VEGAN, DIET_VEGETARIAN};

/// Outcome of checking one recipe against one diet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DietVerdict {
    Admit,
    /// The named ingredient breaks the diet.
    Reject(String),
    /// The diet is known but nothing enforces it yet.
    NotImplemented,
}

/// A named predicate that decides whether a recipe fits a diet.
pub trait DietRule: Send + Sync {
    fn name(&self) -> &str;

    fn check(&self, recipe: &Recipe) -> DietVerdict;

    fn is_enforced(&self) -> bool {
        true
    }
}

/// Rejects any recipe using an ingredient from a fixed exclusion set.
pub struct ExcludedIngredients {
    name: &'static str,
    excluded: &'static HashSet<&'static str>,
}

impl ExcludedIngredients {
    pub fn new(name: &'static str, excluded: &'static HashSet<&'static str>) -> Self {
        Self { name, excluded }
    }
}

impl DietRule for ExcludedIngredients {
    fn name(&self) -> &str {
        self.name
    }

    fn check(&self, recipe: &Recipe) -> DietVerdict {
        recipe
            .ingredients
            .iter()
            .find(|i| self.excluded.contains(i.as_str()))
            .map_or(DietVerdict::Admit, |i| DietVerdict::Reject(i.clone()))
    }
}

/// Placeholder for a diet that is accepted in configuration but not checked.
pub struct Unenforced {
    name: String,
}

impl Unenforced {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl DietRule for Unenforced {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, _recipe: &Recipe) -> DietVerdict {
        DietVerdict::NotImplemented
    }

    fn is_enforced(&self) -> bool {
        false
    }
}

/// Rule for a diet name. Unrecognized names get an [`Unenforced`] rule.
pub fn rule_for(diet: &str) -> Box<dyn DietRule> {
    match diet {
        DIET_VEGETARIAN => Box::new(ExcludedIngredients::new(DIET_VEGETARIAN, &ANIMAL_PRODUCTS)),
        // Declared diets without rules yet.
        DIET_VEGAN | DIET_HALAL => Box::new(Unenforced::new(diet)),
        _ => {
            debug!(diet, "unrecognized diet name");
            Box::new(Unenforced::new(diet))
        }
    }
}

/// Hard-constraint filter built once per run from [`Constraints`].
///
/// Checks run in order time → allergy → diet and stop at the first failure.
pub struct RecipeFilter<'a> {
    constraints: &'a Constraints,
    rules: BTreeMap<String, Box<dyn DietRule>>,
}

impl<'a> RecipeFilter<'a> {
    pub fn new(constraints: &'a Constraints) -> Self {
        let rules: BTreeMap<String, Box<dyn DietRule>> = constraints
            .active_diets()
            .map(|diet| (diet.to_string(), rule_for(diet)))
            .collect();

        for rule in rules.values().filter(|r| !r.is_enforced()) {
            warn!(diet = rule.name(), "diet flag is set but not enforced");
        }

        Self { constraints, rules }
    }

    /// First violated constraint, or `None` when the recipe is admissible.
    pub fn check(&self, recipe: &Recipe) -> Option<Rejection> {
        if recipe.time > self.constraints.max_time_per_meal {
            return Some(Rejection::TooSlow {
                minutes: recipe.time,
                limit: self.constraints.max_time_per_meal,
            });
        }

        if let Some(allergen) = recipe
            .ingredients
            .iter()
            .find(|i| self.constraints.allergies.contains(i.as_str()))
        {
            return Some(Rejection::Allergen {
                ingredient: allergen.clone(),
            });
        }

        for rule in self.rules.values() {
            if let DietVerdict::Reject(ingredient) = rule.check(recipe) {
                return Some(Rejection::Diet {
                    diet: rule.name().to_string(),
                    ingredient,
                });
            }
        }

        None
    }

    pub fn is_compatible(&self, recipe: &Recipe) -> bool {
        let rejection = self.check(recipe);
        if let Some(reason) = &rejection {
            debug!(title = %recipe.title, %reason, "recipe rejected");
        }
        rejection.is_none()
    }

    /// Requested diets that admit everything because no rule backs them.
    pub fn unenforced_diets(&self) -> Vec<String> {
        self.rules
            .values()
            .filter(|r| !r.is_enforced())
            .map(|r| r.name().to_string())
            .collect()
    }
}

/// Whether a recipe passes every hard constraint.
pub fn is_compatible(recipe: &Recipe, constraints: &Constraints) -> bool {
    RecipeFilter::new(constraints).is_compatible(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stir_fry() -> Recipe {
        Recipe::new(1, "Chicken Stir Fry", &["quick"], 20, &["chicken", "rice", "soy sauce"])
    }

    #[test]
    fn test_time_limit_is_inclusive() {
        let recipe = stir_fry();
        assert!(is_compatible(&recipe, &Constraints::default().with_max_time(20)));
        assert!(!is_compatible(&recipe, &Constraints::default().with_max_time(19)));
    }

    #[test]
    fn test_allergen_rejects() {
        let constraints = Constraints::default().with_allergy("soy sauce");
        let filter = RecipeFilter::new(&constraints);
        assert_eq!(
            filter.check(&stir_fry()),
            Some(Rejection::Allergen {
                ingredient: "soy sauce".to_string()
            })
        );
    }

    #[test]
    fn test_vegetarian_rejects_animal_products() {
        let constraints = Constraints::default().with_diet("vegetarian", true);
        let filter = RecipeFilter::new(&constraints);
        assert_eq!(
            filter.check(&stir_fry()),
            Some(Rejection::Diet {
                diet: "vegetarian".to_string(),
                ingredient: "chicken".to_string()
            })
        );

        let tofu = Recipe::new(2, "Tofu Rice", &[], 20, &["tofu", "rice"]);
        assert!(filter.is_compatible(&tofu));
    }

    #[test]
    fn test_disabled_vegetarian_admits_meat() {
        let constraints = Constraints::default().with_diet("vegetarian", false);
        assert!(is_compatible(&stir_fry(), &constraints));
    }

    #[test]
    fn test_vegan_and_halal_are_unenforced() {
        let constraints = Constraints::default()
            .with_diet("vegan", true)
            .with_diet("halal", true);
        let filter = RecipeFilter::new(&constraints);

        assert!(filter.is_compatible(&stir_fry()));
        assert_eq!(filter.unenforced_diets(), vec!["halal", "vegan"]);
    }

    #[test]
    fn test_unknown_diet_is_unenforced() {
        let rule = rule_for("pescatarian");
        assert!(!rule.is_enforced());
        assert_eq!(rule.check(&stir_fry()), DietVerdict::NotImplemented);
    }

    #[test]
    fn test_time_checked_before_allergy() {
        let constraints = Constraints::default().with_max_time(5).with_allergy("chicken");
        let filter = RecipeFilter::new(&constraints);
        assert!(matches!(
            filter.check(&stir_fry()),
            Some(Rejection::TooSlow { minutes: 20, limit: 5 })
        ));
    }
}

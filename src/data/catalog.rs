use std::collections::{BTreeMap, BTreeSet};

use strsim::jaro_winkler;

use crate::models::{Constraints, Pantry, PriceTable, Recipe};
use crate::planner::constants::SUGGESTION_THRESHOLD;
use crate::planner::RecipeFilter;

/// Loaded recipes and prices, with ingredient lookups used by input checks
/// and prompts.
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    prices: PriceTable,
    /// Every ingredient named by a recipe or the price table.
    ingredients: BTreeSet<String>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>, prices: PriceTable) -> Self {
        let ingredients = recipes
            .iter()
            .flat_map(|r| r.ingredients.iter().cloned())
            .chain(prices.keys().cloned())
            .collect();
        Self {
            recipes,
            prices,
            ingredients,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn ingredients(&self) -> &BTreeSet<String> {
        &self.ingredients
    }

    /// Exact ingredient match, ignoring case.
    pub fn find_ingredient(&self, name: &str) -> Option<&str> {
        let wanted = name.to_lowercase();
        self.ingredients
            .iter()
            .find(|i| i.to_lowercase() == wanted)
            .map(String::as_str)
    }

    /// Known ingredients similar to `name`, best first.
    pub fn similar_ingredients(&self, name: &str, threshold: f64) -> Vec<(&str, f64)> {
        let wanted = name.to_lowercase();
        let mut matches: Vec<(&str, f64)> = self
            .ingredients
            .iter()
            .map(|i| (i.as_str(), jaro_winkler(&i.to_lowercase(), &wanted)))
            .filter(|(_, score)| *score > threshold)
            .collect();

        matches.sort_by(|a, b| b.1.total_cmp(&a.1));
        matches
    }

    /// Recipe ingredients with no price row; they cost the default estimate.
    pub fn unpriced_ingredients(&self, pantry: &Pantry) -> Vec<&str> {
        self.recipes
            .iter()
            .flat_map(|r| r.ingredients.iter())
            .filter(|i| !self.prices.contains_key(i.as_str()) && !pantry.contains(i.as_str()))
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Titles shared by more than one recipe, with the ids that share them.
    ///
    /// The planner keeps only the best-scoring recipe per title.
    pub fn duplicate_titles(&self) -> BTreeMap<&str, Vec<u32>> {
        let mut by_title: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
        for recipe in &self.recipes {
            by_title.entry(recipe.title.as_str()).or_default().push(recipe.id);
        }
        by_title.retain(|_, ids| ids.len() > 1);
        by_title
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// A configured name that matches no known ingredient.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownName {
    pub name: String,
    pub suggestion: Option<String>,
}

/// Problems found in the inputs before planning.
#[derive(Debug, Default)]
pub struct InputReport {
    pub unknown_pantry: Vec<UnknownName>,
    pub unknown_allergies: Vec<UnknownName>,
    pub unpriced: Vec<String>,
    pub duplicate_titles: Vec<(String, Vec<u32>)>,
    pub unenforced_diets: Vec<String>,
    /// Recipes that pass every hard constraint.
    pub compatible: usize,
}

impl InputReport {
    pub fn is_clean(&self) -> bool {
        self.unknown_pantry.is_empty()
            && self.unknown_allergies.is_empty()
            && self.duplicate_titles.is_empty()
            && self.unenforced_diets.is_empty()
    }
}

fn unknown_names<'a>(
    catalog: &RecipeCatalog,
    names: impl Iterator<Item = &'a String>,
) -> Vec<UnknownName> {
    names
        .filter(|n| !catalog.ingredients().contains(n.as_str()))
        .map(|n| UnknownName {
            name: n.clone(),
            suggestion: catalog
                .find_ingredient(n)
                .map(str::to_string)
                .or_else(|| {
                    catalog
                        .similar_ingredients(n, SUGGESTION_THRESHOLD)
                        .first()
                        .map(|(s, _)| s.to_string())
                }),
        })
        .collect()
}

/// Cross-check configuration against the loaded catalog.
pub fn check_inputs(
    catalog: &RecipeCatalog,
    pantry: &Pantry,
    constraints: &Constraints,
) -> InputReport {
    let sorted_pantry: BTreeSet<&String> = pantry.iter().collect();
    let filter = RecipeFilter::new(constraints);

    InputReport {
        unknown_pantry: unknown_names(catalog, sorted_pantry.into_iter()),
        unknown_allergies: unknown_names(catalog, constraints.allergies.iter()),
        unpriced: catalog
            .unpriced_ingredients(pantry)
            .into_iter()
            .map(str::to_string)
            .collect(),
        duplicate_titles: catalog
            .duplicate_titles()
            .into_iter()
            .map(|(t, ids)| (t.to_string(), ids))
            .collect(),
        unenforced_diets: filter.unenforced_diets(),
        compatible: catalog
            .recipes()
            .iter()
            .filter(|r| filter.check(r).is_none())
            .count(),
    }
}

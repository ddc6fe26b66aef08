use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Ingredient name to unit price.
pub type PriceTable = HashMap<String, f64>;

/// Ingredients already on hand. Pure membership, no quantities.
pub type Pantry = HashSet<String>;

/// A recipe as the planner sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,

    /// Display name. Also the key the planner dedups on.
    pub title: String,

    pub tags: BTreeSet<String>,

    /// Preparation time in minutes.
    pub time: u32,

    /// Ingredient names in display order.
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        tags: &[&str],
        time: u32,
        ingredients: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            time,
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Number of ingredients already in the pantry.
    pub fn owned_count(&self, pantry: &Pantry) -> usize {
        self.ingredients
            .iter()
            .filter(|i| pantry.contains(i.as_str()))
            .count()
    }
}

/// One row of the recipe CSV, before the `;`-joined columns are split.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRecord {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub tags: String,
    pub time_mins: u32,
    #[serde(default)]
    pub ingredients: String,
}

/// Split a `;`-joined column, trimming pieces and dropping empty ones.
pub fn split_joined(field: &str) -> impl Iterator<Item = String> + '_ {
    field
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            tags: split_joined(&record.tags).collect(),
            time: record.time_mins,
            ingredients: split_joined(&record.ingredients).collect(),
        }
    }
}

/// One row of the price CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRecord {
    pub ingredient: String,
    pub price: f64,
}

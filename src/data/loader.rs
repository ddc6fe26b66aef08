use std::path::Path;

use tracing::info;

use crate::error::{PlanError, Result};
use crate::models::{PriceRecord, PriceTable, Recipe, RecipeRecord};

/// Load recipes from a CSV file with columns
/// `id,title,tags,time_mins,ingredients`.
///
/// `tags` and `ingredients` are `;`-joined. File order is preserved.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_path(path)?;

    let recipes = rdr
        .deserialize::<RecipeRecord>()
        .map(|row| row.map(Recipe::from))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    info!(count = recipes.len(), path = %path.display(), "loaded recipes");
    Ok(recipes)
}

/// Load ingredient prices from a CSV file with columns `ingredient,price`.
///
/// A later row for the same ingredient overrides an earlier one.
pub fn load_prices<P: AsRef<Path>>(path: P) -> Result<PriceTable> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let mut prices = PriceTable::new();
    for row in rdr.deserialize::<PriceRecord>() {
        let record = row?;
        if !record.price.is_finite() || record.price < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "price for '{}' must be a non-negative number, got {}",
                record.ingredient, record.price
            )));
        }
        prices.insert(record.ingredient, record.price);
    }

    info!(count = prices.len(), path = %path.display(), "loaded prices");
    Ok(prices)
}

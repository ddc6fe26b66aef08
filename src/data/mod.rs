mod catalog;
mod loader;

pub use catalog::{check_inputs, InputReport, RecipeCatalog, UnknownName};
pub use loader::{load_prices, load_recipes};

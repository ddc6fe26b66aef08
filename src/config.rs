use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PlanError, Result};
use crate::models::{Constraints, Pantry};
use crate::planner::constants::*;

/// Where the recipe and price tables live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub recipes: PathBuf,
    pub prices: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            recipes: PathBuf::from("data/recipes_sample.csv"),
            prices: PathBuf::from("data/ingredient_prices.csv"),
        }
    }
}

/// Everything a planning run is configured with, as read from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    pub budget: f64,
    pub days: usize,
    pub max_time_per_meal: u32,
    pub allergies: BTreeSet<String>,
    pub pantry: BTreeSet<String>,
    pub diet: BTreeMap<String, bool>,
    pub data: DataPaths,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            days: DEFAULT_DAYS,
            max_time_per_meal: DEFAULT_MAX_TIME_PER_MEAL,
            allergies: BTreeSet::new(),
            pantry: DEFAULT_PANTRY.iter().map(|s| s.to_string()).collect(),
            diet: [DIET_VEGETARIAN, DIET_VEGAN, DIET_HALAL]
                .into_iter()
                .map(|d| (d.to_string(), false))
                .collect(),
            data: DataPaths::default(),
        }
    }
}

/// Values supplied on the command line or by prompts. `None` keeps the
/// configured value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub budget: Option<f64>,
    pub days: Option<usize>,
    pub max_time_per_meal: Option<u32>,
    pub allergies: Vec<String>,
    pub vegetarian: Option<bool>,
    pub recipes: Option<PathBuf>,
    pub prices: Option<PathBuf>,
}

impl PlannerConfig {
    /// Parse a TOML document. Relative data paths are left as written.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `path`.
    ///
    /// When the file is missing and `required` is false, built-in defaults
    /// are used. Relative data paths resolve against the file's directory.
    pub fn load<P: AsRef<Path>>(path: P, required: bool) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            if required {
                return Err(PlanError::ConfigNotFound(path.to_path_buf()));
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;

        if let Some(base) = path.parent() {
            config.data.recipes = resolve(base, &config.data.recipes);
            config.data.prices = resolve(base, &config.data.prices);
        }

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(budget) = overrides.budget {
            self.budget = budget;
        }
        if let Some(days) = overrides.days {
            self.days = days;
        }
        if let Some(minutes) = overrides.max_time_per_meal {
            self.max_time_per_meal = minutes;
        }
        if let Some(vegetarian) = overrides.vegetarian {
            self.diet.insert(DIET_VEGETARIAN.to_string(), vegetarian);
        }
        if let Some(recipes) = overrides.recipes {
            self.data.recipes = recipes;
        }
        if let Some(prices) = overrides.prices {
            self.data.prices = prices;
        }
        self.allergies.extend(overrides.allergies);
    }

    /// Apply overrides and validate the result before anything reads the
    /// data files.
    pub fn apply_validated(&mut self, overrides: ConfigOverrides) -> Result<()> {
        self.apply(overrides);
        self.validate()
    }

    /// Reject values the planner has no meaning for.
    pub fn validate(&self) -> Result<()> {
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "budget must be a non-negative number, got {}",
                self.budget
            )));
        }
        if self.days == 0 {
            return Err(PlanError::InvalidInput(
                "days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn constraints(&self) -> Constraints {
        Constraints {
            budget: self.budget,
            days: self.days,
            max_time_per_meal: self.max_time_per_meal,
            diet: self.diet.clone(),
            allergies: self.allergies.clone(),
        }
    }

    pub fn pantry(&self) -> Pantry {
        self.pantry.iter().cloned().collect()
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

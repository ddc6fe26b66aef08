pub mod evaluation;
pub mod output;
pub mod search;

pub use evaluation::{evaluate_budget, shrinking_budgets, BudgetResult};
pub use output::{print_table, write_csv, write_json};
pub use search::{run_sweep, SweepConfig, SweepResults};

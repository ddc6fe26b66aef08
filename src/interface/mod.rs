pub mod prompts;
pub mod render;

pub use prompts::{
    collect_user_constraints, prompt_allergies, prompt_budget, prompt_days, prompt_max_time,
    prompt_yes_no,
};
pub use render::{
    display_meal_plan, display_meal_plan_json, render_explanation, render_input_report,
    render_meal_plan, write_explanation, write_input_report, write_meal_plan,
};

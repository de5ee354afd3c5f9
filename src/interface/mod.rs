pub mod prompts;
pub mod render;

pub use prompts::{
    fuzzy_candidates, prompt_leftovers, prompt_meal_name, prompt_pick, prompt_plan_action,
    prompt_servings, prompt_yes_no, PlanAction,
};
pub use render::{assignment_line, display_board, display_inventory, display_palette};

pub mod export;
pub mod prompts;
pub mod render;

pub use export::{export_plan_csv, write_plan_csv};
pub use prompts::{prompt_mode, prompt_yes_no};
pub use render::{display_meal_plan, display_statistics, display_suggestions};

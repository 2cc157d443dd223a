use dialoguer::{Confirm, Select};

use crate::error::Result;
use crate::models::PlanMode;

/// Ask which planning mode to use.
pub fn prompt_mode() -> Result<PlanMode> {
    let options: Vec<String> = PlanMode::ALL
        .iter()
        .map(|m| format!("{:<20} {}", m.as_str(), m.label()))
        .collect();

    let selection = Select::new()
        .with_prompt("Planning mode")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(PlanMode::ALL[selection.min(PlanMode::ALL.len() - 1)])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

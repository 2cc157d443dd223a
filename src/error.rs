use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("No recipes available")]
    NoRecipes,

    #[error("No eligible recipe left after applying exclusions ({excluded} recipes excluded)")]
    NoEligibleRecipes { excluded: usize },

    #[error("Invalid slot key: {0}")]
    InvalidSlot(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

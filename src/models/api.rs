use serde::{Deserialize, Serialize};

use crate::models::{CustomConfig, MealPlan, PlanMode, Slot};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub mode: PlanMode,
    #[serde(default)]
    pub week_number: u32,
    #[serde(default)]
    pub current_plan: MealPlan,
    #[serde(default)]
    pub custom_config: Option<CustomConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub mode: PlanMode,
    #[serde(default)]
    pub week_number: u32,
    pub current_plan: MealPlan,
    #[serde(default)]
    pub custom_config: Option<CustomConfig>,
}

/// Either request, tagged by its operation: `{"generate": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApiRequest {
    Generate(GenerateRequest),
    Optimize(OptimizeRequest),
}

/// Aggregates over the filled slots of a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStatistics {
    pub total_cost: f64,
    pub average_cost_per_portion: f64,
    pub total_protein: f64,
    pub total_calories: f64,
    pub total_fat: f64,
    pub total_carbs: f64,
    pub unique_recipes: usize,
    pub total_meals: usize,
    /// Unique recipes divided by filled slots, 0 for an empty plan.
    pub variety_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub mode: PlanMode,
    pub week_number: u32,
    pub meal_plan: MealPlan,
    pub statistics: PlanStatistics,
    pub message: String,
    /// Set when exclusions removed every recipe and the first unfiltered
    /// recipe was used instead.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exclusion_fallback_used: bool,
}

/// Quantified gain of one suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Benefit {
    /// Money saved per portion.
    Saving(f64),
    /// Relative or absolute score gain.
    Improvement(f64),
    /// Qualitative gain.
    Benefit(String),
}

/// One replacement made by the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub slot: Slot,
    pub reason: String,
    pub original_recipe: String,
    pub suggested_recipe: String,
    #[serde(flatten)]
    pub benefit: Benefit,
}

/// Before/after comparison of an optimized plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvements {
    /// Percentage of total cost saved.
    pub cost_reduction: f64,
    /// Percentage reduction of the mean deviation from nutrition targets.
    pub nutrition_improvement: f64,
    /// Change in the number of distinct recipes.
    pub variety_increase: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub success: bool,
    pub mode: PlanMode,
    pub week_number: u32,
    pub meal_plan: MealPlan,
    pub suggestions: Vec<Suggestion>,
    pub statistics: PlanStatistics,
    pub improvements: Improvements,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, MealType};

    #[test]
    fn test_generate_request_defaults() {
        let json = r#"{"generate": {"mode": "seasonal", "weekNumber": 42}}"#;
        let request: ApiRequest = serde_json::from_str(json).unwrap();
        match request {
            ApiRequest::Generate(req) => {
                assert_eq!(req.mode, PlanMode::Seasonal);
                assert_eq!(req.week_number, 42);
                assert!(req.current_plan.is_empty());
                assert!(req.custom_config.is_none());
            }
            ApiRequest::Optimize(_) => panic!("expected a generate request"),
        }
    }

    #[test]
    fn test_suggestion_flattens_benefit() {
        let suggestion = Suggestion {
            slot: Slot::new(Day::Monday, MealType::Dinner),
            reason: "Cheaper alternative".to_string(),
            original_recipe: "Steak".to_string(),
            suggested_recipe: "Chili".to_string(),
            benefit: Benefit::Saving(3.5),
        };

        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value["slot"], "monday-dinner");
        assert_eq!(value["saving"], 3.5);
        assert!(value.get("improvement").is_none());
    }
}

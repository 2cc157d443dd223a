use serde::{Deserialize, Serialize};

/// User-supplied knobs for the custom mode, plus exclusions that apply to
/// every mode.
///
/// Every section and field is optional; a missing field disables the rule
/// that reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomConfig {
    pub weights: Weights,
    pub budget: BudgetLimits,
    pub nutrition: NutritionLimits,
    pub time_management: TimeLimits,
    pub variety: VarietyPreferences,
    pub exclusions: Exclusions,
}

/// Dials in the 0..=100 range. Carried through for callers and rendering;
/// the custom score does not read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Weights {
    pub cost: f64,
    pub health: f64,
    pub variety: f64,
    pub speed: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            cost: 50.0,
            health: 50.0,
            variety: 50.0,
            speed: 50.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetLimits {
    pub max_cost_per_portion: Option<f64>,
    pub max_weekly_cost: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutritionLimits {
    pub min_protein: Option<f64>,
    pub max_calories: Option<f64>,
    pub min_veggie_percent: Option<f64>,
    pub max_salt_mg: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeLimits {
    pub max_prep_time: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VarietyPreferences {
    pub cuisine_preferences: Vec<String>,
    /// 0..=100; above 50 fresh/seasonal/regional tags earn a bonus.
    pub seasonal_preference: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Exclusions {
    pub ingredients: Vec<String>,
    pub categories: Vec<String>,
    pub allergens: Vec<String>,
}

impl Exclusions {
    /// Copy with every term trimmed and lowercased, blanks dropped.
    pub fn normalized(&self) -> Self {
        fn clean(terms: &[String]) -> Vec<String> {
            terms
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect()
        }

        Self {
            ingredients: clean(&self.ingredients),
            categories: clean(&self.categories),
            allergens: clean(&self.allergens),
        }
    }
}

use crate::models::MealType;

/// Product nutrition facts are given per this many units.
pub const NUTRITION_REFERENCE_QUANTITY: f64 = 100.0;

/// Ranked strategies pick randomly among this many best candidates.
pub const TIE_BREAK_POOL: usize = 3;

/// Seasonal score per matched keyword.
pub const SEASONAL_KEYWORD_SCORE: f64 = 10.0;

/// Minimum Jaro-Winkler similarity for a "did you mean" hint.
pub const TERM_SUGGESTION_MIN_SIMILARITY: f64 = 0.85;

// ─────────────────────────────────────────────────────────────────────────────
// Custom-weighted score
// ─────────────────────────────────────────────────────────────────────────────

pub const CUSTOM_BASE_SCORE: f64 = 100.0;
pub const CUSTOM_OVER_BUDGET_PENALTY: f64 = 50.0;
/// Bonus when the cost is below `CUSTOM_CHEAP_RATIO` of the per-portion cap.
pub const CUSTOM_CHEAP_BONUS: f64 = 10.0;
pub const CUSTOM_CHEAP_RATIO: f64 = 0.8;
pub const CUSTOM_LOW_PROTEIN_PENALTY: f64 = 20.0;
pub const CUSTOM_HIGH_CALORIE_PENALTY: f64 = 30.0;
pub const CUSTOM_VEGGIE_BONUS: f64 = 20.0;
pub const CUSTOM_SALT_PENALTY: f64 = 15.0;
pub const CUSTOM_SLOW_PREP_PENALTY: f64 = 25.0;
pub const CUSTOM_QUICK_PREP_BONUS: f64 = 15.0;
pub const QUICK_PREP_MINUTES: u32 = 20;
pub const CUSTOM_CUISINE_BONUS: f64 = 20.0;
pub const CUSTOM_FRESHNESS_BONUS: f64 = 15.0;
/// `seasonalPreference` must exceed this for the freshness bonus.
pub const SEASONAL_PREFERENCE_THRESHOLD: f64 = 50.0;

pub const VEGGIE_TAGS: [&str; 2] = ["vegetarian", "vegan"];
pub const FRESHNESS_TAGS: [&str; 3] = ["fresh", "seasonal", "regional"];

// ─────────────────────────────────────────────────────────────────────────────
// Optimizer thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Recipes costing more than this per portion are worth replacing in cost mode.
pub const COST_REPLACEMENT_THRESHOLD: f64 = 4.0;

/// Relative deviation on protein or calories that triggers a nutrition swap.
pub const NUTRITION_DEVIATION_THRESHOLD: f64 = 0.3;

/// An ingredient is understocked below this fraction of its minimum.
pub const UNDERSTOCK_RATIO: f64 = 0.7;

/// Inventory replacements must score above this.
pub const INVENTORY_REPLACEMENT_MIN_SCORE: f64 = 1.5;

/// Per-portion nutrition a single meal should aim for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionTarget {
    pub protein: f64,
    pub calories: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Target for each planned meal type.
pub fn meal_target(meal_type: MealType) -> NutritionTarget {
    match meal_type {
        MealType::Breakfast => NutritionTarget {
            protein: 20.0,
            calories: 400.0,
            carbs: 50.0,
            fat: 15.0,
        },
        MealType::Lunch => NutritionTarget {
            protein: 30.0,
            calories: 600.0,
            carbs: 70.0,
            fat: 20.0,
        },
        MealType::Dinner => NutritionTarget {
            protein: 35.0,
            calories: 700.0,
            carbs: 60.0,
            fat: 25.0,
        },
    }
}

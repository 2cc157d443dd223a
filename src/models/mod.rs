pub mod api;
pub mod config;
pub mod mode;
pub mod plan;
pub mod recipe;

pub use api::{
    ApiRequest, Benefit, ErrorResponse, GenerateRequest, GenerateResponse, Improvements,
    OptimizeRequest, OptimizeResponse, PlanStatistics, Suggestion,
};
pub use config::{
    BudgetLimits, CustomConfig, Exclusions, NutritionLimits, TimeLimits, VarietyPreferences,
    Weights,
};
pub use mode::PlanMode;
pub use plan::{Day, MealPlan, MealType, PlanEntry, Slot};
pub use recipe::{
    IngredientLink, Nutrition, Product, ProductId, Recipe, RecipeId, RecipeWithNutrition,
    StockLevel,
};

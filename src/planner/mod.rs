pub mod constants;
pub mod engine;
pub mod exclusions;
pub mod generator;
pub mod keywords;
pub mod nutrition;
pub mod optimizer;
pub mod pool;
pub mod random;
pub mod scoring;
pub mod season;
pub mod statistics;
pub mod strategies;

pub use constants::*;
pub use engine::{MenuPlanner, PlannerOptions};
pub use exclusions::{apply_exclusions, is_excluded};
pub use generator::{generate_plan, GeneratedPlan};
pub use keywords::KeywordTable;
pub use nutrition::aggregate_nutrition;
pub use optimizer::{optimize_plan, OptimizedPlan};
pub use pool::{CandidatePool, ExclusionFallback};
pub use random::{choose, FixedPicks, RandomSource, RngSource};
pub use scoring::{
    custom_score, inventory_score, is_nutritionally_off, is_understocked, nutrition_deviation,
    seasonal_score,
};
pub use season::Season;
pub use statistics::{compare_plans, plan_statistics};
pub use strategies::{
    BalancedNutrition, CostOptimized, CustomWeighted, InventoryBased, MaxVariety, PlanningContext,
    SelectionStrategy, Seasonal, SlotContext, StrategyRegistry,
};

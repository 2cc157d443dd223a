use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Objective a plan is generated or optimized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlanMode {
    #[value(name = "cost_optimized")]
    CostOptimized,
    #[value(name = "balanced_nutrition")]
    BalancedNutrition,
    #[value(name = "variety")]
    Variety,
    #[value(name = "seasonal")]
    Seasonal,
    #[value(name = "inventory_based")]
    InventoryBased,
    #[value(name = "custom")]
    Custom,
}

impl PlanMode {
    pub const ALL: [PlanMode; 6] = [
        PlanMode::CostOptimized,
        PlanMode::BalancedNutrition,
        PlanMode::Variety,
        PlanMode::Seasonal,
        PlanMode::InventoryBased,
        PlanMode::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanMode::CostOptimized => "cost_optimized",
            PlanMode::BalancedNutrition => "balanced_nutrition",
            PlanMode::Variety => "variety",
            PlanMode::Seasonal => "seasonal",
            PlanMode::InventoryBased => "inventory_based",
            PlanMode::Custom => "custom",
        }
    }

    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PlanMode::CostOptimized => "Lowest cost",
            PlanMode::BalancedNutrition => "Balanced nutrition",
            PlanMode::Variety => "Maximum variety",
            PlanMode::Seasonal => "Seasonal ingredients",
            PlanMode::InventoryBased => "Use what is in stock",
            PlanMode::Custom => "Custom weighting",
        }
    }
}

impl fmt::Display for PlanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

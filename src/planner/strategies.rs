use std::cmp::Ordering;
use std::collections::HashMap;

use crate::catalog::CatalogSnapshot;
use crate::models::{CustomConfig, MealType, PlanMode, RecipeWithNutrition, Slot};
use crate::planner::constants::TIE_BREAK_POOL;
use crate::planner::keywords::KeywordTable;
use crate::planner::random::{choose, RandomSource};
use crate::planner::scoring::{custom_score, inventory_score, nutrition_deviation, seasonal_score};
use crate::planner::season::Season;

/// Request-wide inputs every strategy may read.
#[derive(Clone, Copy)]
pub struct PlanningContext<'a> {
    pub snapshot: &'a CatalogSnapshot,
    pub keywords: &'a KeywordTable,
    pub season: Season,
    pub custom: Option<&'a CustomConfig>,
}

impl<'a> PlanningContext<'a> {
    pub fn at(&self, slot: Slot) -> SlotContext<'a> {
        SlotContext {
            slot,
            snapshot: self.snapshot,
            keywords: self.keywords,
            season: self.season,
            custom: self.custom,
        }
    }
}

/// Inputs for choosing the recipe of one slot.
#[derive(Clone, Copy)]
pub struct SlotContext<'a> {
    pub slot: Slot,
    pub snapshot: &'a CatalogSnapshot,
    pub keywords: &'a KeywordTable,
    pub season: Season,
    pub custom: Option<&'a CustomConfig>,
}

impl SlotContext<'_> {
    pub fn meal_type(&self) -> MealType {
        self.slot.meal_type
    }
}

/// A way of picking one recipe for a slot.
///
/// `candidates` are already restricted to the slot's meal-type pool and to
/// recipes not yet used in the plan. Returns `None` only for an empty pool.
pub trait SelectionStrategy {
    fn mode(&self) -> PlanMode;

    fn select<'r>(
        &self,
        candidates: &[&'r RecipeWithNutrition],
        ctx: &SlotContext<'_>,
        rng: &mut dyn RandomSource,
    ) -> Option<&'r RecipeWithNutrition>;
}

/// Sort by score (stable, so catalog order breaks exact ties) and pick
/// randomly among the best `TIE_BREAK_POOL`.
fn pick_among_best<'r, F>(
    candidates: &[&'r RecipeWithNutrition],
    score: F,
    higher_is_better: bool,
    rng: &mut dyn RandomSource,
) -> Option<&'r RecipeWithNutrition>
where
    F: Fn(&RecipeWithNutrition) -> f64,
{
    let mut scored: Vec<(&RecipeWithNutrition, f64)> =
        candidates.iter().map(|r| (*r, score(*r))).collect();

    scored.sort_by(|a, b| {
        let ord = a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal);
        if higher_is_better { ord.reverse() } else { ord }
    });

    let best: Vec<&RecipeWithNutrition> = scored
        .into_iter()
        .take(TIE_BREAK_POOL)
        .map(|(r, _)| r)
        .collect();

    choose(&best, rng)
}

/// Cheapest first.
pub struct CostOptimized;

impl SelectionStrategy for CostOptimized {
    fn mode(&self) -> PlanMode {
        PlanMode::CostOptimized
    }

    fn select<'r>(
        &self,
        candidates: &[&'r RecipeWithNutrition],
        _ctx: &SlotContext<'_>,
        rng: &mut dyn RandomSource,
    ) -> Option<&'r RecipeWithNutrition> {
        pick_among_best(candidates, |r| r.cost_per_portion, false, rng)
    }
}

/// Closest to the meal type's nutrition target.
pub struct BalancedNutrition;

impl SelectionStrategy for BalancedNutrition {
    fn mode(&self) -> PlanMode {
        PlanMode::BalancedNutrition
    }

    fn select<'r>(
        &self,
        candidates: &[&'r RecipeWithNutrition],
        ctx: &SlotContext<'_>,
        rng: &mut dyn RandomSource,
    ) -> Option<&'r RecipeWithNutrition> {
        let meal_type = ctx.meal_type();
        pick_among_best(
            candidates,
            |r| nutrition_deviation(&r.nutrition, meal_type),
            false,
            rng,
        )
    }
}

/// Uniform choice; the unused-recipe restriction does the work.
pub struct MaxVariety;

impl SelectionStrategy for MaxVariety {
    fn mode(&self) -> PlanMode {
        PlanMode::Variety
    }

    fn select<'r>(
        &self,
        candidates: &[&'r RecipeWithNutrition],
        _ctx: &SlotContext<'_>,
        rng: &mut dyn RandomSource,
    ) -> Option<&'r RecipeWithNutrition> {
        choose(candidates, rng)
    }
}

/// Most seasonal keywords first; uniform when nothing is in season.
pub struct Seasonal;

impl SelectionStrategy for Seasonal {
    fn mode(&self) -> PlanMode {
        PlanMode::Seasonal
    }

    fn select<'r>(
        &self,
        candidates: &[&'r RecipeWithNutrition],
        ctx: &SlotContext<'_>,
        rng: &mut dyn RandomSource,
    ) -> Option<&'r RecipeWithNutrition> {
        let in_season: Vec<&RecipeWithNutrition> = candidates
            .iter()
            .copied()
            .filter(|r| seasonal_score(r, ctx.season, ctx.keywords) > 0.0)
            .collect();

        if in_season.is_empty() {
            return choose(candidates, rng);
        }

        pick_among_best(
            &in_season,
            |r| seasonal_score(r, ctx.season, ctx.keywords),
            true,
            rng,
        )
    }
}

/// Best stocked ingredients first.
pub struct InventoryBased;

impl SelectionStrategy for InventoryBased {
    fn mode(&self) -> PlanMode {
        PlanMode::InventoryBased
    }

    fn select<'r>(
        &self,
        candidates: &[&'r RecipeWithNutrition],
        ctx: &SlotContext<'_>,
        rng: &mut dyn RandomSource,
    ) -> Option<&'r RecipeWithNutrition> {
        pick_among_best(
            candidates,
            |r| inventory_score(ctx.snapshot, r.id),
            true,
            rng,
        )
    }
}

/// Highest custom-weighted score first.
pub struct CustomWeighted;

impl SelectionStrategy for CustomWeighted {
    fn mode(&self) -> PlanMode {
        PlanMode::Custom
    }

    fn select<'r>(
        &self,
        candidates: &[&'r RecipeWithNutrition],
        ctx: &SlotContext<'_>,
        rng: &mut dyn RandomSource,
    ) -> Option<&'r RecipeWithNutrition> {
        let default_config = CustomConfig::default();
        let config = ctx.custom.unwrap_or(&default_config);
        pick_among_best(
            candidates,
            |r| custom_score(r, &r.nutrition, config),
            true,
            rng,
        )
    }
}

/// Strategy lookup by mode.
pub struct StrategyRegistry {
    strategies: HashMap<PlanMode, Box<dyn SelectionStrategy>>,
}

impl StrategyRegistry {
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Register a strategy under its own mode, replacing any previous one.
    pub fn register(&mut self, strategy: Box<dyn SelectionStrategy>) {
        self.strategies.insert(strategy.mode(), strategy);
    }

    pub fn get(&self, mode: PlanMode) -> Option<&dyn SelectionStrategy> {
        self.strategies.get(&mode).map(|s| s.as_ref())
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(CostOptimized));
        registry.register(Box::new(BalancedNutrition));
        registry.register(Box::new(MaxVariety));
        registry.register(Box::new(Seasonal));
        registry.register(Box::new(InventoryBased));
        registry.register(Box::new(CustomWeighted));
        registry
    }
}

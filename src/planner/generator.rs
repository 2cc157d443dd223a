use std::collections::HashSet;

use log::debug;

use crate::models::{MealPlan, PlanEntry, RecipeId, RecipeWithNutrition, Slot};
use crate::planner::pool::CandidatePool;
use crate::planner::random::RandomSource;
use crate::planner::strategies::{PlanningContext, SelectionStrategy};

/// Result of one generation pass.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub plan: MealPlan,
    /// Slots filled by the strategy.
    pub filled: usize,
    /// Slots copied from the existing plan.
    pub kept: usize,
}

/// Fill every empty slot of `current`, one slot at a time in week order.
///
/// Existing entries are copied through untouched and count as used recipes.
/// Each slot draws from its meal-type pool minus recipes already used; when
/// that leaves nothing, the used set is cleared. With a weekly budget in the
/// custom config, candidates that would overrun it are dropped unless none
/// fit.
pub fn generate_plan(
    current: &MealPlan,
    pool: &CandidatePool<'_>,
    strategy: &dyn SelectionStrategy,
    ctx: &PlanningContext<'_>,
    rng: &mut dyn RandomSource,
) -> GeneratedPlan {
    let mut plan = MealPlan::new();
    let mut used: HashSet<RecipeId> = current.recipe_ids();
    let mut spent: f64 = current.iter().map(|(_, e)| e.cost_per_portion).sum();
    let weekly_cap = ctx.custom.and_then(|c| c.budget.max_weekly_cost);

    let mut filled = 0;
    let mut kept = 0;

    for slot in Slot::week() {
        if let Some(entry) = current.get(slot) {
            plan.insert(slot, entry.clone());
            kept += 1;
            continue;
        }

        let meal_pool = pool.for_meal(slot.meal_type);

        let mut candidates: Vec<&RecipeWithNutrition> = meal_pool
            .iter()
            .copied()
            .filter(|r| !used.contains(&r.id))
            .collect();

        if candidates.is_empty() {
            debug!("{}: every recipe already used, resetting variety", slot);
            used.clear();
            candidates = meal_pool;
        }

        if let Some(cap) = weekly_cap {
            let remaining = cap - spent;
            let affordable: Vec<&RecipeWithNutrition> = candidates
                .iter()
                .copied()
                .filter(|r| r.cost_per_portion <= remaining)
                .collect();
            if !affordable.is_empty() {
                candidates = affordable;
            }
        }

        let Some(recipe) = strategy
            .select(&candidates, &ctx.at(slot), rng)
            .or_else(|| candidates.first().copied())
        else {
            continue;
        };

        debug!(
            "{}: {} ({:.2} per portion) via {}",
            slot,
            recipe.name,
            recipe.cost_per_portion,
            strategy.mode()
        );

        plan.insert(slot, PlanEntry::from_recipe(recipe));
        used.insert(recipe.id);
        spent += recipe.cost_per_portion;
        filled += 1;
    }

    GeneratedPlan { plan, filled, kept }
}

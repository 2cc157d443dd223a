use std::cmp::Ordering;
use std::collections::HashSet;

use log::{debug, warn};

use crate::models::{
    Benefit, CustomConfig, MealPlan, PlanEntry, PlanMode, RecipeId, RecipeWithNutrition, Slot,
    Suggestion,
};
use crate::planner::constants::*;
use crate::planner::exclusions::is_excluded;
use crate::planner::pool::CandidatePool;
use crate::planner::random::{choose, RandomSource};
use crate::planner::scoring::{
    custom_score, inventory_score, is_nutritionally_off, is_understocked, nutrition_deviation,
};
use crate::planner::strategies::PlanningContext;

/// Optimized plan plus the replacements that produced it.
#[derive(Debug, Clone)]
pub struct OptimizedPlan {
    pub plan: MealPlan,
    pub suggestions: Vec<Suggestion>,
}

struct Replacement<'r> {
    recipe: &'r RecipeWithNutrition,
    reason: String,
    benefit: Benefit,
}

/// Re-score every occupied slot under `mode` and swap under-performers.
///
/// Alternatives always come from the same category of the filtered pool.
/// Slots without a qualifying alternative keep their entry. Entries whose
/// recipe is unknown to the catalog are left alone.
pub fn optimize_plan(
    current: &MealPlan,
    mode: PlanMode,
    pool: &CandidatePool<'_>,
    ctx: &PlanningContext<'_>,
    rng: &mut dyn RandomSource,
) -> OptimizedPlan {
    let default_config = CustomConfig::default();
    let config = ctx.custom.unwrap_or(&default_config);
    let exclusions = config.exclusions.normalized();

    let mut plan = current.clone();
    let mut suggestions = Vec::new();
    let mut present: HashSet<RecipeId> = current.recipe_ids();
    let mut seen: HashSet<RecipeId> = HashSet::new();

    for (slot, entry) in current.iter() {
        let Some(recipe) = ctx.snapshot.get(entry.recipe_id) else {
            warn!(
                "{}: recipe {} ('{}') is not in the catalog, leaving it",
                slot, entry.recipe_id, entry.recipe_name
            );
            continue;
        };

        let repeated = !seen.insert(recipe.id);
        let alternatives = pool.alternatives(recipe);

        let replacement = match mode {
            PlanMode::CostOptimized => cheaper(recipe, &alternatives),
            PlanMode::BalancedNutrition => closer_to_target(slot, recipe, &alternatives),
            PlanMode::Variety if repeated => fresh(&alternatives, &present, rng),
            PlanMode::Variety => None,
            PlanMode::Seasonal => in_season(recipe, &alternatives, ctx, rng),
            PlanMode::InventoryBased => better_stocked(recipe, &alternatives, ctx),
            PlanMode::Custom => {
                let excluded = is_excluded(recipe, &exclusions, ctx.keywords);
                higher_custom_score(recipe, excluded, &alternatives, config)
            }
        };

        let Some(replacement) = replacement else {
            continue;
        };

        debug!(
            "{}: {} -> {} ({})",
            slot, recipe.name, replacement.recipe.name, replacement.reason
        );

        present.insert(replacement.recipe.id);
        seen.insert(replacement.recipe.id);
        plan.insert(slot, PlanEntry::from_recipe(replacement.recipe));
        suggestions.push(Suggestion {
            slot,
            reason: replacement.reason,
            original_recipe: recipe.name.clone(),
            suggested_recipe: replacement.recipe.name.clone(),
            benefit: replacement.benefit,
        });
    }

    OptimizedPlan { plan, suggestions }
}

/// First element under `key`, ties keeping pool order.
fn best_by<'r, F>(
    candidates: impl IntoIterator<Item = &'r RecipeWithNutrition>,
    key: F,
    higher_is_better: bool,
) -> Option<&'r RecipeWithNutrition>
where
    F: Fn(&RecipeWithNutrition) -> f64,
{
    let mut ranked: Vec<&RecipeWithNutrition> = candidates.into_iter().collect();
    ranked.sort_by(|a, b| {
        let ord = key(*a).partial_cmp(&key(*b)).unwrap_or(Ordering::Equal);
        if higher_is_better { ord.reverse() } else { ord }
    });
    ranked.first().copied()
}

fn cheaper<'r>(
    recipe: &RecipeWithNutrition,
    alternatives: &[&'r RecipeWithNutrition],
) -> Option<Replacement<'r>> {
    if recipe.cost_per_portion <= COST_REPLACEMENT_THRESHOLD {
        return None;
    }

    let cheapest = best_by(
        alternatives
            .iter()
            .copied()
            .filter(|alt| alt.cost_per_portion < recipe.cost_per_portion),
        |r| r.cost_per_portion,
        false,
    )?;

    Some(Replacement {
        recipe: cheapest,
        reason: "Cheaper alternative".to_string(),
        benefit: Benefit::Saving(recipe.cost_per_portion - cheapest.cost_per_portion),
    })
}

fn closer_to_target<'r>(
    slot: Slot,
    recipe: &RecipeWithNutrition,
    alternatives: &[&'r RecipeWithNutrition],
) -> Option<Replacement<'r>> {
    let meal_type = slot.meal_type;
    if !is_nutritionally_off(&recipe.nutrition, meal_type) {
        return None;
    }

    let current = nutrition_deviation(&recipe.nutrition, meal_type);
    let best = best_by(
        alternatives.iter().copied(),
        |r| nutrition_deviation(&r.nutrition, meal_type),
        false,
    )?;
    let improved = nutrition_deviation(&best.nutrition, meal_type);
    if improved >= current {
        return None;
    }

    Some(Replacement {
        recipe: best,
        reason: format!("Closer to the {} nutrition target", meal_type.as_str()),
        benefit: Benefit::Improvement((current - improved) / current * 100.0),
    })
}

fn fresh<'r>(
    alternatives: &[&'r RecipeWithNutrition],
    present: &HashSet<RecipeId>,
    rng: &mut dyn RandomSource,
) -> Option<Replacement<'r>> {
    let options: Vec<&RecipeWithNutrition> = alternatives
        .iter()
        .copied()
        .filter(|alt| !present.contains(&alt.id))
        .take(TIE_BREAK_POOL)
        .collect();

    let pick = choose(&options, rng)?;
    Some(Replacement {
        recipe: pick,
        reason: "Repeated recipe".to_string(),
        benefit: Benefit::Benefit("More variety".to_string()),
    })
}

fn in_season<'r>(
    recipe: &RecipeWithNutrition,
    alternatives: &[&'r RecipeWithNutrition],
    ctx: &PlanningContext<'_>,
    rng: &mut dyn RandomSource,
) -> Option<Replacement<'r>> {
    if ctx.keywords.seasonal_hits(recipe, ctx.season) > 0 {
        return None;
    }

    let mut seasonal: Vec<&RecipeWithNutrition> = alternatives
        .iter()
        .copied()
        .filter(|alt| ctx.keywords.seasonal_hits(alt, ctx.season) > 0)
        .collect();
    seasonal.sort_by_key(|alt| std::cmp::Reverse(ctx.keywords.seasonal_hits(alt, ctx.season)));
    seasonal.truncate(TIE_BREAK_POOL);

    let pick = choose(&seasonal, rng)?;
    Some(Replacement {
        recipe: pick,
        reason: "Out of season".to_string(),
        benefit: Benefit::Benefit(format!("In season for {}", ctx.season)),
    })
}

fn better_stocked<'r>(
    recipe: &RecipeWithNutrition,
    alternatives: &[&'r RecipeWithNutrition],
    ctx: &PlanningContext<'_>,
) -> Option<Replacement<'r>> {
    if !is_understocked(ctx.snapshot, recipe.id) {
        return None;
    }

    let score = |r: &RecipeWithNutrition| inventory_score(ctx.snapshot, r.id);
    let best = best_by(
        alternatives
            .iter()
            .copied()
            .filter(|alt| score(*alt) > INVENTORY_REPLACEMENT_MIN_SCORE),
        score,
        true,
    )?;

    Some(Replacement {
        recipe: best,
        reason: "Ingredients low in stock".to_string(),
        benefit: Benefit::Improvement(score(best) - score(recipe)),
    })
}

fn higher_custom_score<'r>(
    recipe: &RecipeWithNutrition,
    excluded: bool,
    alternatives: &[&'r RecipeWithNutrition],
    config: &CustomConfig,
) -> Option<Replacement<'r>> {
    let current = custom_score(recipe, &recipe.nutrition, config);
    if !excluded && current >= CUSTOM_BASE_SCORE {
        return None;
    }

    let score = |r: &RecipeWithNutrition| custom_score(r, &r.nutrition, config);
    let best = best_by(
        alternatives
            .iter()
            .copied()
            .filter(|alt| excluded || score(*alt) > current),
        score,
        true,
    )?;

    let reason = if excluded {
        "Excluded by preferences"
    } else {
        "Below preference score"
    };

    Some(Replacement {
        recipe: best,
        reason: reason.to_string(),
        benefit: Benefit::Improvement(score(best) - current),
    })
}

use crate::catalog::CatalogSnapshot;
use crate::models::{CustomConfig, MealType, Nutrition, Recipe, RecipeId};
use crate::planner::constants::*;
use crate::planner::keywords::KeywordTable;
use crate::planner::season::Season;

/// Relative deviation `|actual - target| / target`; zero targets yield 0.
#[inline]
pub fn relative_deviation(actual: f64, target: f64) -> f64 {
    if target == 0.0 {
        return 0.0;
    }
    (actual - target).abs() / target
}

/// Sum of relative deviations from the meal type's target over protein,
/// calories, carbs and fat. Lower is better.
pub fn nutrition_deviation(nutrition: &Nutrition, meal_type: MealType) -> f64 {
    let target = meal_target(meal_type);
    relative_deviation(nutrition.protein, target.protein)
        + relative_deviation(nutrition.calories, target.calories)
        + relative_deviation(nutrition.carbs, target.carbs)
        + relative_deviation(nutrition.fat, target.fat)
}

/// True when protein or calories are off target by more than the threshold.
pub fn is_nutritionally_off(nutrition: &Nutrition, meal_type: MealType) -> bool {
    let target = meal_target(meal_type);
    relative_deviation(nutrition.protein, target.protein) > NUTRITION_DEVIATION_THRESHOLD
        || relative_deviation(nutrition.calories, target.calories) > NUTRITION_DEVIATION_THRESHOLD
}

/// `+10` per seasonal keyword in the recipe name or tags.
pub fn seasonal_score(recipe: &Recipe, season: Season, keywords: &KeywordTable) -> f64 {
    keywords.seasonal_hits(recipe, season) as f64 * SEASONAL_KEYWORD_SCORE
}

/// Stock availability of a recipe's ingredients. Higher is better.
///
/// Sums `current / max(min, 1)` over ingredients that are in stock and
/// divides by the total ingredient count, so missing stock drags the score
/// down. Recipes without ingredients score 0.
pub fn inventory_score(snapshot: &CatalogSnapshot, recipe_id: RecipeId) -> f64 {
    let links = snapshot.ingredients(recipe_id);
    if links.is_empty() {
        return 0.0;
    }

    let total: f64 = links
        .iter()
        .filter_map(|link| snapshot.stock(link.product_id))
        .filter(|level| level.current > 0.0)
        .map(|level| level.availability_ratio())
        .sum();

    total / links.len() as f64
}

/// True if any ingredient sits more than 30% below its minimum stock.
pub fn is_understocked(snapshot: &CatalogSnapshot, recipe_id: RecipeId) -> bool {
    snapshot
        .ingredients(recipe_id)
        .iter()
        .filter_map(|link| snapshot.stock(link.product_id))
        .any(|level| level.min > 0.0 && level.current < level.min * UNDERSTOCK_RATIO)
}

/// Custom-weighted score starting from 100. Higher is better.
pub fn custom_score(recipe: &Recipe, nutrition: &Nutrition, config: &CustomConfig) -> f64 {
    let mut score = CUSTOM_BASE_SCORE;

    if let Some(cap) = config.budget.max_cost_per_portion {
        if recipe.cost_per_portion > cap {
            score -= CUSTOM_OVER_BUDGET_PENALTY;
        } else if recipe.cost_per_portion < cap * CUSTOM_CHEAP_RATIO {
            score += CUSTOM_CHEAP_BONUS;
        }
    }

    let limits = &config.nutrition;
    if let Some(min_protein) = limits.min_protein {
        if nutrition.protein < min_protein {
            score -= CUSTOM_LOW_PROTEIN_PENALTY;
        }
    }
    if let Some(max_calories) = limits.max_calories {
        if nutrition.calories > max_calories {
            score -= CUSTOM_HIGH_CALORIE_PENALTY;
        }
    }
    if limits.min_veggie_percent.is_some_and(|p| p > 0.0) && recipe.has_tag_containing(&VEGGIE_TAGS)
    {
        score += CUSTOM_VEGGIE_BONUS;
    }
    if let Some(max_salt) = limits.max_salt_mg {
        if nutrition.salt_mg > max_salt {
            score -= CUSTOM_SALT_PENALTY;
        }
    }

    if let Some(max_prep) = config.time_management.max_prep_time {
        if recipe.prep_time > max_prep {
            score -= CUSTOM_SLOW_PREP_PENALTY;
        }
    }
    if recipe.prep_time <= QUICK_PREP_MINUTES {
        score += CUSTOM_QUICK_PREP_BONUS;
    }

    if matches_preferred_cuisine(recipe, &config.variety.cuisine_preferences) {
        score += CUSTOM_CUISINE_BONUS;
    }

    if config
        .variety
        .seasonal_preference
        .is_some_and(|p| p > SEASONAL_PREFERENCE_THRESHOLD)
        && recipe.has_tag_containing(&FRESHNESS_TAGS)
    {
        score += CUSTOM_FRESHNESS_BONUS;
    }

    score
}

fn matches_preferred_cuisine(recipe: &Recipe, preferences: &[String]) -> bool {
    let cuisine = recipe.cuisine.as_deref().unwrap_or("").to_lowercase();
    preferences
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .any(|p| recipe.mentions(&p) || cuisine.contains(&p))
}

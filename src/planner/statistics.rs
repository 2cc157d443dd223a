use crate::catalog::CatalogSnapshot;
use crate::models::{Improvements, MealPlan, Nutrition, PlanStatistics};
use crate::planner::scoring::nutrition_deviation;

/// Totals over the filled slots of `plan`.
///
/// Cost comes from each entry, nutrition from the snapshot. Recipes the
/// snapshot does not know contribute zero nutrition.
pub fn plan_statistics(plan: &MealPlan, snapshot: &CatalogSnapshot) -> PlanStatistics {
    let mut total_cost = 0.0;
    let mut nutrition = Nutrition::default();

    for (_, entry) in plan.iter() {
        total_cost += entry.cost_per_portion;
        if let Some(recipe) = snapshot.get(entry.recipe_id) {
            nutrition.add(&recipe.nutrition);
        }
    }

    let total_meals = plan.len();
    let unique_recipes = plan.recipe_ids().len();

    let (average_cost_per_portion, variety_score) = if total_meals == 0 {
        (0.0, 0.0)
    } else {
        (
            total_cost / total_meals as f64,
            unique_recipes as f64 / total_meals as f64,
        )
    };

    PlanStatistics {
        total_cost,
        average_cost_per_portion,
        total_protein: nutrition.protein,
        total_calories: nutrition.calories,
        total_fat: nutrition.fat,
        total_carbs: nutrition.carbs,
        unique_recipes,
        total_meals,
        variety_score,
    }
}

/// Mean deviation from the meal-type targets over slots with known recipes.
fn mean_deviation(plan: &MealPlan, snapshot: &CatalogSnapshot) -> f64 {
    let deviations: Vec<f64> = plan
        .iter()
        .filter_map(|(slot, entry)| {
            snapshot
                .get(entry.recipe_id)
                .map(|r| nutrition_deviation(&r.nutrition, slot.meal_type))
        })
        .collect();

    if deviations.is_empty() {
        return 0.0;
    }
    deviations.iter().sum::<f64>() / deviations.len() as f64
}

fn percent_reduction(before: f64, after: f64) -> f64 {
    if before <= 0.0 {
        return 0.0;
    }
    (before - after) / before * 100.0
}

/// How `after` compares to `before`. Positive numbers are gains.
pub fn compare_plans(
    before: &MealPlan,
    after: &MealPlan,
    snapshot: &CatalogSnapshot,
) -> Improvements {
    let before_stats = plan_statistics(before, snapshot);
    let after_stats = plan_statistics(after, snapshot);

    Improvements {
        cost_reduction: percent_reduction(before_stats.total_cost, after_stats.total_cost),
        nutrition_improvement: percent_reduction(
            mean_deviation(before, snapshot),
            mean_deviation(after, snapshot),
        ),
        variety_increase: after_stats.unique_recipes as i64 - before_stats.unique_recipes as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, IngredientLink, MealType, PlanEntry, Product, Recipe, RecipeId, Slot};

    fn recipe(id: RecipeId, cost: f64) -> Recipe {
        Recipe {
            id,
            name: format!("Recipe {}", id),
            category: "lunch".to_string(),
            portions: 1,
            prep_time: 10,
            cook_time: 10,
            cost_per_portion: cost,
            tags: String::new(),
            cuisine: None,
        }
    }

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot::from_parts(
            vec![recipe(1, 2.0), recipe(2, 6.0)],
            vec![
                IngredientLink {
                    recipe_id: 1,
                    product_id: 7,
                    quantity: 200.0,
                    unit: "g".to_string(),
                },
                IngredientLink {
                    recipe_id: 2,
                    product_id: 7,
                    quantity: 100.0,
                    unit: "g".to_string(),
                },
            ],
            vec![Product {
                id: 7,
                name: "Chickpeas".to_string(),
                nutrition: Nutrition {
                    protein: 15.0,
                    calories: 300.0,
                    fat: 5.0,
                    carbs: 35.0,
                    salt_mg: 20.0,
                },
                current_stock: 10.0,
                min_stock: 5.0,
            }],
        )
    }

    fn entry(snapshot: &CatalogSnapshot, id: RecipeId) -> PlanEntry {
        PlanEntry::from_recipe(snapshot.get(id).unwrap())
    }

    #[test]
    fn test_empty_plan_has_zero_averages() {
        let stats = plan_statistics(&MealPlan::new(), &snapshot());
        assert_eq!(stats, PlanStatistics::default());
    }

    #[test]
    fn test_statistics_totals() {
        let snapshot = snapshot();
        let mut plan = MealPlan::new();
        plan.insert(Slot::new(Day::Monday, MealType::Lunch), entry(&snapshot, 1));
        plan.insert(Slot::new(Day::Tuesday, MealType::Lunch), entry(&snapshot, 1));
        plan.insert(Slot::new(Day::Friday, MealType::Lunch), entry(&snapshot, 2));

        let stats = plan_statistics(&plan, &snapshot);

        assert_eq!(stats.total_meals, 3);
        assert_eq!(stats.unique_recipes, 2);
        assert_eq!(stats.total_cost, 10.0);
        assert!((stats.average_cost_per_portion - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.total_protein, 75.0);
        assert_eq!(stats.total_calories, 1500.0);
        assert!((stats.variety_score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_recipe_counts_cost_only() {
        let snapshot = snapshot();
        let mut plan = MealPlan::new();
        let mut ghost = entry(&snapshot, 1);
        ghost.recipe_id = 42;
        plan.insert(Slot::new(Day::Sunday, MealType::Dinner), ghost);

        let stats = plan_statistics(&plan, &snapshot);
        assert_eq!(stats.total_cost, 2.0);
        assert_eq!(stats.total_calories, 0.0);
        assert_eq!(stats.variety_score, 1.0);
    }

    #[test]
    fn test_compare_plans() {
        let snapshot = snapshot();
        let monday = Slot::new(Day::Monday, MealType::Lunch);
        let tuesday = Slot::new(Day::Tuesday, MealType::Lunch);

        let mut before = MealPlan::new();
        before.insert(monday, entry(&snapshot, 2));
        before.insert(tuesday, entry(&snapshot, 2));

        let mut after = before.clone();
        after.insert(tuesday, entry(&snapshot, 1));

        let improvements = compare_plans(&before, &after, &snapshot);

        assert!((improvements.cost_reduction - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(improvements.variety_increase, 1);
        // Recipe 1 (30 g / 600 kcal) sits closer to the lunch target.
        assert!(improvements.nutrition_improvement > 0.0);
    }
}

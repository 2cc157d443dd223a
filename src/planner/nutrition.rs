use crate::models::{IngredientLink, Nutrition, ProductId, Recipe};
use crate::planner::constants::NUTRITION_REFERENCE_QUANTITY;

/// Per-portion nutrition of a recipe.
///
/// Each product's per-100-unit facts are scaled by `quantity / 100`, summed
/// over the ingredient links, then divided by the portion count (zero
/// portions count as one). Products the lookup does not know contribute
/// nothing.
pub fn aggregate_nutrition<F>(recipe: &Recipe, links: &[IngredientLink], lookup: F) -> Nutrition
where
    F: Fn(ProductId) -> Option<Nutrition>,
{
    let mut total = Nutrition::default();

    for link in links {
        if let Some(per_100) = lookup(link.product_id) {
            total.add(&per_100.scaled(link.quantity / NUTRITION_REFERENCE_QUANTITY));
        }
    }

    total.scaled(1.0 / recipe.portion_divisor())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(portions: u32) -> Recipe {
        Recipe {
            id: 1,
            name: "Chili".to_string(),
            category: "dinner".to_string(),
            portions,
            prep_time: 20,
            cook_time: 40,
            cost_per_portion: 3.0,
            tags: String::new(),
            cuisine: None,
        }
    }

    fn link(product_id: ProductId, quantity: f64) -> IngredientLink {
        IngredientLink {
            recipe_id: 1,
            product_id,
            quantity,
            unit: "g".to_string(),
        }
    }

    fn lookup(product_id: ProductId) -> Option<Nutrition> {
        match product_id {
            1 => Some(Nutrition {
                protein: 20.0,
                calories: 200.0,
                fat: 10.0,
                carbs: 0.0,
                salt_mg: 100.0,
            }),
            2 => Some(Nutrition {
                protein: 5.0,
                calories: 100.0,
                fat: 1.0,
                carbs: 20.0,
                salt_mg: 0.0,
            }),
            _ => None,
        }
    }

    #[test]
    fn test_scales_and_divides_by_portions() {
        let links = vec![link(1, 400.0), link(2, 200.0)];
        let n = aggregate_nutrition(&recipe(4), &links, lookup);

        // (80 + 10) / 4 protein, (800 + 200) / 4 kcal
        assert!((n.protein - 22.5).abs() < 1e-9);
        assert!((n.calories - 250.0).abs() < 1e-9);
        assert!((n.fat - 10.5).abs() < 1e-9);
        assert!((n.carbs - 10.0).abs() < 1e-9);
        assert!((n.salt_mg - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_products_contribute_zero() {
        let links = vec![link(1, 100.0), link(99, 500.0)];
        let n = aggregate_nutrition(&recipe(1), &links, lookup);
        assert!((n.calories - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_portions_treated_as_one() {
        let links = vec![link(2, 100.0)];
        let n = aggregate_nutrition(&recipe(0), &links, lookup);
        assert!((n.calories - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_ingredients_is_zero() {
        let n = aggregate_nutrition(&recipe(2), &[], lookup);
        assert_eq!(n, Nutrition::default());
    }
}

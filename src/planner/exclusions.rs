use log::debug;

use crate::models::{Exclusions, Recipe, RecipeWithNutrition};
use crate::planner::keywords::KeywordTable;

/// Filter a pool by ingredient, then category, then allergen exclusions.
///
/// Terms are expected lowercase (see [`Exclusions::normalized`]). Each stage
/// only sees the survivors of the previous one. The result may be empty.
pub fn apply_exclusions<'a>(
    pool: &[&'a RecipeWithNutrition],
    exclusions: &Exclusions,
    keywords: &KeywordTable,
) -> Vec<&'a RecipeWithNutrition> {
    let mut survivors: Vec<&RecipeWithNutrition> = pool.to_vec();

    if !exclusions.ingredients.is_empty() {
        survivors.retain(|r| !excluded_by_ingredient(r, &exclusions.ingredients, keywords));
        debug!("{} recipes left after ingredient exclusions", survivors.len());
    }

    if !exclusions.categories.is_empty() {
        survivors.retain(|r| !excluded_by_category(r, &exclusions.categories));
        debug!("{} recipes left after category exclusions", survivors.len());
    }

    if !exclusions.allergens.is_empty() {
        survivors.retain(|r| !excluded_by_allergen(r, &exclusions.allergens));
        debug!("{} recipes left after allergen exclusions", survivors.len());
    }

    survivors
}

/// Whether any exclusion rule rejects the recipe.
pub fn is_excluded(recipe: &Recipe, exclusions: &Exclusions, keywords: &KeywordTable) -> bool {
    excluded_by_ingredient(recipe, &exclusions.ingredients, keywords)
        || excluded_by_category(recipe, &exclusions.categories)
        || excluded_by_allergen(recipe, &exclusions.allergens)
}

fn excluded_by_ingredient(recipe: &Recipe, terms: &[String], keywords: &KeywordTable) -> bool {
    terms
        .iter()
        .any(|term| keywords.ingredient_term_matches(recipe, term))
}

fn excluded_by_category(recipe: &Recipe, categories: &[String]) -> bool {
    categories.iter().any(|c| recipe.is_category(c))
}

fn excluded_by_allergen(recipe: &Recipe, allergens: &[String]) -> bool {
    let tags = recipe.tags_key();
    allergens.iter().any(|a| tags.contains(a.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrition;

    fn recipe(id: u64, name: &str, category: &str, tags: &str) -> RecipeWithNutrition {
        RecipeWithNutrition {
            recipe: Recipe {
                id,
                name: name.to_string(),
                category: category.to_string(),
                portions: 1,
                prep_time: 10,
                cook_time: 10,
                cost_per_portion: 2.0,
                tags: tags.to_string(),
                cuisine: None,
            },
            nutrition: Nutrition::default(),
        }
    }

    fn catalog() -> Vec<RecipeWithNutrition> {
        vec![
            recipe(1, "Bratwurst with Sauerkraut", "dinner", ""),
            recipe(2, "Tomato Soup", "lunch", "vegan"),
            recipe(3, "Chocolate Cake", "Dessert", "contains-nuts, dairy"),
            recipe(4, "Chicken Curry", "dinner", "spicy"),
            recipe(5, "Peanut Noodles", "lunch", "peanut"),
        ]
    }

    fn ids(pool: &[&RecipeWithNutrition]) -> Vec<u64> {
        pool.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_no_exclusions_keeps_everything() {
        let recipes = catalog();
        let pool: Vec<&RecipeWithNutrition> = recipes.iter().collect();
        let out = apply_exclusions(&pool, &Exclusions::default(), &KeywordTable::builtin());
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn test_ingredient_category_allergen_are_conjunctive() {
        let recipes = catalog();
        let pool: Vec<&RecipeWithNutrition> = recipes.iter().collect();
        let exclusions = Exclusions {
            ingredients: vec!["pork".to_string()],
            categories: vec!["dessert".to_string()],
            allergens: vec!["peanut".to_string()],
        };

        let out = apply_exclusions(&pool, &exclusions, &KeywordTable::builtin());
        assert_eq!(ids(&out), vec![2, 4]);
    }

    #[test]
    fn test_meat_alias() {
        let recipes = catalog();
        let pool: Vec<&RecipeWithNutrition> = recipes.iter().collect();
        let exclusions = Exclusions {
            ingredients: vec!["meat".to_string()],
            ..Default::default()
        };

        let out = apply_exclusions(&pool, &exclusions, &KeywordTable::builtin());
        assert_eq!(ids(&out), vec![2, 3, 5]);
    }

    #[test]
    fn test_everything_excluded_gives_empty_pool() {
        let recipes = catalog();
        let pool: Vec<&RecipeWithNutrition> = recipes.iter().collect();
        let exclusions = Exclusions {
            categories: vec![
                "dinner".to_string(),
                "lunch".to_string(),
                "dessert".to_string(),
            ],
            ..Default::default()
        };

        assert!(apply_exclusions(&pool, &exclusions, &KeywordTable::builtin()).is_empty());
    }

    #[test]
    fn test_is_excluded() {
        let recipes = catalog();
        let keywords = KeywordTable::builtin();
        let exclusions = Exclusions {
            allergens: vec!["dairy".to_string()],
            ..Default::default()
        };
        assert!(is_excluded(&recipes[2], &exclusions, &keywords));
        assert!(!is_excluded(&recipes[1], &exclusions, &keywords));
    }
}

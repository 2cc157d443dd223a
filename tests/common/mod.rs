#![allow(dead_code)]

use weekly_menu_planner_rs::catalog::{CatalogData, CatalogSnapshot, InMemoryCatalog};
use weekly_menu_planner_rs::models::{CustomConfig, Exclusions, PlanMode};
use weekly_menu_planner_rs::planner::{
    ExclusionFallback, KeywordTable, MenuPlanner, PlannerOptions, Season,
};

pub const CATALOG: &str = r#"{
    "recipes": [
        {"id": 1, "name": "Porridge", "category": "breakfast", "costPerPortion": 1.2, "prepTime": 5, "cookTime": 10, "tags": "vegetarian, quick"},
        {"id": 2, "name": "Ham Omelette", "category": "breakfast", "costPerPortion": 2.4, "prepTime": 10, "cookTime": 10, "tags": "protein"},
        {"id": 3, "name": "Bacon Pancakes", "category": "breakfast", "costPerPortion": 3.1, "prepTime": 15, "cookTime": 15},
        {"id": 4, "name": "Berry Muesli", "category": "breakfast", "costPerPortion": 1.8, "prepTime": 5, "tags": "vegan, seasonal"},

        {"id": 10, "name": "Lentil Soup", "category": "lunch", "costPerPortion": 1.5, "portions": 4, "prepTime": 15, "cookTime": 40, "tags": "vegan"},
        {"id": 11, "name": "Pasta Pomodoro", "category": "lunch", "costPerPortion": 2.0, "portions": 2, "prepTime": 10, "cookTime": 15, "cuisine": "italian"},
        {"id": 12, "name": "Chickpea Curry", "category": "lunch", "costPerPortion": 2.5, "portions": 2, "prepTime": 15, "cookTime": 30, "cuisine": "indian", "tags": "vegan, spicy"},
        {"id": 13, "name": "Bratwurst with Sauerkraut", "category": "lunch", "costPerPortion": 3.0, "prepTime": 10, "cookTime": 20, "tags": "hearty"},
        {"id": 14, "name": "Salmon Bowl", "category": "lunch", "costPerPortion": 6.0, "prepTime": 20, "cookTime": 10, "tags": "fish, omega3"},

        {"id": 20, "name": "Pumpkin Risotto", "category": "dinner", "costPerPortion": 3.2, "portions": 2, "prepTime": 15, "cookTime": 35, "tags": "vegetarian, regional"},
        {"id": 21, "name": "Pork Schnitzel", "category": "dinner", "costPerPortion": 5.5, "prepTime": 20, "cookTime": 15},
        {"id": 22, "name": "Beef Goulash", "category": "dinner", "costPerPortion": 6.5, "portions": 4, "prepTime": 25, "cookTime": 90},
        {"id": 23, "name": "Vegetable Stir Fry", "category": "dinner", "costPerPortion": 2.8, "prepTime": 15, "cookTime": 10, "tags": "vegan, quick"},
        {"id": 24, "name": "Mushroom Stroganoff", "category": "dinner", "costPerPortion": 3.6, "portions": 2, "prepTime": 15, "cookTime": 25, "tags": "vegetarian"}
    ],
    "ingredients": [
        {"recipeId": 1, "productId": 1, "quantity": 80, "unit": "g"},
        {"recipeId": 2, "productId": 2, "quantity": 150, "unit": "g"},
        {"recipeId": 2, "productId": 3, "quantity": 50, "unit": "g"},
        {"recipeId": 3, "productId": 3, "quantity": 60, "unit": "g"},
        {"recipeId": 3, "productId": 1, "quantity": 50, "unit": "g"},
        {"recipeId": 4, "productId": 1, "quantity": 70, "unit": "g"},
        {"recipeId": 10, "productId": 4, "quantity": 400, "unit": "g"},
        {"recipeId": 11, "productId": 7, "quantity": 240, "unit": "g"},
        {"recipeId": 12, "productId": 4, "quantity": 300, "unit": "g"},
        {"recipeId": 13, "productId": 3, "quantity": 150, "unit": "g"},
        {"recipeId": 14, "productId": 8, "quantity": 150, "unit": "g"},
        {"recipeId": 20, "productId": 5, "quantity": 400, "unit": "g"},
        {"recipeId": 20, "productId": 7, "quantity": 160, "unit": "g"},
        {"recipeId": 21, "productId": 3, "quantity": 180, "unit": "g"},
        {"recipeId": 22, "productId": 6, "quantity": 800, "unit": "g"},
        {"recipeId": 23, "productId": 5, "quantity": 100, "unit": "g"},
        {"recipeId": 23, "productId": 4, "quantity": 50, "unit": "g"},
        {"recipeId": 24, "productId": 7, "quantity": 200, "unit": "g"}
    ],
    "products": [
        {"id": 1, "name": "Oats", "protein": 13, "calories": 380, "fat": 7, "carbs": 60, "saltMg": 5, "currentStock": 20, "minStock": 5},
        {"id": 2, "name": "Eggs", "protein": 13, "calories": 155, "fat": 11, "carbs": 1, "saltMg": 140, "currentStock": 12, "minStock": 6},
        {"id": 3, "name": "Pork", "protein": 25, "calories": 250, "fat": 15, "carbs": 0, "saltMg": 60, "currentStock": 2, "minStock": 10},
        {"id": 4, "name": "Chickpeas", "protein": 19, "calories": 360, "fat": 6, "carbs": 60, "saltMg": 25, "currentStock": 30, "minStock": 10},
        {"id": 5, "name": "Pumpkin", "protein": 1, "calories": 26, "fat": 0.1, "carbs": 6.5, "saltMg": 1, "currentStock": 8, "minStock": 4},
        {"id": 6, "name": "Beef", "protein": 26, "calories": 250, "fat": 15, "carbs": 0, "saltMg": 70, "currentStock": 5, "minStock": 5},
        {"id": 7, "name": "Pasta", "protein": 13, "calories": 370, "fat": 1.5, "carbs": 75, "saltMg": 6, "currentStock": 40, "minStock": 10},
        {"id": 8, "name": "Salmon", "protein": 20, "calories": 208, "fat": 13, "carbs": 0, "saltMg": 60, "currentStock": 3, "minStock": 4}
    ]
}"#;

pub fn snapshot() -> CatalogSnapshot {
    let data: CatalogData = serde_json::from_str(CATALOG).unwrap();
    let catalog = InMemoryCatalog::new(data);
    CatalogSnapshot::load(&catalog, &catalog, "demo").unwrap()
}

pub fn planner(season: Season) -> MenuPlanner {
    planner_with(season, ExclusionFallback::Reject)
}

pub fn planner_with(season: Season, exclusion_fallback: ExclusionFallback) -> MenuPlanner {
    MenuPlanner::new(snapshot(), KeywordTable::builtin()).with_options(PlannerOptions {
        season: Some(season),
        exclusion_fallback,
    })
}

pub fn excluding(ingredients: &[&str]) -> CustomConfig {
    CustomConfig {
        exclusions: Exclusions {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Lowercased name and tags, the text exclusions match against.
pub fn searchable(snapshot: &CatalogSnapshot, id: u64) -> String {
    let recipe = snapshot.get(id).unwrap();
    format!("{} {}", recipe.name, recipe.tags).to_lowercase()
}

pub const SEEDS: std::ops::Range<u64> = 0..40;

pub const ALL_MODES: [PlanMode; 6] = PlanMode::ALL;

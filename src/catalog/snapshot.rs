use std::collections::HashMap;

use log::debug;

use crate::catalog::provider::{CatalogProvider, StockProvider};
use crate::error::Result;
use crate::models::{
    IngredientLink, Product, ProductId, Recipe, RecipeId, RecipeWithNutrition, StockLevel,
};
use crate::planner::nutrition::aggregate_nutrition;

/// Everything one planning request reads, captured once up front.
///
/// Recipes keep the provider's order, which is what "first recipe" means
/// wherever the engine falls back.
pub struct CatalogSnapshot {
    recipes: Vec<RecipeWithNutrition>,
    index: HashMap<RecipeId, usize>,
    ingredients: HashMap<RecipeId, Vec<IngredientLink>>,
    stock: HashMap<ProductId, StockLevel>,
}

impl CatalogSnapshot {
    /// Read recipes, ingredients, nutrition and stock from the providers.
    pub fn load<C, S>(catalog: &C, stock: &S, tenant: &str) -> Result<Self>
    where
        C: CatalogProvider + ?Sized,
        S: StockProvider + ?Sized,
    {
        let recipes = catalog.list_recipes(tenant)?;

        let mut ingredients = HashMap::with_capacity(recipes.len());
        let mut stock_levels = HashMap::new();
        let mut annotated = Vec::with_capacity(recipes.len());

        for recipe in recipes {
            let links = catalog.list_ingredients(recipe.id)?;
            let nutrition = aggregate_nutrition(&recipe, &links, |pid| {
                catalog.product_nutrition(pid)
            });

            for link in &links {
                if let Some(level) = stock.stock(link.product_id) {
                    stock_levels.insert(link.product_id, level);
                }
            }

            ingredients.insert(recipe.id, links);
            annotated.push(RecipeWithNutrition { recipe, nutrition });
        }

        debug!(
            "Snapshot for tenant '{}': {} recipes, {} stocked products",
            tenant,
            annotated.len(),
            stock_levels.len()
        );

        Ok(Self::assemble(annotated, ingredients, stock_levels))
    }

    /// Build a snapshot directly from owned parts.
    pub fn from_parts(
        recipes: Vec<Recipe>,
        links: Vec<IngredientLink>,
        products: Vec<Product>,
    ) -> Self {
        let products: HashMap<ProductId, Product> =
            products.into_iter().map(|p| (p.id, p)).collect();

        let mut ingredients: HashMap<RecipeId, Vec<IngredientLink>> = HashMap::new();
        for link in links {
            ingredients.entry(link.recipe_id).or_default().push(link);
        }

        let annotated = recipes
            .into_iter()
            .map(|recipe| {
                let links = ingredients.get(&recipe.id).map(Vec::as_slice).unwrap_or(&[]);
                let nutrition = aggregate_nutrition(&recipe, links, |pid| {
                    products.get(&pid).map(|p| p.nutrition)
                });
                RecipeWithNutrition { recipe, nutrition }
            })
            .collect();

        let stock = products.values().map(|p| (p.id, p.stock())).collect();

        Self::assemble(annotated, ingredients, stock)
    }

    fn assemble(
        recipes: Vec<RecipeWithNutrition>,
        ingredients: HashMap<RecipeId, Vec<IngredientLink>>,
        stock: HashMap<ProductId, StockLevel>,
    ) -> Self {
        let mut index = HashMap::with_capacity(recipes.len());
        for (i, r) in recipes.iter().enumerate() {
            // First occurrence wins on duplicate ids.
            index.entry(r.recipe.id).or_insert(i);
        }

        Self {
            recipes,
            index,
            ingredients,
            stock,
        }
    }

    /// All recipes in provider order.
    pub fn recipes(&self) -> &[RecipeWithNutrition] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&RecipeWithNutrition> {
        self.index.get(&id).map(|&i| &self.recipes[i])
    }

    pub fn ingredients(&self, id: RecipeId) -> &[IngredientLink] {
        self.ingredients.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn stock(&self, product_id: ProductId) -> Option<StockLevel> {
        self.stock.get(&product_id).copied()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

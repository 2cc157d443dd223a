use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{IngredientLink, Nutrition, Product, ProductId, Recipe, RecipeId, StockLevel};

/// Read-only access to recipes, their ingredients and product nutrition.
pub trait CatalogProvider {
    fn list_recipes(&self, tenant: &str) -> Result<Vec<Recipe>>;

    fn list_ingredients(&self, recipe_id: RecipeId) -> Result<Vec<IngredientLink>>;

    /// Nutrition per 100 units, `None` if the product is unknown.
    fn product_nutrition(&self, product_id: ProductId) -> Option<Nutrition>;
}

/// Read-only access to stock levels.
pub trait StockProvider {
    fn stock(&self, product_id: ProductId) -> Option<StockLevel>;
}

/// Catalog file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogData {
    /// Tenant owning these recipes. `None` serves every tenant.
    pub tenant: Option<String>,
    pub recipes: Vec<Recipe>,
    pub ingredients: Vec<IngredientLink>,
    pub products: Vec<Product>,
}

/// In-memory catalog and stock provider backed by [`CatalogData`].
pub struct InMemoryCatalog {
    tenant: Option<String>,
    recipes: Vec<Recipe>,
    ingredients: HashMap<RecipeId, Vec<IngredientLink>>,
    products: HashMap<ProductId, Product>,
}

impl InMemoryCatalog {
    pub fn new(data: CatalogData) -> Self {
        let mut ingredients: HashMap<RecipeId, Vec<IngredientLink>> = HashMap::new();
        for link in data.ingredients {
            ingredients.entry(link.recipe_id).or_default().push(link);
        }

        let products = data.products.into_iter().map(|p| (p.id, p)).collect();

        Self {
            tenant: data.tenant,
            recipes: data.recipes,
            ingredients,
            products,
        }
    }

    fn serves(&self, tenant: &str) -> bool {
        self.tenant
            .as_deref()
            .map(|t| t.eq_ignore_ascii_case(tenant))
            .unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn list_recipes(&self, tenant: &str) -> Result<Vec<Recipe>> {
        if !self.serves(tenant) {
            return Ok(Vec::new());
        }
        Ok(self.recipes.clone())
    }

    fn list_ingredients(&self, recipe_id: RecipeId) -> Result<Vec<IngredientLink>> {
        Ok(self.ingredients.get(&recipe_id).cloned().unwrap_or_default())
    }

    fn product_nutrition(&self, product_id: ProductId) -> Option<Nutrition> {
        self.products.get(&product_id).map(|p| p.nutrition)
    }
}

impl StockProvider for InMemoryCatalog {
    fn stock(&self, product_id: ProductId) -> Option<StockLevel> {
        self.products.get(&product_id).map(Product::stock)
    }
}

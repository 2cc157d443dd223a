use serde::{Deserialize, Serialize};

pub type RecipeId = u64;
pub type ProductId = u64;

/// A recipe as handed out by the catalog provider.
///
/// `tags` is the raw comma-separated tag string; matching is done on the
/// lowercased string rather than on split tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,

    pub name: String,

    pub category: String,

    #[serde(default = "default_portions")]
    pub portions: u32,

    #[serde(default)]
    pub prep_time: u32,

    #[serde(default)]
    pub cook_time: u32,

    #[serde(default)]
    pub cost_per_portion: f64,

    #[serde(default)]
    pub tags: String,

    #[serde(default)]
    pub cuisine: Option<String>,
}

fn default_portions() -> u32 {
    1
}

impl Recipe {
    /// Portions used as a divisor; zero is treated as one.
    #[inline]
    pub fn portion_divisor(&self) -> f64 {
        self.portions.max(1) as f64
    }

    /// Lowercased name, used by every substring matcher.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Lowercased raw tag string.
    pub fn tags_key(&self) -> String {
        self.tags.to_lowercase()
    }

    /// True when `needle` (already lowercase) occurs in the name or the tags.
    pub fn mentions(&self, needle: &str) -> bool {
        self.name_key().contains(needle) || self.tags_key().contains(needle)
    }

    /// True if any tag equals or contains one of the given markers.
    pub fn has_tag_containing(&self, markers: &[&str]) -> bool {
        let tags = self.tags_key();
        markers.iter().any(|m| tags.contains(m))
    }

    pub fn is_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

/// Link between a recipe and one product it uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLink {
    pub recipe_id: RecipeId,
    pub product_id: ProductId,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

/// Nutrition facts, either per 100 units of a product or per recipe portion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub salt_mg: f64,
}

impl Nutrition {
    /// Scale every field by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            protein: self.protein * factor,
            calories: self.calories * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
            salt_mg: self.salt_mg * factor,
        }
    }

    pub fn add(&mut self, other: &Nutrition) {
        self.protein += other.protein;
        self.calories += other.calories;
        self.fat += other.fat;
        self.carbs += other.carbs;
        self.salt_mg += other.salt_mg;
    }
}

/// Current and minimum stock of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    #[serde(default)]
    pub current: f64,
    #[serde(default)]
    pub min: f64,
}

impl StockLevel {
    /// Stock relative to the minimum, with the minimum floored at 1.
    #[inline]
    pub fn availability_ratio(&self) -> f64 {
        self.current / self.min.max(1.0)
    }
}

/// A product with per-100-unit nutrition facts and stock levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,

    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub nutrition: Nutrition,

    #[serde(default)]
    pub current_stock: f64,

    #[serde(default)]
    pub min_stock: f64,
}

impl Product {
    pub fn stock(&self) -> StockLevel {
        StockLevel {
            current: self.current_stock,
            min: self.min_stock,
        }
    }
}

/// A recipe together with its derived per-portion nutrition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeWithNutrition {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub nutrition: Nutrition,
}

impl std::ops::Deref for RecipeWithNutrition {
    type Target = Recipe;

    fn deref(&self) -> &Recipe {
        &self.recipe
    }
}

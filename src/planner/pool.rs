use log::warn;

use crate::catalog::CatalogSnapshot;
use crate::error::{PlannerError, Result};
use crate::models::{Exclusions, MealType, RecipeId, RecipeWithNutrition};
use crate::planner::exclusions::apply_exclusions;
use crate::planner::keywords::KeywordTable;

/// What to do when exclusions leave no recipe at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExclusionFallback {
    /// Fail with [`PlannerError::NoEligibleRecipes`].
    #[default]
    Reject,
    /// Continue with the first unfiltered recipe. The resulting plan may
    /// contain excluded recipes.
    FirstUnfiltered,
}

/// Recipes eligible for planning after exclusions.
pub struct CandidatePool<'a> {
    recipes: Vec<&'a RecipeWithNutrition>,
    excluded: usize,
    fallback_used: bool,
}

impl<'a> CandidatePool<'a> {
    /// Filter the snapshot by `exclusions`.
    ///
    /// Fails with [`PlannerError::NoRecipes`] on an empty snapshot.
    pub fn build(
        snapshot: &'a CatalogSnapshot,
        exclusions: Option<&Exclusions>,
        keywords: &KeywordTable,
        fallback: ExclusionFallback,
    ) -> Result<Self> {
        if snapshot.is_empty() {
            return Err(PlannerError::NoRecipes);
        }

        let all: Vec<&RecipeWithNutrition> = snapshot.recipes().iter().collect();

        let Some(exclusions) = exclusions.map(Exclusions::normalized) else {
            return Ok(Self {
                recipes: all,
                excluded: 0,
                fallback_used: false,
            });
        };

        for term in &exclusions.ingredients {
            if let Some(known) = keywords.suggest(term) {
                warn!(
                    "Exclusion term '{}' has no keyword expansion, did you mean '{}'?",
                    term, known
                );
            }
        }

        let survivors = apply_exclusions(&all, &exclusions, keywords);
        let excluded = all.len() - survivors.len();

        if !survivors.is_empty() {
            return Ok(Self {
                recipes: survivors,
                excluded,
                fallback_used: false,
            });
        }

        match fallback {
            ExclusionFallback::Reject => Err(PlannerError::NoEligibleRecipes { excluded }),
            ExclusionFallback::FirstUnfiltered => {
                let first = all[0];
                warn!(
                    "Exclusions removed all {} recipes, falling back to '{}' which may violate them",
                    excluded, first.name
                );
                Ok(Self {
                    recipes: vec![first],
                    excluded,
                    fallback_used: true,
                })
            }
        }
    }

    pub fn recipes(&self) -> &[&'a RecipeWithNutrition] {
        &self.recipes
    }

    /// How many recipes the exclusions removed.
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    pub fn fallback_used(&self) -> bool {
        self.fallback_used
    }

    /// Recipes whose category is the meal type, or the whole pool if none are.
    pub fn for_meal(&self, meal_type: MealType) -> Vec<&'a RecipeWithNutrition> {
        let matching = self.in_category(meal_type.as_str());
        if matching.is_empty() {
            return self.recipes.clone();
        }
        matching
    }

    /// Recipes of the given category, case-insensitive.
    pub fn in_category(&self, category: &str) -> Vec<&'a RecipeWithNutrition> {
        self.recipes
            .iter()
            .filter(|r| r.is_category(category))
            .copied()
            .collect()
    }

    /// Same-category alternatives to a recipe, excluding the recipe itself.
    pub fn alternatives(&self, current: &RecipeWithNutrition) -> Vec<&'a RecipeWithNutrition> {
        self.recipes
            .iter()
            .filter(|r| r.id != current.id && r.is_category(&current.category))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recipe;

    fn recipe(id: RecipeId, name: &str, category: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            category: category.to_string(),
            portions: 1,
            prep_time: 10,
            cook_time: 10,
            cost_per_portion: 2.0,
            tags: String::new(),
            cuisine: None,
        }
    }

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot::from_parts(
            vec![
                recipe(1, "Ham Sandwich", "lunch"),
                recipe(2, "Bacon Pasta", "dinner"),
                recipe(3, "Greek Salad", "lunch"),
            ],
            vec![],
            vec![],
        )
    }

    fn pork() -> Exclusions {
        Exclusions {
            ingredients: vec!["Pork".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_snapshot_is_no_recipes() {
        let empty = CatalogSnapshot::from_parts(vec![], vec![], vec![]);
        let result = CandidatePool::build(
            &empty,
            None,
            &KeywordTable::builtin(),
            ExclusionFallback::Reject,
        );
        assert!(matches!(result, Err(PlannerError::NoRecipes)));
    }

    #[test]
    fn test_exclusions_are_normalized_and_applied() {
        let snapshot = snapshot();
        let pool = CandidatePool::build(
            &snapshot,
            Some(&pork()),
            &KeywordTable::builtin(),
            ExclusionFallback::Reject,
        )
        .unwrap();

        assert_eq!(pool.recipes().len(), 1);
        assert_eq!(pool.excluded(), 2);
        assert_eq!(pool.recipes()[0].id, 3);
        assert!(!pool.fallback_used());
    }

    #[test]
    fn test_for_meal_falls_back_to_whole_pool() {
        let snapshot = snapshot();
        let pool = CandidatePool::build(
            &snapshot,
            None,
            &KeywordTable::builtin(),
            ExclusionFallback::Reject,
        )
        .unwrap();

        assert_eq!(pool.for_meal(MealType::Lunch).len(), 2);
        assert_eq!(pool.for_meal(MealType::Breakfast).len(), 3);
        assert_eq!(pool.alternatives(snapshot.get(1).unwrap()).len(), 1);
    }

    #[test]
    fn test_fully_excluded_pool() {
        let snapshot = snapshot();
        let everything = Exclusions {
            categories: vec!["lunch".to_string(), "dinner".to_string()],
            ..Default::default()
        };

        let rejected = CandidatePool::build(
            &snapshot,
            Some(&everything),
            &KeywordTable::builtin(),
            ExclusionFallback::Reject,
        );
        assert!(matches!(
            rejected,
            Err(PlannerError::NoEligibleRecipes { excluded: 3 })
        ));

        let fallback = CandidatePool::build(
            &snapshot,
            Some(&everything),
            &KeywordTable::builtin(),
            ExclusionFallback::FirstUnfiltered,
        )
        .unwrap();
        assert!(fallback.fallback_used());
        assert_eq!(fallback.recipes().len(), 1);
        assert_eq!(fallback.recipes()[0].id, 1);
    }
}

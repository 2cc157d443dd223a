use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::models::Recipe;
use crate::planner::constants::TERM_SUGGESTION_MIN_SIMILARITY;
use crate::planner::season::Season;

const BUILTIN_KEYWORDS: &str = include_str!("../../data/keywords.json");

static BUILTIN: LazyLock<KeywordTable> = LazyLock::new(|| {
    serde_json::from_str(BUILTIN_KEYWORDS).expect("data/keywords.json is a valid keyword table")
});

/// Substring tables used for exclusions and seasonality.
///
/// All entries are lowercase; matching is plain substring search on the
/// lowercased recipe name and tag string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeywordTable {
    /// Broad exclusion term to the dish-name substrings it implies.
    pub expansions: BTreeMap<String, BTreeSet<String>>,
    /// Terms that mean "any meat".
    pub meat_aliases: BTreeSet<String>,
    /// Substrings that mark a dish as containing meat.
    pub meat_markers: BTreeSet<String>,
    pub seasonal: BTreeMap<Season, BTreeSet<String>>,
}

impl KeywordTable {
    /// The table shipped in `data/keywords.json`.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Lowercase every entry so lookups can assume lowercase input.
    pub fn normalized(self) -> Self {
        fn lower(set: BTreeSet<String>) -> BTreeSet<String> {
            set.into_iter().map(|s| s.trim().to_lowercase()).collect()
        }

        Self {
            expansions: self
                .expansions
                .into_iter()
                .map(|(k, v)| (k.trim().to_lowercase(), lower(v)))
                .collect(),
            meat_aliases: lower(self.meat_aliases),
            meat_markers: lower(self.meat_markers),
            seasonal: self
                .seasonal
                .into_iter()
                .map(|(season, words)| (season, lower(words)))
                .collect(),
        }
    }

    pub fn is_meat_alias(&self, term: &str) -> bool {
        self.meat_aliases.contains(term)
    }

    /// Whether an ingredient exclusion term hits this recipe.
    ///
    /// `term` must be lowercase. Hits on a verbatim occurrence, on any of the
    /// term's expansions, or on any meat marker when the term is a meat alias.
    pub fn ingredient_term_matches(&self, recipe: &Recipe, term: &str) -> bool {
        if recipe.mentions(term) {
            return true;
        }

        if let Some(patterns) = self.expansions.get(term) {
            if patterns.iter().any(|p| recipe.mentions(p)) {
                return true;
            }
        }

        self.is_meat_alias(term) && self.meat_markers.iter().any(|m| recipe.mentions(m))
    }

    pub fn seasonal_keywords(&self, season: Season) -> impl Iterator<Item = &str> {
        self.seasonal
            .get(&season)
            .into_iter()
            .flat_map(|words| words.iter().map(String::as_str))
    }

    /// Number of the season's keywords found in the recipe name or tags.
    pub fn seasonal_hits(&self, recipe: &Recipe, season: Season) -> usize {
        self.seasonal_keywords(season)
            .filter(|k| recipe.mentions(k))
            .count()
    }

    /// Whether the term has a table entry of its own.
    pub fn knows(&self, term: &str) -> bool {
        self.expansions.contains_key(term) || self.meat_aliases.contains(term)
    }

    /// Closest known term for a misspelt exclusion, if any is close enough.
    pub fn suggest(&self, term: &str) -> Option<&str> {
        if self.knows(term) {
            return None;
        }

        self.expansions
            .keys()
            .chain(self.meat_aliases.iter())
            .map(|known| (known.as_str(), jaro_winkler(known, term)))
            .filter(|(_, score)| *score >= TERM_SUGGESTION_MIN_SIMILARITY)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(known, _)| known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, tags: &str) -> Recipe {
        Recipe {
            id: 1,
            name: name.to_string(),
            category: "dinner".to_string(),
            portions: 1,
            prep_time: 0,
            cook_time: 0,
            cost_per_portion: 1.0,
            tags: tags.to_string(),
            cuisine: None,
        }
    }

    #[test]
    fn test_builtin_table_loads() {
        let table = KeywordTable::builtin();
        assert!(table.expansions["pork"].contains("bratwurst"));
        assert!(table.is_meat_alias("meat"));
        assert_eq!(table.seasonal.len(), 4);
    }

    #[test]
    fn test_pork_expansion() {
        let table = KeywordTable::builtin();
        assert!(table.ingredient_term_matches(&recipe("Bratwurst with Mash", ""), "pork"));
        assert!(table.ingredient_term_matches(&recipe("Pea Soup", "bacon"), "pork"));
        assert!(!table.ingredient_term_matches(&recipe("Vegetable Curry", "vegan"), "pork"));
    }

    #[test]
    fn test_verbatim_term_without_expansion() {
        let table = KeywordTable::builtin();
        assert!(table.ingredient_term_matches(&recipe("Coriander Rice", ""), "coriander"));
    }

    #[test]
    fn test_meat_alias_uses_markers() {
        let table = KeywordTable::builtin();
        assert!(table.ingredient_term_matches(&recipe("Turkey Wrap", ""), "meat"));
        assert!(!table.ingredient_term_matches(&recipe("Falafel Wrap", ""), "meat"));
    }

    #[test]
    fn test_seasonal_hits() {
        let table = KeywordTable::builtin();
        let soup = recipe("Pumpkin and Mushroom Soup", "");
        assert_eq!(table.seasonal_hits(&soup, Season::Autumn), 2);
        assert_eq!(table.seasonal_hits(&soup, Season::Summer), 0);
    }

    #[test]
    fn test_suggest_close_terms() {
        let table = KeywordTable::builtin();
        assert_eq!(table.suggest("porc"), Some("pork"));
        assert_eq!(table.suggest("pork"), None);
        assert_eq!(table.suggest("xylophone"), None);
    }

    #[test]
    fn test_normalized_lowercases() {
        let json = r#"{"expansions": {"Pork": ["HAM"]}, "seasonal": {"winter": ["Leek"]}}"#;
        let table: KeywordTable = serde_json::from_str(json).unwrap();
        let table = table.normalized();
        assert!(table.expansions["pork"].contains("ham"));
        assert_eq!(table.seasonal_keywords(Season::Winter).collect::<Vec<_>>(), vec!["leek"]);
        assert_eq!(table.seasonal_keywords(Season::Summer).count(), 0);
    }
}

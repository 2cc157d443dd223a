use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PlannerError;
use crate::models::recipe::{Recipe, RecipeId};

/// Day of the planning week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }
}

impl FromStr for Day {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| PlannerError::InvalidSlot(s.to_string()))
    }
}

/// Meal of the day. Only these three are planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl FromStr for MealType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealType::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| PlannerError::InvalidSlot(s.to_string()))
    }
}

/// One cell of the weekly grid.
///
/// Ordering is day-major, so iterating a `BTreeMap<Slot, _>` walks the week
/// in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub day: Day,
    pub meal_type: MealType,
}

impl Slot {
    pub fn new(day: Day, meal_type: MealType) -> Self {
        Self { day, meal_type }
    }

    /// All 21 slots in (day, meal type) order.
    pub fn week() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| MealType::ALL.into_iter().map(move |m| Slot::new(day, m)))
    }

    /// Wire key, e.g. `monday-lunch`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day.as_str(), self.meal_type.as_str())
    }
}

impl FromStr for Slot {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, meal) = s
            .split_once('-')
            .ok_or_else(|| PlannerError::InvalidSlot(s.to_string()))?;
        let day = day
            .parse()
            .map_err(|_| PlannerError::InvalidSlot(s.to_string()))?;
        let meal_type = meal
            .parse()
            .map_err(|_| PlannerError::InvalidSlot(s.to_string()))?;
        Ok(Slot::new(day, meal_type))
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

/// The recipe assigned to one slot.
///
/// Fields the engine does not know about are kept in `extra` so that entries
/// supplied by a caller pass through untouched. The caller's cost literal is
/// kept too, so `3` is written back as `3` and not `3.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "WireEntry", into = "WireEntry")]
pub struct PlanEntry {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    pub cost_per_portion: f64,
    pub portions: u32,
    pub extra: BTreeMap<String, serde_json::Value>,
    cost_literal: Option<serde_json::Number>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireEntry {
    recipe_id: RecipeId,
    recipe_name: String,
    cost_per_portion: serde_json::Number,
    portions: u32,
    #[serde(flatten, default)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl From<WireEntry> for PlanEntry {
    fn from(wire: WireEntry) -> Self {
        Self {
            recipe_id: wire.recipe_id,
            recipe_name: wire.recipe_name,
            cost_per_portion: wire.cost_per_portion.as_f64().unwrap_or_default(),
            portions: wire.portions,
            extra: wire.extra,
            cost_literal: Some(wire.cost_per_portion),
        }
    }
}

impl From<PlanEntry> for WireEntry {
    fn from(entry: PlanEntry) -> Self {
        // A literal only survives while it still matches the cost.
        let cost = entry
            .cost_literal
            .filter(|n| n.as_f64() == Some(entry.cost_per_portion))
            .or_else(|| serde_json::Number::from_f64(entry.cost_per_portion))
            .unwrap_or_else(|| serde_json::Number::from(0));

        Self {
            recipe_id: entry.recipe_id,
            recipe_name: entry.recipe_name,
            cost_per_portion: cost,
            portions: entry.portions,
            extra: entry.extra,
        }
    }
}

// The literal is formatting only.
impl PartialEq for PlanEntry {
    fn eq(&self, other: &Self) -> bool {
        self.recipe_id == other.recipe_id
            && self.recipe_name == other.recipe_name
            && self.cost_per_portion == other.cost_per_portion
            && self.portions == other.portions
            && self.extra == other.extra
    }
}

impl PlanEntry {
    pub fn new(
        recipe_id: RecipeId,
        recipe_name: impl Into<String>,
        cost_per_portion: f64,
        portions: u32,
    ) -> Self {
        Self {
            recipe_id,
            recipe_name: recipe_name.into(),
            cost_per_portion,
            portions,
            extra: BTreeMap::new(),
            cost_literal: None,
        }
    }

    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self::new(
            recipe.id,
            recipe.name.clone(),
            recipe.cost_per_portion,
            recipe.portions,
        )
    }
}

/// A weekly plan: slot to entry, with empty slots simply absent.
///
/// Serializes as an object with all 21 slot keys, empty ones as `null`.
/// Deserialization accepts missing keys and `null` alike.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Slot, Option<PlanEntry>>",
    into = "BTreeMap<Slot, Option<PlanEntry>>"
)]
pub struct MealPlan {
    entries: BTreeMap<Slot, PlanEntry>,
}

impl From<BTreeMap<Slot, Option<PlanEntry>>> for MealPlan {
    fn from(raw: BTreeMap<Slot, Option<PlanEntry>>) -> Self {
        Self {
            entries: raw
                .into_iter()
                .filter_map(|(slot, entry)| entry.map(|e| (slot, e)))
                .collect(),
        }
    }
}

impl From<MealPlan> for BTreeMap<Slot, Option<PlanEntry>> {
    fn from(plan: MealPlan) -> Self {
        Slot::week()
            .map(|slot| (slot, plan.entries.get(&slot).cloned()))
            .collect()
    }
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<&PlanEntry> {
        self.entries.get(&slot)
    }

    pub fn insert(&mut self, slot: Slot, entry: PlanEntry) -> Option<PlanEntry> {
        self.entries.insert(slot, entry)
    }

    /// Filled slots in week order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &PlanEntry)> {
        self.entries.iter().map(|(slot, entry)| (*slot, entry))
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct recipe ids across all filled slots.
    pub fn recipe_ids(&self) -> HashSet<RecipeId> {
        self.entries.values().map(|e| e.recipe_id).collect()
    }

    /// How many slots hold the given recipe.
    pub fn occurrences(&self, recipe_id: RecipeId) -> usize {
        self.entries
            .values()
            .filter(|e| e.recipe_id == recipe_id)
            .count()
    }
}

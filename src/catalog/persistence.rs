use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::catalog::provider::{CatalogData, InMemoryCatalog};
use crate::error::Result;
use crate::models::{CustomConfig, MealPlan};
use crate::planner::keywords::KeywordTable;

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a catalog file into an in-memory provider.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<InMemoryCatalog> {
    let data: CatalogData = read_json(path)?;
    Ok(InMemoryCatalog::new(data))
}

/// Load a plan. Accepts sparse objects and `null` slots.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    read_json(path)
}

/// Save a plan with all 21 slot keys.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_custom_config<P: AsRef<Path>>(path: P) -> Result<CustomConfig> {
    read_json(path)
}

/// Load a keyword table that replaces the built-in one.
pub fn load_keywords<P: AsRef<Path>>(path: P) -> Result<KeywordTable> {
    read_json(path)
}

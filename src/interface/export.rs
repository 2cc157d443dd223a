use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{MealPlan, Slot};

#[derive(Debug, Serialize)]
struct PlanRow<'a> {
    day: &'static str,
    meal: &'static str,
    recipe_id: Option<u64>,
    recipe: &'a str,
    cost_per_portion: Option<f64>,
    portions: Option<u32>,
}

/// Write the plan as CSV, one row per slot including empty ones.
pub fn write_plan_csv<W: io::Write>(writer: W, plan: &MealPlan) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for slot in Slot::week() {
        let entry = plan.get(slot);
        wtr.serialize(PlanRow {
            day: slot.day.as_str(),
            meal: slot.meal_type.as_str(),
            recipe_id: entry.map(|e| e.recipe_id),
            recipe: entry.map(|e| e.recipe_name.as_str()).unwrap_or(""),
            cost_per_portion: entry.map(|e| e.cost_per_portion),
            portions: entry.map(|e| e.portions),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn export_plan_csv<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_plan_csv(file, plan)
}

use crate::models::{
    Benefit, Day, Improvements, MealPlan, MealType, PlanStatistics, Slot, Suggestion,
};

/// Display a weekly plan, one line per day.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.is_empty() {
        println!("Meal plan is empty.");
        return;
    }

    println!();
    println!("=== Meal Plan ===");
    println!();

    let width = plan
        .iter()
        .map(|(_, e)| e.recipe_name.len())
        .max()
        .unwrap_or(10)
        .max("(empty)".len());

    println!(
        "{:<10} {:<width$} | {:<width$} | {:<width$}",
        "",
        "Breakfast",
        "Lunch",
        "Dinner",
        width = width
    );

    for day in Day::ALL {
        let cells: Vec<&str> = MealType::ALL
            .iter()
            .map(|&meal_type| {
                plan.get(Slot::new(day, meal_type))
                    .map(|e| e.recipe_name.as_str())
                    .unwrap_or("(empty)")
            })
            .collect();

        println!(
            "{:<10} {:<width$} | {:<width$} | {:<width$}",
            day.as_str(),
            cells[0],
            cells[1],
            cells[2],
            width = width
        );
    }

    println!();
}

/// Display plan statistics.
pub fn display_statistics(stats: &PlanStatistics) {
    println!("--- Summary ---");
    println!("Meals: {} ({} unique recipes)", stats.total_meals, stats.unique_recipes);
    println!(
        "Total cost: {:.2} ({:.2} per portion)",
        stats.total_cost, stats.average_cost_per_portion
    );
    println!(
        "Nutrition: {:.0} kcal, protein {:.0} g, carbs {:.0} g, fat {:.0} g",
        stats.total_calories, stats.total_protein, stats.total_carbs, stats.total_fat
    );
    println!("Variety score: {:.2}", stats.variety_score);
    println!();
}

fn benefit_text(benefit: &Benefit) -> String {
    match benefit {
        Benefit::Saving(amount) => format!("saves {:.2}", amount),
        Benefit::Improvement(gain) => format!("improves by {:.1}", gain),
        Benefit::Benefit(text) => text.clone(),
    }
}

/// Display optimizer suggestions and the overall improvement.
pub fn display_suggestions(suggestions: &[Suggestion], improvements: &Improvements) {
    if suggestions.is_empty() {
        println!("No improvements found, plan unchanged.");
        println!();
        return;
    }

    println!("=== Suggestions ({}) ===", suggestions.len());
    println!();

    for (i, s) in suggestions.iter().enumerate() {
        println!(
            "{:>3}. {:<16} {} -> {} ({}, {})",
            i + 1,
            s.slot.key(),
            s.original_recipe,
            s.suggested_recipe,
            s.reason,
            benefit_text(&s.benefit)
        );
    }

    println!();
    println!(
        "Cost {:+.1}% | Nutrition {:+.1}% | Variety {:+}",
        -improvements.cost_reduction,
        improvements.nutrition_improvement,
        improvements.variety_increase
    );
    println!();
}

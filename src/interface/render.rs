use crate::inventory::InventorySnapshot;
use crate::models::{AssignmentKind, Day, MealRow, Slot};
use crate::state::MealBoard;

/// Print the weekly board: each day's lunch and dinner with assignments and
/// a satisfied/required coverage marker.
pub fn display_board(board: &MealBoard) {
    println!();
    println!("=== Weekly Board ===");
    println!();

    for day in Day::ALL {
        println!("{}", day.label());

        for row in MealRow::ALL {
            let slot = Slot::new(day, row);
            let coverage = board.coverage(slot);
            let marker = if coverage.is_short() { "!" } else { " " };

            println!(
                "  {:<6} {}{}/{}",
                row.label(),
                marker,
                coverage.satisfied,
                coverage.required
            );

            for id in board.slot_items(slot) {
                let Some(assignment) = board.assignment(id) else {
                    continue;
                };
                let detail = match assignment.kind {
                    AssignmentKind::Cook if assignment.leftovers > 0 => {
                        format!(" (+{} leftover)", assignment.leftovers)
                    }
                    AssignmentKind::Cook => String::new(),
                    _ => format!(" ({} serving{})", assignment.servings, plural(assignment.servings)),
                };
                println!(
                    "    - {} [{}]{}",
                    assignment.meal_name,
                    assignment.kind.label(),
                    detail
                );
            }
        }
    }
    println!();
}

/// Print the derived inventory: available leftovers, precooked servings, and
/// any overages.
pub fn display_inventory(snapshot: &InventorySnapshot) {
    println!("--- Cooked Meals Available ({} servings) ---", snapshot.total_servings());

    if snapshot.is_empty() {
        println!("  (nothing cooked yet)");
        println!();
        return;
    }

    let mut leftovers: Vec<_> = snapshot.available_leftovers.iter().collect();
    leftovers.sort();
    for (name, servings) in leftovers {
        println!("  leftover   {:<24} {} left", name, servings);
    }

    let mut precooked: Vec<_> = snapshot.available_precooked.iter().collect();
    precooked.sort();
    for (name, servings) in precooked {
        println!("  precooked  {:<24} {} left", name, servings);
    }

    let mut overages: Vec<_> = snapshot.overages.iter().collect();
    overages.sort();
    for (name, servings) in overages {
        println!("  OVERAGE    {:<24} {} over", name, servings);
    }

    println!();
}

/// Print the to-cook palette and the declared precooked inventory.
pub fn display_palette(board: &MealBoard) {
    println!("--- Meals to Cook ---");
    if board.meals_to_cook().is_empty() {
        println!("  (none)");
    }
    for meal in board.meals_to_cook() {
        println!("  {:<14} {}", meal.id, meal.name);
    }

    println!("--- Precooked Meals ---");
    if board.precooked().is_empty() {
        println!("  (none)");
    }
    for meal in board.precooked() {
        println!(
            "  {:<14} {} ({} serving{})",
            meal.id,
            meal.name,
            meal.servings,
            plural(meal.servings)
        );
    }
    println!();
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// One-line description of an assignment, for pick lists.
pub fn assignment_line(board: &MealBoard, assignment_id: &str) -> String {
    match board.assignment(assignment_id) {
        Some(a) => match a.kind {
            AssignmentKind::Cook => {
                format!("{} [cook, {} leftover]", a.meal_name, a.leftovers)
            }
            _ => format!("{} [{}, {} serving{}]", a.meal_name, a.kind.label(), a.servings, plural(a.servings)),
        },
        None => assignment_id.to_string(),
    }
}

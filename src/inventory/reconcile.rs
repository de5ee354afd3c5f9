use std::collections::HashMap;

use crate::models::{Assignment, AssignmentKind, PrecookedMeal};

/// Derived availability of cooked food, recomputed from the full log on
/// every query. Entries are present only when the count is positive.
///
/// Leftovers and precooked servings are tracked independently; the same meal
/// name may appear in both maps at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySnapshot {
    /// Leftover servings still available, by meal name.
    pub available_leftovers: HashMap<String, u32>,

    /// Precooked servings still available, by meal name.
    pub available_precooked: HashMap<String, u32>,

    /// Leftover servings eaten beyond what was cooked, by meal name.
    pub overages: HashMap<String, u32>,
}

impl InventorySnapshot {
    /// Leftovers and precooked merged into one name -> servings map.
    ///
    /// On a name collision the precooked count wins, matching the merge the
    /// display layer has always consumed.
    pub fn combined_available(&self) -> HashMap<String, u32> {
        let mut combined = self.available_leftovers.clone();
        for (name, servings) in &self.available_precooked {
            combined.insert(name.clone(), *servings);
        }
        combined
    }

    /// Total servings available across leftovers and precooked meals.
    pub fn total_servings(&self) -> u32 {
        self.available_leftovers.values().sum::<u32>()
            + self.available_precooked.values().sum::<u32>()
    }

    pub fn has_overages(&self) -> bool {
        !self.overages.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.available_leftovers.is_empty()
            && self.available_precooked.is_empty()
            && self.overages.is_empty()
    }
}

/// Reconcile the planning log and precooked list into current availability.
///
/// Pure and total: iteration order never affects the result, and malformed
/// entries (empty meal name) are skipped rather than rejected. Counts are
/// trusted as-is; clamping happens upstream where the log is mutated.
pub fn reconcile(
    assignments: &HashMap<String, Assignment>,
    precooked: &[PrecookedMeal],
) -> InventorySnapshot {
    let mut leftover_produced: HashMap<&str, u32> = HashMap::new();
    let mut leftover_consumed: HashMap<&str, u32> = HashMap::new();
    let mut precooked_produced: HashMap<&str, u32> = HashMap::new();
    let mut precooked_consumed: HashMap<&str, u32> = HashMap::new();

    for meal in precooked {
        if meal.name.is_empty() || meal.servings == 0 {
            continue;
        }
        *precooked_produced.entry(meal.name.as_str()).or_default() += meal.servings;
    }

    for assignment in assignments.values() {
        if assignment.meal_name.is_empty() {
            continue;
        }
        let name = assignment.meal_name.as_str();
        match assignment.kind {
            AssignmentKind::EatLeftover => {
                *leftover_consumed.entry(name).or_default() += assignment.servings;
            }
            AssignmentKind::EatPrecooked => {
                *precooked_consumed.entry(name).or_default() += assignment.servings;
            }
            AssignmentKind::Cook if assignment.leftovers > 0 => {
                *leftover_produced.entry(name).or_default() += assignment.leftovers;
            }
            // Eating out and cooking without leftovers touch no total.
            AssignmentKind::Cook | AssignmentKind::EatOut => {}
        }
    }

    let mut snapshot = InventorySnapshot::default();

    // Meal names with any leftover consumption: remaining may be positive
    // (still available), negative (overage), or zero (absent from both maps).
    for (&name, &eaten) in &leftover_consumed {
        let produced = leftover_produced.get(name).copied().unwrap_or(0);
        let remaining = produced as i64 - eaten as i64;

        if remaining > 0 {
            snapshot
                .available_leftovers
                .insert(name.to_string(), remaining as u32);
        } else if remaining < 0 {
            snapshot
                .overages
                .insert(name.to_string(), remaining.unsigned_abs() as u32);
        }
    }

    // Meal names only cooked, never eaten: the full production is available.
    for (&name, &produced) in &leftover_produced {
        if !leftover_consumed.contains_key(name) {
            snapshot.available_leftovers.insert(name.to_string(), produced);
        }
    }

    // Precooked: over-consumption is dropped, not reported as an overage.
    for (&name, &produced) in &precooked_produced {
        let eaten = precooked_consumed.get(name).copied().unwrap_or(0);
        let remaining = produced as i64 - eaten as i64;

        if remaining > 0 {
            snapshot
                .available_precooked
                .insert(name.to_string(), remaining as u32);
        }
    }

    snapshot
}

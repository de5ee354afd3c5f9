use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::inventory::{self, InventorySnapshot, SlotCoverage};
use crate::models::{Assignment, AssignmentKind, MealToCook, PrecookedMeal, Slot};

/// Servings a slot needs when the user has not set a requirement.
pub const DEFAULT_SLOT_REQUIREMENT: u32 = 1;

fn default_seed() -> u64 {
    1
}

/// The whole planning session: meal palette, precooked inventory, the
/// assignment log, and the weekly grid mapping slots to assignment ids.
///
/// All identifiers come from the owned `id_seed`, so creation operations
/// thread through `&mut self` instead of any shared counter. The inventory
/// snapshot is re-derived from the full log on every query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealBoard {
    #[serde(default)]
    meals_to_cook: Vec<MealToCook>,

    #[serde(default)]
    precooked: Vec<PrecookedMeal>,

    #[serde(default)]
    assignments: HashMap<String, Assignment>,

    /// Slot -> ordered assignment ids; every slot key is always present.
    #[serde(default)]
    columns: HashMap<Slot, Vec<String>>,

    #[serde(default)]
    slot_requirements: HashMap<Slot, u32>,

    #[serde(default = "default_seed")]
    id_seed: u64,
}

impl Default for MealBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl MealBoard {
    /// A fresh board with the starter meal palette and an empty week.
    pub fn new() -> Self {
        let mut board = Self {
            meals_to_cook: Vec::new(),
            precooked: Vec::new(),
            assignments: HashMap::new(),
            columns: Slot::all().map(|slot| (slot, Vec::new())).collect(),
            slot_requirements: HashMap::new(),
            id_seed: 1,
        };

        for name in ["Pasta Bolognese", "Chicken Stir Fry", "Vegetable Curry"] {
            board.add_meal(name);
        }

        board
    }

    /// Allocate the next identifier, formatted as `{prefix}-{n}`.
    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{}-{}", prefix, self.id_seed);
        self.id_seed += 1;
        id
    }

    /// Restore invariants after deserialization: every slot key exists and
    /// columns reference only assignments that are actually in the log.
    pub fn normalize(&mut self) {
        for slot in Slot::all() {
            self.columns.entry(slot).or_default();
        }
        for items in self.columns.values_mut() {
            items.retain(|id| self.assignments.contains_key(id));
        }
    }

    // ── meal palette ────────────────────────────────────────────────────

    pub fn meals_to_cook(&self) -> &[MealToCook] {
        &self.meals_to_cook
    }

    pub fn find_meal(&self, meal_id: &str) -> Option<&MealToCook> {
        self.meals_to_cook.iter().find(|m| m.id == meal_id)
    }

    pub fn add_meal(&mut self, name: &str) -> String {
        let id = self.next_id("meal");
        self.meals_to_cook
            .push(MealToCook::new(id.clone(), name.to_string()));
        id
    }

    /// Rename a palette meal; an empty name keeps the old one.
    pub fn rename_meal(&mut self, meal_id: &str, name: &str) -> Result<()> {
        let meal = self
            .meals_to_cook
            .iter_mut()
            .find(|m| m.id == meal_id)
            .ok_or_else(|| BoardError::MealNotFound(meal_id.to_string()))?;
        if !name.is_empty() {
            meal.name = name.to_string();
        }
        Ok(())
    }

    pub fn remove_meal(&mut self, meal_id: &str) -> Result<()> {
        let before = self.meals_to_cook.len();
        self.meals_to_cook.retain(|m| m.id != meal_id);
        if self.meals_to_cook.len() == before {
            return Err(BoardError::MealNotFound(meal_id.to_string()));
        }
        Ok(())
    }

    // ── precooked inventory ─────────────────────────────────────────────

    pub fn precooked(&self) -> &[PrecookedMeal] {
        &self.precooked
    }

    pub fn add_precooked(&mut self, name: &str, servings: u32) -> String {
        let id = self.next_id("precooked");
        self.precooked
            .push(PrecookedMeal::new(id.clone(), name.to_string(), servings));
        id
    }

    pub fn rename_precooked(&mut self, meal_id: &str, name: &str) -> Result<()> {
        let meal = self
            .precooked
            .iter_mut()
            .find(|m| m.id == meal_id)
            .ok_or_else(|| BoardError::MealNotFound(meal_id.to_string()))?;
        if !name.is_empty() {
            meal.name = name.to_string();
        }
        Ok(())
    }

    pub fn set_precooked_servings(&mut self, meal_id: &str, servings: u32) -> Result<()> {
        let meal = self
            .precooked
            .iter_mut()
            .find(|m| m.id == meal_id)
            .ok_or_else(|| BoardError::MealNotFound(meal_id.to_string()))?;
        meal.servings = servings;
        Ok(())
    }

    pub fn remove_precooked(&mut self, meal_id: &str) -> Result<()> {
        let before = self.precooked.len();
        self.precooked.retain(|m| m.id != meal_id);
        if self.precooked.len() == before {
            return Err(BoardError::MealNotFound(meal_id.to_string()));
        }
        Ok(())
    }

    // ── planning ────────────────────────────────────────────────────────

    pub fn assignments(&self) -> &HashMap<String, Assignment> {
        &self.assignments
    }

    pub fn assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.get(id)
    }

    /// Ordered assignment ids planned into a slot.
    pub fn slot_items(&self, slot: Slot) -> &[String] {
        self.columns.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The slot currently holding an assignment.
    pub fn find_slot_of(&self, assignment_id: &str) -> Option<Slot> {
        self.columns
            .iter()
            .find(|(_, items)| items.iter().any(|id| id == assignment_id))
            .map(|(slot, _)| *slot)
    }

    fn place(&mut self, assignment: Assignment, slot: Slot) -> String {
        let id = self.next_id("asgn");
        self.assignments.insert(id.clone(), assignment);
        // Newest entries go to the front of the slot, like cards dropped on top.
        self.columns.entry(slot).or_default().insert(0, id.clone());
        id
    }

    /// Plan a palette meal to be cooked in a slot. The meal leaves the
    /// palette; leftovers start at zero until the user declares them.
    pub fn plan_cook(&mut self, meal_id: &str, slot: Slot) -> Result<String> {
        let meal = self
            .find_meal(meal_id)
            .ok_or_else(|| BoardError::MealNotFound(meal_id.to_string()))?;
        let assignment = Assignment::cook(meal.name.clone());
        self.meals_to_cook.retain(|m| m.id != meal_id);
        Ok(self.place(assignment, slot))
    }

    /// Plan eating leftovers of a meal in a slot, one serving by default.
    pub fn plan_leftover(&mut self, meal_name: &str, slot: Slot) -> String {
        self.place(Assignment::eat(meal_name, AssignmentKind::EatLeftover), slot)
    }

    /// Plan eating a precooked meal in a slot, one serving by default.
    pub fn plan_precooked(&mut self, meal_name: &str, slot: Slot) -> String {
        self.place(
            Assignment::eat(meal_name, AssignmentKind::EatPrecooked),
            slot,
        )
    }

    pub fn plan_eating_out(&mut self, slot: Slot) -> String {
        self.place(Assignment::eating_out(), slot)
    }

    /// Declare leftover servings on a cook assignment.
    pub fn set_leftovers(&mut self, assignment_id: &str, leftovers: u32) -> Result<()> {
        let assignment = self
            .assignments
            .get_mut(assignment_id)
            .ok_or_else(|| BoardError::AssignmentNotFound(assignment_id.to_string()))?;
        if assignment.kind != AssignmentKind::Cook {
            return Err(BoardError::InvalidInput(format!(
                "{} is not a cook assignment",
                assignment_id
            )));
        }
        assignment.leftovers = leftovers;
        Ok(())
    }

    /// Set consumed servings on an eating assignment; always at least one.
    pub fn set_servings(&mut self, assignment_id: &str, servings: u32) -> Result<()> {
        let assignment = self
            .assignments
            .get_mut(assignment_id)
            .ok_or_else(|| BoardError::AssignmentNotFound(assignment_id.to_string()))?;
        if !assignment.kind.is_eating() {
            return Err(BoardError::InvalidInput(format!(
                "{} is not an eating assignment",
                assignment_id
            )));
        }
        assignment.servings = servings.max(1);
        Ok(())
    }

    /// Move an assignment to another slot, keeping the log entry intact.
    pub fn move_assignment(&mut self, assignment_id: &str, to: Slot) -> Result<()> {
        let from = self
            .find_slot_of(assignment_id)
            .ok_or_else(|| BoardError::AssignmentNotFound(assignment_id.to_string()))?;
        if from == to {
            return Ok(());
        }
        if let Some(items) = self.columns.get_mut(&from) {
            items.retain(|id| id != assignment_id);
        }
        self.columns
            .entry(to)
            .or_default()
            .insert(0, assignment_id.to_string());
        Ok(())
    }

    /// Remove an assignment from the board and the log.
    ///
    /// A removed cook assignment returns its meal to the palette; eating
    /// assignments just disappear, the inventory re-derives around them.
    pub fn remove_assignment(&mut self, assignment_id: &str) -> Result<Assignment> {
        let assignment = self
            .assignments
            .remove(assignment_id)
            .ok_or_else(|| BoardError::AssignmentNotFound(assignment_id.to_string()))?;
        for items in self.columns.values_mut() {
            items.retain(|id| id != assignment_id);
        }
        if assignment.kind == AssignmentKind::Cook {
            let name = assignment.meal_name.clone();
            self.add_meal(&name);
        }
        Ok(assignment)
    }

    // ── requirements & derived views ────────────────────────────────────

    pub fn slot_requirement(&self, slot: Slot) -> u32 {
        self.slot_requirements
            .get(&slot)
            .copied()
            .unwrap_or(DEFAULT_SLOT_REQUIREMENT)
    }

    pub fn set_slot_requirement(&mut self, slot: Slot, required: u32) {
        self.slot_requirements.insert(slot, required);
    }

    /// Current inventory, recomputed from scratch over the full log.
    pub fn snapshot(&self) -> InventorySnapshot {
        inventory::reconcile(&self.assignments, &self.precooked)
    }

    pub fn coverage(&self, slot: Slot) -> SlotCoverage {
        inventory::slot_coverage(
            self.slot_items(slot),
            &self.assignments,
            self.slot_requirement(slot),
        )
    }

    pub fn planned_count(&self) -> usize {
        self.assignments.len()
    }

    /// Back to the seeded default board; the id seed restarts at 1.
    pub fn reset(&mut self) {
        *self = MealBoard::new();
    }

    pub fn clear_assignments(&mut self) {
        self.assignments.clear();
        for items in self.columns.values_mut() {
            items.clear();
        }
    }

    pub fn clear_meals(&mut self) {
        self.meals_to_cook.clear();
    }

    pub fn clear_precooked(&mut self) {
        self.precooked.clear();
    }
}

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{BoardError, Result};

/// Minimum similarity for a fuzzy meal-name match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// The four things that can be planned into a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    Cook,
    EatLeftover,
    EatPrecooked,
    EatOut,
}

/// Ask which kind of entry to plan.
pub fn prompt_plan_action() -> Result<PlanAction> {
    let options = [
        "Cook a meal",
        "Eat leftovers",
        "Eat a precooked meal",
        "Eat out",
    ];
    let selection = Select::new()
        .with_prompt("What goes into this slot?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => PlanAction::Cook,
        1 => PlanAction::EatLeftover,
        2 => PlanAction::EatPrecooked,
        _ => PlanAction::EatOut,
    })
}

/// Fuzzy candidates for a typed meal name, best first.
pub fn fuzzy_candidates(names: &[String], input: &str) -> Vec<(String, f64)> {
    let needle = input.to_lowercase();
    let mut candidates: Vec<(String, f64)> = names
        .iter()
        .map(|name| (name.clone(), jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Prompt for a meal name, resolving typos against the known names.
///
/// Returns `None` when the user enters nothing or rejects every candidate.
pub fn prompt_meal_name(prompt: &str, names: &[String]) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    // Exact match first (case-insensitive)
    if let Some(name) = names
        .iter()
        .find(|name| name.to_lowercase() == input.to_lowercase())
    {
        return Ok(Some(name.clone()));
    }

    let candidates = fuzzy_candidates(names, input);

    if candidates.is_empty() {
        println!("No matching meal found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let (name, _) = &candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| name.clone()));
    }

    // Multiple matches - let the user pick
    let mut options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(name, _)| name.clone())
        .collect();
    let real_options = options.len();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < real_options {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}

/// Pick one entry from a list, with a cancel row appended.
pub fn prompt_pick(prompt: &str, items: &[String]) -> Result<Option<usize>> {
    let mut options = items.to_vec();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < items.len()).then_some(selection))
}

/// Prompt for leftover servings produced by a cook assignment.
pub fn prompt_leftovers() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Leftover servings beyond this meal")
        .default("0".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| BoardError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for servings consumed by an eating assignment (at least 1).
pub fn prompt_servings() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Servings eaten")
        .default("1".to_string())
        .interact_text()?;

    let servings: u32 = input
        .parse()
        .map_err(|_| BoardError::InvalidInput("Invalid number".to_string()))?;

    Ok(servings.max(1))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fuzzy_candidates_rank_closest_first() {
        let known = names(&["Pasta Bolognese", "Chicken Stir Fry", "Vegetable Curry"]);
        let candidates = fuzzy_candidates(&known, "pasta bolonese");
        assert!(!candidates.is_empty());
        assert_eq!(candidates[0].0, "Pasta Bolognese");
    }

    #[test]
    fn test_fuzzy_candidates_respect_threshold() {
        let known = names(&["Pasta Bolognese"]);
        let candidates = fuzzy_candidates(&known, "zzzzzz");
        assert!(candidates.is_empty());
    }
}

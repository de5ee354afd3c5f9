use serde::{Deserialize, Serialize};

/// A meal waiting on the "to cook" palette, not yet planned into a slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealToCook {
    pub id: String,
    pub name: String,
}

impl MealToCook {
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}

/// Bulk inventory declared outside the weekly log (batch-cooked, takeaway).
///
/// `servings` is edited directly by the user; consumption is tracked through
/// eat-precooked assignments, never by mutating this count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecookedMeal {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub servings: u32,
}

impl PrecookedMeal {
    pub fn new(id: String, name: String, servings: u32) -> Self {
        Self { id, name, servings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precooked_servings_default_on_load() {
        let json = r#"{"id": "precooked-1", "name": "Chili"}"#;
        let meal: PrecookedMeal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.servings, 0);
    }
}

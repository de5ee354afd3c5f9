use serde::{Deserialize, Serialize};

/// Meal name used for eating-out assignments.
pub const EATING_OUT_NAME: &str = "Eating Out";

fn default_servings() -> u32 {
    1
}

/// What a planning-log entry does.
///
/// Exactly one role per assignment; `Cook` is the implicit default when a
/// meal card is dropped onto a slot. Fixed at creation, never reclassified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentKind {
    #[default]
    Cook,
    EatLeftover,
    EatPrecooked,
    EatOut,
}

impl AssignmentKind {
    pub fn is_eating(self) -> bool {
        matches!(
            self,
            AssignmentKind::EatLeftover | AssignmentKind::EatPrecooked | AssignmentKind::EatOut
        )
    }

    /// Short label for display ("cook", "eat leftover", ...).
    pub fn label(self) -> &'static str {
        match self {
            AssignmentKind::Cook => "cook",
            AssignmentKind::EatLeftover => "eat leftover",
            AssignmentKind::EatPrecooked => "eat precooked",
            AssignmentKind::EatOut => "eat out",
        }
    }
}

/// One planning-log entry: a meal placed into a day slot with an action.
///
/// `leftovers` only means something for `Cook` (servings produced beyond
/// what is eaten immediately); `servings` only for the eat kinds. The unused
/// field keeps its default and is ignored by the reconciliation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub meal_name: String,

    #[serde(default)]
    pub kind: AssignmentKind,

    #[serde(default)]
    pub leftovers: u32,

    #[serde(default = "default_servings")]
    pub servings: u32,
}

impl Assignment {
    /// A cook assignment; leftovers start at zero until the user declares them.
    pub fn cook(meal_name: impl Into<String>) -> Self {
        Self {
            meal_name: meal_name.into(),
            kind: AssignmentKind::Cook,
            leftovers: 0,
            servings: 1,
        }
    }

    /// An eating assignment of the given kind, one serving by default.
    pub fn eat(meal_name: impl Into<String>, kind: AssignmentKind) -> Self {
        debug_assert!(kind.is_eating());
        Self {
            meal_name: meal_name.into(),
            kind,
            leftovers: 0,
            servings: 1,
        }
    }

    pub fn eating_out() -> Self {
        Self::eat(EATING_OUT_NAME, AssignmentKind::EatOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_defaults_to_cook() {
        let json = r#"{"mealName": "Pasta", "leftovers": 3}"#;
        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.kind, AssignmentKind::Cook);
        assert_eq!(assignment.leftovers, 3);
        assert_eq!(assignment.servings, 1);
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let assignment = Assignment::eat("Curry", AssignmentKind::EatPrecooked);
        let json = serde_json::to_string(&assignment).unwrap();
        assert!(json.contains("\"eat-precooked\""), "got: {}", json);
    }

    #[test]
    fn test_eating_out_constructor() {
        let assignment = Assignment::eating_out();
        assert_eq!(assignment.meal_name, EATING_OUT_NAME);
        assert_eq!(assignment.kind, AssignmentKind::EatOut);
        assert_eq!(assignment.servings, 1);
    }
}

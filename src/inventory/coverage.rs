use std::collections::HashMap;

use crate::models::{Assignment, AssignmentKind};

/// How well one slot's assignments cover its required servings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotCoverage {
    pub required: u32,
    pub satisfied: u32,
}

impl SlotCoverage {
    pub fn is_short(&self) -> bool {
        self.satisfied < self.required
    }
}

/// Derive coverage for a slot from its ordered assignment ids.
///
/// Eating leftovers or precooked counts the actual servings; cooking is
/// assumed to feed the whole slot; any eating-out assignment satisfies the
/// requirement outright, whatever else is planned.
pub fn slot_coverage(
    items: &[String],
    assignments: &HashMap<String, Assignment>,
    required: u32,
) -> SlotCoverage {
    let mut satisfied = 0u32;
    let mut has_eating_out = false;

    for id in items {
        let Some(assignment) = assignments.get(id) else {
            continue;
        };
        match assignment.kind {
            AssignmentKind::EatOut => has_eating_out = true,
            AssignmentKind::EatLeftover | AssignmentKind::EatPrecooked => {
                satisfied += assignment.servings;
            }
            AssignmentKind::Cook => satisfied += required,
        }
    }

    if has_eating_out {
        satisfied = required;
    }

    SlotCoverage {
        required,
        satisfied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures(entries: Vec<Assignment>) -> (Vec<String>, HashMap<String, Assignment>) {
        let mut ids = Vec::new();
        let mut map = HashMap::new();
        for (i, a) in entries.into_iter().enumerate() {
            let id = format!("asgn-{}", i + 1);
            ids.push(id.clone());
            map.insert(id, a);
        }
        (ids, map)
    }

    #[test]
    fn test_empty_slot_is_short() {
        let coverage = slot_coverage(&[], &HashMap::new(), 2);
        assert_eq!(coverage.satisfied, 0);
        assert!(coverage.is_short());
    }

    #[test]
    fn test_cooking_fills_the_slot() {
        let (ids, map) = fixtures(vec![Assignment::cook("Pasta")]);
        let coverage = slot_coverage(&ids, &map, 3);
        assert_eq!(coverage.satisfied, 3);
        assert!(!coverage.is_short());
    }

    #[test]
    fn test_eat_counts_servings() {
        let (ids, map) = fixtures(vec![Assignment {
            servings: 1,
            ..Assignment::eat("Pasta", AssignmentKind::EatLeftover)
        }]);
        let coverage = slot_coverage(&ids, &map, 2);
        assert_eq!(coverage.satisfied, 1);
        assert!(coverage.is_short());
    }

    #[test]
    fn test_eating_out_overrides_everything() {
        let (ids, map) = fixtures(vec![
            Assignment {
                servings: 5,
                ..Assignment::eat("Curry", AssignmentKind::EatPrecooked)
            },
            Assignment::eating_out(),
        ]);
        let coverage = slot_coverage(&ids, &map, 2);
        assert_eq!(coverage.satisfied, 2);
        assert!(!coverage.is_short());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let coverage = slot_coverage(&["missing".to_string()], &HashMap::new(), 1);
        assert_eq!(coverage.satisfied, 0);
    }
}

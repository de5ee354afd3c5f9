use meal_board_rs::models::Slot;
use meal_board_rs::state::{load_board, save_board, MealBoard};
use tempfile::NamedTempFile;

fn slot(s: &str) -> Slot {
    s.parse().unwrap()
}

/// Cook on Monday with leftovers, eat them through the week, and watch the
/// snapshot drain to an overage.
#[test]
fn test_leftover_lifecycle_through_the_week() {
    let mut board = MealBoard::new();
    let meal_id = board.meals_to_cook()[0].id.clone();
    let meal_name = board.meals_to_cook()[0].name.clone();

    let cook_id = board.plan_cook(&meal_id, slot("mon:dinner")).unwrap();
    board.set_leftovers(&cook_id, 2).unwrap();
    assert_eq!(
        board.snapshot().available_leftovers.get(&meal_name),
        Some(&2)
    );

    let tue = board.plan_leftover(&meal_name, slot("tue:lunch"));
    board.set_servings(&tue, 1).unwrap();
    assert_eq!(
        board.snapshot().available_leftovers.get(&meal_name),
        Some(&1)
    );

    let wed = board.plan_leftover(&meal_name, slot("wed:lunch"));
    board.set_servings(&wed, 2).unwrap();

    let snapshot = board.snapshot();
    assert!(!snapshot.available_leftovers.contains_key(&meal_name));
    assert_eq!(snapshot.overages.get(&meal_name), Some(&1));

    // Dialing the last meal back to one serving balances the ledger exactly.
    board.set_servings(&wed, 1).unwrap();
    let snapshot = board.snapshot();
    assert!(!snapshot.available_leftovers.contains_key(&meal_name));
    assert!(!snapshot.overages.contains_key(&meal_name));
}

#[test]
fn test_precooked_lifecycle() {
    let mut board = MealBoard::new();
    let id = board.add_precooked("Weekend Chili", 4);

    let eat_id = board.plan_precooked("Weekend Chili", slot("mon:lunch"));
    board.set_servings(&eat_id, 3).unwrap();
    assert_eq!(
        board.snapshot().available_precooked.get("Weekend Chili"),
        Some(&1)
    );

    // Shrinking the declaration below consumption drops the entry silently.
    board.set_precooked_servings(&id, 2).unwrap();
    let snapshot = board.snapshot();
    assert!(!snapshot.available_precooked.contains_key("Weekend Chili"));
    assert!(!snapshot.overages.contains_key("Weekend Chili"));
}

#[test]
fn test_eating_out_week_changes_no_inventory() {
    let mut board = MealBoard::new();
    for s in Slot::all() {
        board.plan_eating_out(s);
    }
    assert!(board.snapshot().is_empty());
    assert_eq!(board.planned_count(), 14);

    // Every slot is fully covered by eating out.
    for s in Slot::all() {
        assert!(!board.coverage(s).is_short());
    }
}

#[test]
fn test_board_survives_save_and_load() {
    let mut board = MealBoard::new();
    let meal_id = board.meals_to_cook()[0].id.clone();
    let cook_id = board.plan_cook(&meal_id, slot("thu:dinner")).unwrap();
    board.set_leftovers(&cook_id, 3).unwrap();
    board.add_precooked("Dal", 2);
    board.plan_leftover("Pasta Bolognese", slot("fri:lunch"));
    board.set_slot_requirement(slot("fri:lunch"), 2);

    let file = NamedTempFile::new().unwrap();
    save_board(file.path(), &board).unwrap();
    let mut reloaded = load_board(file.path()).unwrap();

    assert_eq!(reloaded.snapshot(), board.snapshot());
    assert_eq!(
        reloaded.slot_items(slot("thu:dinner")),
        board.slot_items(slot("thu:dinner"))
    );
    assert_eq!(reloaded.coverage(slot("fri:lunch")), board.coverage(slot("fri:lunch")));

    // The reloaded seed keeps allocating fresh ids.
    let next = reloaded.add_meal("Soup");
    assert!(reloaded.assignment(&next).is_none());
    assert!(board.find_meal(&next).is_none());
    assert!(reloaded.find_meal(&next).is_some());
}

#[test]
fn test_removing_cook_assignment_rolls_back_inventory() {
    let mut board = MealBoard::new();
    let meal_id = board.meals_to_cook()[0].id.clone();
    let name = board.meals_to_cook()[0].name.clone();

    let cook_id = board.plan_cook(&meal_id, slot("sat:dinner")).unwrap();
    board.set_leftovers(&cook_id, 4).unwrap();
    let eat_id = board.plan_leftover(&name, slot("sun:lunch"));

    board.remove_assignment(&cook_id).unwrap();

    // The eat entry now consumes leftovers nobody cooked.
    let snapshot = board.snapshot();
    assert_eq!(snapshot.overages.get(&name), Some(&1));

    board.remove_assignment(&eat_id).unwrap();
    assert!(board.snapshot().is_empty());
}

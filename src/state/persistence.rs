use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Slot;
use crate::state::MealBoard;

/// Load a board from a JSON state file.
///
/// The board is normalized after loading: all 14 slot keys exist and column
/// ids without a backing log entry are dropped.
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<MealBoard> {
    let content = fs::read_to_string(path)?;
    let mut board: MealBoard = serde_json::from_str(&content)?;
    board.normalize();
    Ok(board)
}

/// Save a board to a JSON state file, pretty-printed.
pub fn save_board<P: AsRef<Path>>(path: P, board: &MealBoard) -> Result<()> {
    let json = serde_json::to_string_pretty(board)?;
    fs::write(path, json)?;
    Ok(())
}

/// Export the planned week as CSV, one row per assignment in week order.
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, board: &MealBoard) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["day", "slot", "meal", "action", "servings", "leftovers"])?;

    for slot in Slot::all() {
        for id in board.slot_items(slot) {
            let Some(assignment) = board.assignment(id) else {
                continue;
            };
            writer.write_record([
                slot.day.label().to_string(),
                slot.row.label().to_string(),
                assignment.meal_name.clone(),
                assignment.kind.label().to_string(),
                assignment.servings.to_string(),
                assignment.leftovers.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_and_load_roundtrip() {
        let mut board = MealBoard::new();
        let meal_id = board.meals_to_cook()[0].id.clone();
        let cook_id = board.plan_cook(&meal_id, "mon:dinner".parse().unwrap()).unwrap();
        board.set_leftovers(&cook_id, 2).unwrap();
        board.add_precooked("Chili", 4);

        let file = NamedTempFile::new().unwrap();
        save_board(file.path(), &board).unwrap();
        let reloaded = load_board(file.path()).unwrap();

        assert_eq!(reloaded.planned_count(), 1);
        assert_eq!(reloaded.precooked().len(), 1);
        assert_eq!(
            reloaded.assignment(&cook_id).unwrap().leftovers,
            board.assignment(&cook_id).unwrap().leftovers
        );
        assert_eq!(reloaded.snapshot(), board.snapshot());
    }

    #[test]
    fn test_load_tolerates_missing_sections() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "{}").unwrap();

        let board = load_board(file.path()).unwrap();
        assert_eq!(board.planned_count(), 0);
        for slot in Slot::all() {
            assert!(board.slot_items(slot).is_empty());
        }
    }

    #[test]
    fn test_export_schedule_csv_rows() {
        let mut board = MealBoard::new();
        let meal_id = board.meals_to_cook()[0].id.clone();
        board.plan_cook(&meal_id, "mon:lunch".parse().unwrap()).unwrap();
        board.plan_eating_out("fri:dinner".parse().unwrap());

        let file = NamedTempFile::new().unwrap();
        export_schedule_csv(file.path(), &board).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "day,slot,meal,action,servings,leftovers");
        assert!(lines[1].starts_with("Monday,Lunch,"));
        assert!(lines[2].contains("Eating Out"));
        assert!(lines[2].contains("eat out"));
    }
}

mod manager;
mod persistence;

pub use manager::{MealBoard, DEFAULT_SLOT_REQUIREMENT};
pub use persistence::{export_schedule_csv, load_board, save_board};

pub mod cli;
pub mod error;
pub mod interface;
pub mod inventory;
pub mod models;
pub mod state;

pub use error::{BoardError, Result};
pub use inventory::{reconcile, InventorySnapshot};
pub use models::{Assignment, AssignmentKind, MealToCook, PrecookedMeal, Slot};
pub use state::MealBoard;

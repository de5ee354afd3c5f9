pub mod assignment;
pub mod meal;
pub mod schedule;

pub use assignment::{Assignment, AssignmentKind, EATING_OUT_NAME};
pub use meal::{MealToCook, PrecookedMeal};
pub use schedule::{Day, MealRow, Slot};

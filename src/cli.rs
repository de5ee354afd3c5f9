use clap::{Parser, Subcommand};

/// MealBoard — a household meal planner with a weekly lunch/dinner grid and
/// leftover/precooked-meal tracking.
#[derive(Parser, Debug)]
#[command(name = "meal_board")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the board state JSON file.
    #[arg(short, long, default_value = "board_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the weekly board and the cooked-meal inventory.
    Show,

    /// Plan something into a slot (e.g. "mon:lunch"), interactively.
    Plan {
        /// Target slot, day:row (mon..sun, lunch|dinner).
        slot: String,
    },

    /// Edit, move, or remove an assignment already planned into a slot.
    Edit {
        /// Slot holding the assignment, day:row.
        slot: String,
    },

    /// Add a meal to the "to cook" palette.
    AddMeal {
        /// Meal name.
        name: String,
    },

    /// Declare precooked inventory (batch-cooked or takeaway servings).
    AddPrecooked {
        /// Meal name.
        name: String,

        /// Declared servings.
        #[arg(short, long, default_value_t = 1)]
        servings: u32,
    },

    /// Export the planned week as CSV.
    Export {
        /// Output file path.
        #[arg(short, long, default_value = "week_plan.csv")]
        output: String,
    },

    /// Reset parts of the board state.
    Reset {
        /// Clear all planned assignments.
        #[arg(long)]
        assignments: bool,

        /// Clear the meals-to-cook palette.
        #[arg(long)]
        meals: bool,

        /// Clear the precooked inventory.
        #[arg(long)]
        precooked: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Show
    }
}

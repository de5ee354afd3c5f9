use std::path::Path;

use clap::Parser;

use meal_board_rs::cli::{Cli, Command};
use meal_board_rs::error::Result;
use meal_board_rs::interface::{
    assignment_line, display_board, display_inventory, display_palette, prompt_leftovers,
    prompt_meal_name, prompt_pick, prompt_plan_action, prompt_servings, prompt_yes_no, PlanAction,
};
use meal_board_rs::models::Slot;
use meal_board_rs::state::{export_schedule_csv, load_board, save_board, MealBoard};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Show => cmd_show(&cli.file),
        Command::Plan { slot } => cmd_plan(&cli.file, &slot),
        Command::Edit { slot } => cmd_edit(&cli.file, &slot),
        Command::AddMeal { name } => cmd_add_meal(&cli.file, &name),
        Command::AddPrecooked { name, servings } => cmd_add_precooked(&cli.file, &name, servings),
        Command::Export { output } => cmd_export(&cli.file, &output),
        Command::Reset {
            assignments,
            meals,
            precooked,
        } => cmd_reset(&cli.file, assignments, meals, precooked),
    }
}

/// Load the board, or start a fresh one when no state file exists yet.
fn load_or_new(file_path: &str) -> Result<MealBoard> {
    let path = Path::new(file_path);
    if path.exists() {
        load_board(path)
    } else {
        println!("No board state at {}; starting a fresh week.", file_path);
        Ok(MealBoard::new())
    }
}

/// Show the weekly board and the derived inventory.
fn cmd_show(file_path: &str) -> Result<()> {
    let board = load_or_new(file_path)?;
    let snapshot = board.snapshot();

    display_board(&board);
    display_inventory(&snapshot);
    display_palette(&board);

    if snapshot.has_overages() {
        println!("Some meals are planned to be eaten more than was cooked.");
        println!("Check the leftover counts on the cook assignments.");
    }

    Ok(())
}

/// Plan something into a slot, interactively.
fn cmd_plan(file_path: &str, slot_str: &str) -> Result<()> {
    let slot: Slot = slot_str.parse()?;
    let mut board = load_or_new(file_path)?;

    println!("Planning {}", slot.label());

    let planned = match prompt_plan_action()? {
        PlanAction::Cook => {
            let names: Vec<String> = board
                .meals_to_cook()
                .iter()
                .map(|m| m.name.clone())
                .collect();
            if names.is_empty() {
                println!("Nothing on the palette. Use 'add-meal' first.");
                return Ok(());
            }
            match prompt_pick("Which meal to cook?", &names)? {
                Some(index) => {
                    let meal_id = board.meals_to_cook()[index].id.clone();
                    let id = board.plan_cook(&meal_id, slot)?;
                    let leftovers = prompt_leftovers()?;
                    board.set_leftovers(&id, leftovers)?;
                    true
                }
                None => false,
            }
        }
        PlanAction::EatLeftover => {
            let snapshot = board.snapshot();
            let mut names: Vec<String> =
                snapshot.available_leftovers.keys().cloned().collect();
            names.sort();
            if names.is_empty() {
                println!("No leftovers available to eat.");
                return Ok(());
            }
            println!("Available leftovers: {}", names.join(", "));
            match prompt_meal_name("Which leftover?", &names)? {
                Some(name) => {
                    let id = board.plan_leftover(&name, slot);
                    let servings = prompt_servings()?;
                    board.set_servings(&id, servings)?;
                    true
                }
                None => false,
            }
        }
        PlanAction::EatPrecooked => {
            let mut names: Vec<String> =
                board.precooked().iter().map(|m| m.name.clone()).collect();
            names.sort();
            names.dedup();
            if names.is_empty() {
                println!("No precooked meals declared. Use 'add-precooked' first.");
                return Ok(());
            }
            println!("Precooked meals: {}", names.join(", "));
            match prompt_meal_name("Which precooked meal?", &names)? {
                Some(name) => {
                    let id = board.plan_precooked(&name, slot);
                    let servings = prompt_servings()?;
                    board.set_servings(&id, servings)?;
                    true
                }
                None => false,
            }
        }
        PlanAction::EatOut => {
            board.plan_eating_out(slot);
            true
        }
    };

    if !planned {
        println!("Nothing planned.");
        return Ok(());
    }

    display_inventory(&board.snapshot());

    if prompt_yes_no("Save the board?", true)? {
        save_board(file_path, &board)?;
        println!("Board saved.");
    }

    Ok(())
}

/// Edit, move, or remove an assignment in a slot.
fn cmd_edit(file_path: &str, slot_str: &str) -> Result<()> {
    let slot: Slot = slot_str.parse()?;
    let mut board = load_or_new(file_path)?;

    let items: Vec<String> = board.slot_items(slot).to_vec();
    if items.is_empty() {
        println!("Nothing planned for {}.", slot.label());
        return Ok(());
    }

    let lines: Vec<String> = items.iter().map(|id| assignment_line(&board, id)).collect();
    let Some(index) = prompt_pick("Which assignment?", &lines)? else {
        return Ok(());
    };
    let id = items[index].clone();

    let is_cook = board
        .assignment(&id)
        .map(|a| !a.kind.is_eating())
        .unwrap_or(false);
    let actions = if is_cook {
        vec![
            "Set leftovers".to_string(),
            "Move to another slot".to_string(),
            "Remove".to_string(),
        ]
    } else {
        vec![
            "Set servings".to_string(),
            "Move to another slot".to_string(),
            "Remove".to_string(),
        ]
    };

    match prompt_pick("What to do?", &actions)? {
        Some(0) if is_cook => {
            let leftovers = prompt_leftovers()?;
            board.set_leftovers(&id, leftovers)?;
        }
        Some(0) => {
            let servings = prompt_servings()?;
            board.set_servings(&id, servings)?;
        }
        Some(1) => {
            let target: String = dialoguer::Input::new()
                .with_prompt("Move to slot (day:row)")
                .interact_text()?;
            board.move_assignment(&id, target.trim().parse()?)?;
        }
        Some(_) => {
            let removed = board.remove_assignment(&id)?;
            println!("Removed {} from {}.", removed.meal_name, slot.label());
        }
        None => return Ok(()),
    }

    display_inventory(&board.snapshot());

    if prompt_yes_no("Save the board?", true)? {
        save_board(file_path, &board)?;
        println!("Board saved.");
    }

    Ok(())
}

/// Add a meal to the to-cook palette.
fn cmd_add_meal(file_path: &str, name: &str) -> Result<()> {
    let mut board = load_or_new(file_path)?;
    let id = board.add_meal(name);
    save_board(file_path, &board)?;
    println!("Added {} ({}) to the palette.", name, id);
    Ok(())
}

/// Declare precooked inventory.
fn cmd_add_precooked(file_path: &str, name: &str, servings: u32) -> Result<()> {
    let mut board = load_or_new(file_path)?;
    let id = board.add_precooked(name, servings);
    save_board(file_path, &board)?;
    println!("Declared {} servings of {} ({}).", servings, name, id);
    Ok(())
}

/// Export the planned week as CSV.
fn cmd_export(file_path: &str, output: &str) -> Result<()> {
    let board = load_or_new(file_path)?;
    export_schedule_csv(output, &board)?;
    println!("Exported {} assignments to {}.", board.planned_count(), output);
    Ok(())
}

/// Reset parts of the board state.
fn cmd_reset(file_path: &str, assignments: bool, meals: bool, precooked: bool) -> Result<()> {
    if !assignments && !meals && !precooked {
        println!("Please specify at least one reset option:");
        println!("  --assignments Clear all planned assignments");
        println!("  --meals       Clear the meals-to-cook palette");
        println!("  --precooked   Clear the precooked inventory");
        return Ok(());
    }

    let mut board = load_or_new(file_path)?;

    if assignments {
        board.clear_assignments();
        println!("Cleared all assignments.");
    }

    if meals {
        board.clear_meals();
        println!("Cleared the meal palette.");
    }

    if precooked {
        board.clear_precooked();
        println!("Cleared the precooked inventory.");
    }

    save_board(file_path, &board)?;
    println!("Board saved.");

    Ok(())
}

//! Drives the engine through the fixed puzzle's unique solution.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play_fixed_puzzle
//! ```
//!
//! Set `RUST_LOG=debug` to see each placement decision.

use quadlace_core::Position;
use quadlace_game::{Engine, PlacementResult, fixed_puzzle, fixed_puzzle_solution};

fn main() {
    env_logger::init();

    let solution = fixed_puzzle_solution();
    let mut engine = Engine::new(&fixed_puzzle());

    println!("initial board:\n{}\n", engine.to_digit_grid());

    for pos in Position::ALL {
        if !engine.cell(pos).is_empty() {
            continue;
        }
        let digit = solution[pos].expect("solution grid is full");
        engine.select_cell(pos);
        match engine.attempt_place(digit) {
            PlacementResult::Placed { solved, completed } => {
                print!("placed {digit} at {pos}");
                if completed.any() {
                    print!(
                        " (completed: group {}, row {}, column {})",
                        completed.group, completed.row, completed.column
                    );
                }
                println!();
                if solved {
                    println!("\nsolved!");
                }
            }
            outcome => println!("unexpected outcome at {pos}: {outcome:?}"),
        }
    }

    println!("\nfinal board:\n{}", engine.to_digit_grid());
}

//! Game engine for the quadlace puzzle.
//!
//! This crate turns the core types from `quadlace-core` into a playable
//! 4×4 number-place engine. The [`Engine`] owns the board, two derived
//! caches (one per row, one per column) that make duplicate checks a scan of
//! at most 4 records, and the current selection. A caller drives it with
//! [`Engine::select_cell`] and [`Engine::attempt_place`] and renders whatever
//! the returned [`PlacementResult`] says; the engine itself knows nothing
//! about presentation.
//!
//! Placement outcomes are ordinary values, never errors: a digit is either
//! committed ([`PlacementResult::Placed`], reporting solved state and which
//! houses just filled up), in conflict ([`PlacementResult::Conflict`], naming
//! the clashing positions), or not applicable
//! ([`PlacementResult::Rejected`]). Conflicting and rejected attempts leave
//! every piece of state untouched.
//!
//! # Examples
//!
//! ```
//! use quadlace_core::{Digit, Position};
//! use quadlace_game::{Engine, PlacementResult, fixed_puzzle};
//!
//! let mut engine = Engine::new(&fixed_puzzle());
//!
//! // (0, 2) is empty; 4 is its value in the unique solution.
//! engine.select_cell(Position::new(0, 2));
//! let outcome = engine.attempt_place(Digit::D4);
//! assert!(matches!(outcome, PlacementResult::Placed { solved: false, .. }));
//!
//! // 1 already appears in the same group, at (1, 2).
//! let outcome = engine.attempt_place(Digit::D1);
//! assert!(matches!(outcome, PlacementResult::Conflict(_)));
//! ```

pub mod cell;
pub mod checker;
pub mod engine;
pub mod lane_index;
pub mod placement;
pub mod puzzle;
pub mod selection;

pub use self::{
    cell::CellState,
    engine::{Engine, EngineOptions, GivenCellPolicy},
    placement::{CompletedHouses, Conflicts, PlacementResult, RejectReason},
    puzzle::{fixed_puzzle, fixed_puzzle_solution},
    selection::Selection,
};

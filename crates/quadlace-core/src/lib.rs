//! Core data structures for the quadlace puzzle.
//!
//! This crate provides the foundational types shared by the higher-level game
//! engine: board coordinates, digits, houses, and the digit grid. It carries
//! no game rules; conflict checking and placement live in `quadlace-game`.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of the digits 1-4
//! - [`position`]: Board coordinates, including the mapping between global
//!   `(x, y)` coordinates and group-major `(group, cell)` coordinates
//! - [`house`]: Rows, columns, and 2×2 groups as first-class values
//! - [`digit_grid`]: A 4×4 grid of optional digits
//!
//! # Examples
//!
//! ```
//! use quadlace_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D1));
//!
//! assert_eq!(grid[Position::new(0, 0)], Some(Digit::D1));
//! assert!(!grid.is_full());
//! ```

pub mod digit;
pub mod digit_grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
};

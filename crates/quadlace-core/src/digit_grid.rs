//! A 4×4 grid of optional digits.

use std::{fmt, ops::Index, str::FromStr};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// A 4×4 grid of optional digits, indexed by [`Position`].
///
/// This type only stores values; the distinction between pre-filled and
/// player-filled cells belongs to the game layer. It is used for the initial
/// puzzle, for board snapshots, and in tests.
///
/// # Examples
///
/// ```
/// use quadlace_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "14.3 234. .13. .2..".parse().unwrap();
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D1));
/// assert_eq!(grid[Position::new(2, 0)], None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 16],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 16] }
    }

    /// Builds a grid from group-major values.
    ///
    /// `groups[g][c]` becomes the cell at [`Position::from_group`]`(g, c)`.
    #[must_use]
    pub fn from_groups(groups: [[Option<Digit>; 4]; 4]) -> Self {
        let mut grid = Self::new();
        for (group, values) in (0u8..4).zip(groups) {
            for (cell, value) in (0u8..4).zip(values) {
                grid.set(Position::from_group(group, cell), value);
            }
        }
        grid
    }

    /// Returns the digit at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the digit at `pos`.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns `true` when every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

/// Error returned when parsing a [`DigitGrid`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The string does not contain exactly 16 cells.
    #[display("expected 16 cells, got {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// A cell character is not a digit 1-4 or `.`.
    #[display("invalid cell character: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    /// Parses 16 cells in row-major order; `.` marks an empty cell and
    /// whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 16 {
            return Err(ParseGridError::WrongLength(chars.len()));
        }
        let mut grid = Self::new();
        for (pos, c) in Position::ALL.into_iter().zip(chars) {
            let digit = match c {
                '.' => None,
                '1' => Some(Digit::D1),
                '2' => Some(Digit::D2),
                '3' => Some(Digit::D3),
                '4' => Some(Digit::D4),
                _ => return Err(ParseGridError::InvalidCharacter(c)),
            };
            grid.set(pos, digit);
        }
        Ok(grid)
    }
}

impl fmt::Display for DigitGrid {
    /// Formats the grid as 4 lines of 4 cells, `.` for empty. The output
    /// parses back into an equal grid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..4 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..4 {
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

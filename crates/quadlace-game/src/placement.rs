//! Placement outcomes.
//!
//! Every placement attempt resolves to an ordinary value; the engine never
//! panics or returns a fatal error for puzzle input. Conflicts carry the
//! exact clashing positions so a caller can render precise feedback.

use derive_more::{Display, Error, IsVariant};
use quadlace_core::Position;

/// Outcome of a placement attempt.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum PlacementResult {
    /// The digit was committed to the board.
    Placed {
        /// Whether every cell on the board now holds a digit.
        solved: bool,
        /// Which of the placed cell's houses are full after this placement.
        completed: CompletedHouses,
    },
    /// The digit duplicates an existing one; nothing was committed.
    Conflict(Conflicts),
    /// The attempt was not applicable; nothing was committed.
    Rejected(RejectReason),
}

/// Positions that clash with an attempted placement, at most one per house
/// kind.
///
/// A caller that wants to show what was tried before reverting can display
/// the candidate transiently; the engine itself never stores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conflicts {
    /// Cell inside the target group that already holds the digit.
    pub group: Option<Position>,
    /// Cell in the target column that already holds the digit.
    pub column: Option<Position>,
    /// Cell in the target row that already holds the digit.
    pub row: Option<Position>,
}

impl Conflicts {
    /// Returns `true` when no check fired.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.group.is_none() && self.column.is_none() && self.row.is_none()
    }

    /// Iterates the conflicting positions in group, column, row order.
    pub fn iter(&self) -> impl Iterator<Item = Position> {
        [self.group, self.column, self.row].into_iter().flatten()
    }
}

/// Houses of the placed cell that are completely filled after a successful
/// placement.
///
/// The flags let a caller trigger per-house feedback, such as a fill
/// animation, without rescanning the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletedHouses {
    /// The cell's 2×2 group is full.
    pub group: bool,
    /// The cell's row is full.
    pub row: bool,
    /// The cell's column is full.
    pub column: bool,
}

impl CompletedHouses {
    /// Returns `true` when at least one house is full.
    #[must_use]
    pub const fn any(self) -> bool {
        self.group || self.row || self.column
    }
}

/// Why a placement or clear was not applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RejectReason {
    /// No cell is currently selected.
    #[display("no cell is selected")]
    NoSelection,
    /// The selected cell is part of the original puzzle.
    #[display("cannot modify a given cell")]
    GivenCell,
}

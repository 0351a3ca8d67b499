//! The puzzle engine: board state, derived caches, and placement.

use log::{debug, trace};
use quadlace_core::{Digit, DigitGrid, House, Position};

use crate::{
    CellState, CompletedHouses, Conflicts, PlacementResult, RejectReason, Selection, checker,
    lane_index::LaneIndex,
};

/// How the engine treats input into given (pre-filled) cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GivenCellPolicy {
    /// Given cells are immutable; placements into them are rejected.
    #[default]
    Strict,
    /// Given cells behave like player-filled cells and may be replaced.
    Editable,
}

/// Engine construction options.
///
/// # Examples
///
/// ```
/// use quadlace_game::{Engine, EngineOptions, GivenCellPolicy, fixed_puzzle};
///
/// let options = EngineOptions::new().given_cell_policy(GivenCellPolicy::Editable);
/// let engine = Engine::with_options(&fixed_puzzle(), options);
/// # let _ = engine;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    given_cell_policy: GivenCellPolicy,
}

impl EngineOptions {
    /// Creates the default options (strict given cells).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how input into given cells is treated.
    #[must_use]
    pub fn given_cell_policy(mut self, policy: GivenCellPolicy) -> Self {
        self.given_cell_policy = policy;
        self
    }
}

/// The puzzle engine.
///
/// Owns the board, the row and column caches, and the current selection;
/// nothing else mutates them. Every board write and its cache updates happen
/// within a single call, so the caches can never be observed out of sync
/// with the board.
///
/// The engine is deliberately non-throwing: invalid attempts come back as
/// [`PlacementResult::Rejected`], conflicts as [`PlacementResult::Conflict`]
/// with the exact clashing positions, and neither mutates any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    cells: [CellState; 16],
    rows: LaneIndex,
    columns: LaneIndex,
    selection: Option<Selection>,
    options: EngineOptions,
}

impl Engine {
    /// Creates an engine from the initial puzzle with default options.
    ///
    /// Cells holding a digit in `puzzle` become given cells, and the row and
    /// column caches are seeded from them.
    #[must_use]
    pub fn new(puzzle: &DigitGrid) -> Self {
        Self::with_options(puzzle, EngineOptions::default())
    }

    /// Creates an engine from the initial puzzle with the given options.
    #[must_use]
    pub fn with_options(puzzle: &DigitGrid, options: EngineOptions) -> Self {
        let mut cells = [CellState::Empty; 16];
        let mut rows = LaneIndex::new();
        let mut columns = LaneIndex::new();
        for pos in Position::ALL {
            if let Some(digit) = puzzle[pos] {
                cells[pos.index()] = CellState::Given(digit);
                rows.insert(pos.y(), digit, pos);
                columns.insert(pos.x(), digit, pos);
            }
        }
        Self {
            cells,
            rows,
            columns,
            selection: None,
            options,
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the current selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Selects the cell at `pos` and returns its resolved coordinates.
    ///
    /// The board is not touched; the previous selection is overwritten.
    pub fn select_cell(&mut self, pos: Position) -> Selection {
        let selection = Selection::new(pos, self.is_editable(pos));
        self.selection = Some(selection);
        selection
    }

    /// Attempts to place `digit` at the currently selected cell.
    ///
    /// On success the board and both caches are updated together, and the
    /// returned [`PlacementResult::Placed`] reports whether the board is now
    /// solved and which of the cell's houses just became full. Placing over
    /// an already-filled editable cell replaces its value; re-entering the
    /// value a cell already holds succeeds rather than clashing with itself.
    ///
    /// On conflict or rejection nothing mutates, and the outcome carries the
    /// clashing positions or the reason.
    pub fn attempt_place(&mut self, digit: Digit) -> PlacementResult {
        let Some(selection) = self.selection else {
            trace!("placement of {digit} attempted with no selection");
            return PlacementResult::Rejected(RejectReason::NoSelection);
        };
        let pos = selection.position;
        if !selection.editable {
            debug!("rejected {digit} at {pos}: given cell");
            return PlacementResult::Rejected(RejectReason::GivenCell);
        }

        // The cell's own coordinate is excluded everywhere, which stands in
        // for logically removing its current value during a replace.
        let conflicts = Conflicts {
            group: checker::check_group(&self.group_values(selection.group), digit, selection.cell)
                .map(|cell| Position::from_group(selection.group, cell)),
            column: checker::check_lane(self.columns.bucket(pos.x()), digit, pos),
            row: checker::check_lane(self.rows.bucket(pos.y()), digit, pos),
        };
        if !conflicts.is_empty() {
            debug!("conflicting {digit} at {pos}: {conflicts:?}");
            return PlacementResult::Conflict(conflicts);
        }

        // Replace: drop the stale cache entries before inserting new ones.
        if self.cell(pos).as_digit().is_some() {
            self.rows.remove(pos.y(), pos);
            self.columns.remove(pos.x(), pos);
        }
        self.cells[pos.index()] = CellState::Filled(digit);
        self.rows.insert(pos.y(), digit, pos);
        self.columns.insert(pos.x(), digit, pos);

        let completed = CompletedHouses {
            group: self
                .group_values(selection.group)
                .iter()
                .all(Option::is_some),
            row: self.rows.len(pos.y()) == 4,
            column: self.columns.len(pos.x()) == 4,
        };
        let solved = self.is_solved();
        debug!("placed {digit} at {pos} (solved: {solved})");
        PlacementResult::Placed { solved, completed }
    }

    /// Clears the cell at `pos`, dropping its row and column cache entries.
    ///
    /// Clearing an empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RejectReason::GivenCell`] if the cell is a given cell and
    /// the engine uses the strict given-cell policy.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), RejectReason> {
        match self.cell(pos) {
            CellState::Given(_) if !self.is_editable(pos) => Err(RejectReason::GivenCell),
            CellState::Given(_) | CellState::Filled(_) => {
                self.rows.remove(pos.y(), pos);
                self.columns.remove(pos.x(), pos);
                self.cells[pos.index()] = CellState::Empty;
                debug!("cleared cell at {pos}");
                Ok(())
            }
            CellState::Empty => Ok(()),
        }
    }

    /// Returns whether every cell on the board holds a digit.
    ///
    /// Conflicting digits never reach the board, so a full board is a solved
    /// board.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.as_digit().is_some())
    }

    /// Returns a value snapshot of the board.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).as_digit());
        }
        grid
    }

    fn is_editable(&self, pos: Position) -> bool {
        match self.cell(pos) {
            CellState::Given(_) => self.options.given_cell_policy == GivenCellPolicy::Editable,
            CellState::Filled(_) | CellState::Empty => true,
        }
    }

    fn group_values(&self, group: u8) -> [Option<Digit>; 4] {
        House::Group { index: group }
            .positions()
            .map(|pos| self.cell(pos).as_digit())
    }
}

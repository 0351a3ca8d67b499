//! Board coordinates.
//!
//! A cell on the 4×4 board can be addressed two ways:
//!
//! - by its global `(x, y)` coordinate, where `x` is the column (left to
//!   right) and `y` is the row (top to bottom), both 0-3;
//! - by its group-major `(group, cell)` coordinate, where `group` indexes one
//!   of the four 2×2 groups and `cell` a cell within it.
//!
//! Groups are laid out column-major: group 0 is top-left, group 1
//! bottom-left, group 2 top-right, group 3 bottom-right. Cells within a group
//! follow the same order. [`Position`] converts between the two freely.

use std::fmt::{self, Display};

/// A position on the 4×4 board.
///
/// # Examples
///
/// ```
/// use quadlace_core::Position;
///
/// let pos = Position::new(1, 2);
/// assert_eq!(pos.x(), 1);
/// assert_eq!(pos.y(), 2);
///
/// // Group-major coordinates round-trip
/// assert_eq!(Position::from_group(pos.group_index(), pos.cell_index()), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 16 positions in row-major order.
    pub const ALL: [Self; 16] = {
        let mut all = [Self { x: 0, y: 0 }; 16];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 16 {
            all[i] = Self {
                x: (i % 4) as u8,
                y: (i / 4) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-3.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 4 && y < 4);
        Self { x, y }
    }

    /// Creates a position from group-major coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `group` or `cell` is not in the range 0-3.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadlace_core::Position;
    ///
    /// // Cell 2 of group 1 (bottom-left) is at column 1, row 2.
    /// assert_eq!(Position::from_group(1, 2), Position::new(1, 2));
    /// ```
    #[must_use]
    pub const fn from_group(group: u8, cell: u8) -> Self {
        assert!(group < 4 && cell < 4);
        Self::new((group / 2) * 2 + cell / 2, (group % 2) * 2 + cell % 2)
    }

    /// Returns the column (0-3, left to right).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-3, top to bottom).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the 2×2 group containing this position (0-3).
    #[must_use]
    pub const fn group_index(self) -> u8 {
        (self.x / 2) * 2 + self.y / 2
    }

    /// Returns the cell index of this position within its group (0-3).
    #[must_use]
    pub const fn cell_index(self) -> u8 {
        (self.x % 2) * 2 + self.y % 2
    }

    /// Returns the row-major index of this position into 16-element arrays.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.y) * 4 + usize::from(self.x)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_all_positions_row_major() {
        assert_eq!(Position::ALL.len(), 16);
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[3], Position::new(3, 0));
        assert_eq!(Position::ALL[4], Position::new(0, 1));
        assert_eq!(Position::ALL[15], Position::new(3, 3));
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_group_layout() {
        // Group corners: column-major group order, top-left cell first.
        assert_eq!(Position::from_group(0, 0), Position::new(0, 0));
        assert_eq!(Position::from_group(1, 0), Position::new(0, 2));
        assert_eq!(Position::from_group(2, 0), Position::new(2, 0));
        assert_eq!(Position::from_group(3, 0), Position::new(2, 2));

        // Cells within a group are column-major too.
        assert_eq!(Position::from_group(0, 1), Position::new(0, 1));
        assert_eq!(Position::from_group(0, 2), Position::new(1, 0));
        assert_eq!(Position::from_group(0, 3), Position::new(1, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 3).to_string(), "(2, 3)");
    }

    #[test]
    #[should_panic(expected = "x < 4 && y < 4")]
    fn test_new_out_of_range_panics() {
        let _ = Position::new(4, 0);
    }

    proptest! {
        #[test]
        fn test_group_coordinates_round_trip(group in 0u8..4, cell in 0u8..4) {
            let pos = Position::from_group(group, cell);
            prop_assert_eq!(pos.group_index(), group);
            prop_assert_eq!(pos.cell_index(), cell);
        }

        #[test]
        fn test_position_round_trips_through_group(x in 0u8..4, y in 0u8..4) {
            let pos = Position::new(x, y);
            prop_assert_eq!(
                Position::from_group(pos.group_index(), pos.cell_index()),
                pos
            );
        }
    }
}

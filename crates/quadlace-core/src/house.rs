use crate::Position;

/// A board house (row, column, or 2×2 group).
///
/// Every house contains 4 cells, and a completely filled house must hold the
/// digits 1-4 exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-3).
    Row {
        /// Row index (0-3).
        y: u8,
    },
    /// A column identified by its x coordinate (0-3).
    Column {
        /// Column index (0-3).
        x: u8,
    },
    /// A 2×2 group identified by its index (0-3, column-major).
    Group {
        /// Group index (0-3).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-3).
    pub const ROWS: [Self; 4] = [
        Self::Row { y: 0 },
        Self::Row { y: 1 },
        Self::Row { y: 2 },
        Self::Row { y: 3 },
    ];

    /// Array containing all columns (0-3).
    pub const COLUMNS: [Self; 4] = [
        Self::Column { x: 0 },
        Self::Column { x: 1 },
        Self::Column { x: 2 },
        Self::Column { x: 3 },
    ];

    /// Array containing all groups (0-3).
    pub const GROUPS: [Self; 4] = [
        Self::Group { index: 0 },
        Self::Group { index: 1 },
        Self::Group { index: 2 },
        Self::Group { index: 3 },
    ];

    /// Array containing all houses in row, column, group order.
    pub const ALL: [Self; 12] = {
        let mut all = [Self::Row { y: 0 }; 12];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 4 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 4] = Self::Column { x: i as u8 };
            all[i + 8] = Self::Group { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-3) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-3.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 4);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Group { index } => Position::from_group(index, i),
        }
    }

    /// Returns the 4 positions contained in this house.
    #[must_use]
    pub fn positions(self) -> [Position; 4] {
        [0, 1, 2, 3].map(|i| self.position_from_cell_index(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_houses_order() {
        assert_eq!(House::ALL.len(), 12);
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[4], House::Column { x: 0 });
        assert_eq!(House::ALL[8], House::Group { index: 0 });
        assert_eq!(House::ALL[11], House::Group { index: 3 });
    }

    #[test]
    fn test_positions_are_distinct_and_in_house() {
        for house in House::ALL {
            let positions = house.positions();
            for (i, pos) in positions.into_iter().enumerate() {
                // No duplicates within a house
                assert!(!positions[..i].contains(&pos));
                match house {
                    House::Row { y } => assert_eq!(pos.y(), y),
                    House::Column { x } => assert_eq!(pos.x(), x),
                    House::Group { index } => assert_eq!(pos.group_index(), index),
                }
            }
        }
    }

    #[test]
    fn test_group_positions_match_group_coordinates() {
        let positions = House::Group { index: 1 }.positions();
        assert_eq!(positions[0], Position::new(0, 2));
        assert_eq!(positions[1], Position::new(0, 3));
        assert_eq!(positions[2], Position::new(1, 2));
        assert_eq!(positions[3], Position::new(1, 3));
    }
}

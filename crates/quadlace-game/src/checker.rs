//! Pure duplicate checks for groups, rows, and columns.
//!
//! These functions only read their inputs; committing a placement and
//! keeping the caches in sync is the engine's job. All checks ignore the
//! cell being edited so that re-entering a cell's current value reads as
//! clean instead of clashing with itself.

use quadlace_core::{Digit, Position};

use crate::lane_index::IndexEntry;

/// Looks for `candidate` among a group's cell values, ignoring
/// `exclude_cell`.
///
/// `values` holds the group's cells in cell-index order. Returns the
/// in-group index of the cell that already holds `candidate`, or `None`.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn check_group(values: &[Option<Digit>; 4], candidate: Digit, exclude_cell: u8) -> Option<u8> {
    values.iter().enumerate().find_map(|(cell, value)| {
        let cell = cell as u8;
        (*value == Some(candidate) && cell != exclude_cell).then_some(cell)
    })
}

/// Scans one lane's index bucket for `candidate`, ignoring the record at
/// `exclude`.
///
/// Shared by the row and column checks; the caller picks the bucket.
/// Returns the position of the first clashing record, or `None`.
#[must_use]
pub fn check_lane(bucket: &[IndexEntry], candidate: Digit, exclude: Position) -> Option<Position> {
    bucket
        .iter()
        .find(|entry| entry.digit == candidate && entry.position != exclude)
        .map(|entry| entry.position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_group_finds_duplicate() {
        let values = [None, None, Some(Digit::D1), Some(Digit::D2)];
        assert_eq!(check_group(&values, Digit::D1, 0), Some(2));
        assert_eq!(check_group(&values, Digit::D2, 0), Some(3));
        assert_eq!(check_group(&values, Digit::D3, 0), None);
    }

    #[test]
    fn test_check_group_ignores_excluded_cell() {
        let values = [Some(Digit::D4), None, None, None];
        // The excluded cell's own value is not a conflict.
        assert_eq!(check_group(&values, Digit::D4, 0), None);
        assert_eq!(check_group(&values, Digit::D4, 1), Some(0));
    }

    #[test]
    fn test_check_lane_finds_duplicate() {
        let bucket = [
            IndexEntry {
                digit: Digit::D4,
                position: Position::new(2, 1),
            },
            IndexEntry {
                digit: Digit::D3,
                position: Position::new(2, 2),
            },
        ];
        let editing = Position::new(2, 3);
        assert_eq!(
            check_lane(&bucket, Digit::D3, editing),
            Some(Position::new(2, 2))
        );
        assert_eq!(check_lane(&bucket, Digit::D1, editing), None);
    }

    #[test]
    fn test_check_lane_ignores_excluded_position() {
        let bucket = [IndexEntry {
            digit: Digit::D2,
            position: Position::new(1, 3),
        }];
        assert_eq!(check_lane(&bucket, Digit::D2, Position::new(1, 3)), None);
        assert_eq!(
            check_lane(&bucket, Digit::D2, Position::new(0, 3)),
            Some(Position::new(1, 3))
        );
    }
}

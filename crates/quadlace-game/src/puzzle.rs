//! The built-in fixed puzzle.

use quadlace_core::{Digit, DigitGrid};

const FIXED_GROUPS: [[Option<u8>; 4]; 4] = [
    [Some(1), Some(2), Some(4), Some(3)],
    [None, None, Some(1), Some(2)],
    [None, Some(4), Some(3), None],
    [Some(3), None, None, None],
];

/// Returns the built-in fixed puzzle.
///
/// The layout is group-major: `FIXED_GROUPS[g][c]` is the given digit at
/// cell `c` of group `g`, or `None` for a player-fillable cell. The puzzle
/// has 9 givens and admits exactly one solution, available from
/// [`fixed_puzzle_solution`].
///
/// # Examples
///
/// ```
/// use quadlace_core::{Digit, Position};
/// use quadlace_game::fixed_puzzle;
///
/// let puzzle = fixed_puzzle();
/// assert_eq!(puzzle[Position::from_group(0, 0)], Some(Digit::D1));
/// assert_eq!(puzzle[Position::from_group(1, 0)], None);
/// ```
#[must_use]
pub fn fixed_puzzle() -> DigitGrid {
    DigitGrid::from_groups(
        FIXED_GROUPS.map(|group| group.map(|value| value.map(Digit::from_value))),
    )
}

/// Returns the unique solution of [`fixed_puzzle`].
#[must_use]
pub fn fixed_puzzle_solution() -> DigitGrid {
    "1423\n2341\n4132\n3214"
        .parse()
        .expect("solution grid literal is well formed")
}

#[cfg(test)]
mod tests {
    use quadlace_core::{House, Position};

    use super::*;

    #[test]
    fn test_fixed_puzzle_layout() {
        let puzzle = fixed_puzzle();
        let expected: DigitGrid = "14.3\n234.\n.13.\n.2..".parse().expect("valid grid");
        assert_eq!(puzzle, expected);

        let givens = Position::ALL
            .into_iter()
            .filter(|&pos| puzzle[pos].is_some())
            .count();
        assert_eq!(givens, 9);
    }

    #[test]
    fn test_solution_extends_puzzle_and_satisfies_houses() {
        let puzzle = fixed_puzzle();
        let solution = fixed_puzzle_solution();
        assert!(solution.is_full());

        // Every given survives into the solution.
        for pos in Position::ALL {
            if let Some(digit) = puzzle[pos] {
                assert_eq!(solution[pos], Some(digit));
            }
        }

        // Every house holds a permutation of 1-4.
        for house in House::ALL {
            let mut digits: Vec<_> = house
                .positions()
                .into_iter()
                .map(|pos| solution[pos].expect("solution is full"))
                .collect();
            digits.sort_unstable();
            assert_eq!(digits, Digit::ALL.to_vec(), "house {house:?}");
        }
    }
}

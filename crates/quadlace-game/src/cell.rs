use derive_more::IsVariant;
use quadlace_core::Digit;

/// The state of a single board cell.
///
/// Given and filled cells both hold a digit; the distinction is who put it
/// there. Given cells come from the initial puzzle and are immutable under
/// the default engine policy, filled cells are player input and may be
/// replaced or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// Part of the original puzzle.
    Given(Digit),
    /// Player input.
    Filled(Digit),
    /// No digit.
    Empty,
}

impl CellState {
    /// Returns the digit held by the cell, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_digit_and_variant_queries() {
        assert_eq!(CellState::Given(Digit::D2).as_digit(), Some(Digit::D2));
        assert_eq!(CellState::Filled(Digit::D4).as_digit(), Some(Digit::D4));
        assert_eq!(CellState::Empty.as_digit(), None);

        assert!(CellState::Given(Digit::D1).is_given());
        assert!(CellState::Filled(Digit::D1).is_filled());
        assert!(CellState::Empty.is_empty());
        assert!(!CellState::Given(Digit::D1).is_empty());
    }
}

//! Puzzle digit representation.

use std::fmt::{self, Display};

/// A puzzle digit in the range 1-4.
///
/// This enum provides type-safe representation of board digits, preventing
/// invalid values at compile time. Each variant corresponds to exactly one
/// digit value.
///
/// # Examples
///
/// ```
/// use quadlace_core::Digit;
///
/// let digit = Digit::D3;
/// assert_eq!(digit.value(), 3);
///
/// // Create from a u8 value
/// let digit = Digit::from_value(2);
/// assert_eq!(digit, Digit::D2);
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     println!("{}", digit);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
}

impl Digit {
    /// Array containing all digits from 1 to 4, in order.
    pub const ALL: [Self; 4] = [Self::D1, Self::D2, Self::D3, Self::D4];

    /// Creates a digit from a u8 value in the range 1-4.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-4.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadlace_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(4), Digit::D4);
    /// ```
    ///
    /// ```should_panic
    /// use quadlace_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(5);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::try_from_value(value) {
            Some(digit) => digit,
            None => panic!("Invalid digit value: {value}"),
        }
    }

    /// Creates a digit from a u8 value, returning `None` when the value is
    /// not in the range 1-4.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadlace_core::Digit;
    ///
    /// assert_eq!(Digit::try_from_value(1), Some(Digit::D1));
    /// assert_eq!(Digit::try_from_value(0), None);
    /// assert_eq!(Digit::try_from_value(5), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-4).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

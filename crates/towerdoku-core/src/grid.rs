//! The 9×9 digit grid.

use std::{
    fmt,
    ops::Index,
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 grid of optional digits.
///
/// This is the shared representation for the live board, the solution, and
/// intermediate puzzles. Empty cells hold `None`. The type is `Copy`, so
/// accessors handing out a `DigitGrid` hand out an independent value;
/// callers can never mutate engine state through a returned grid.
///
/// Grids parse from and render to an 81-character string in row-major
/// order, with `.` (or `0`) for empty cells:
///
/// ```
/// use towerdoku_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 1);
/// assert_eq!(grid.to_string().len(), 81);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at the given position, or `None` if the cell is
    /// empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at the given position.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitGrid(\"{self}\")")
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseGridError::BadLength { len });
        }
        let mut grid = Self::new();
        for (i, character) in s.chars().enumerate() {
            let value = match character {
                '.' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = character as u8 - b'0';
                    Digit::new(value)
                }
                _ => return Err(ParseGridError::BadCharacter { character, index: i }),
            };
            grid.set(Position::from_index(i), value);
        }
        Ok(grid)
    }
}

/// Error returned when parsing a [`DigitGrid`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string is not exactly 81 characters long.
    #[display("grid string must be 81 characters, got {len}")]
    BadLength {
        /// Observed character count.
        len: usize,
    },
    /// The string contains a character other than `.`, `0`, or a digit.
    #[display("invalid grid character {character:?} at index {index}")]
    BadCharacter {
        /// The offending character.
        character: char,
        /// Row-major index of the offending character.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_round_trip() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(2, 6);

        assert_eq!(grid.get(pos), None);
        grid.set(pos, Some(Digit::D4));
        assert_eq!(grid.get(pos), Some(Digit::D4));
        assert_eq!(grid[pos], Some(Digit::D4));

        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_parse_accepts_dots_and_zeros() {
        let dotted: DigitGrid = format!("12{}", ".".repeat(79)).parse().unwrap();
        let zeroed: DigitGrid = format!("12{}", "0".repeat(79)).parse().unwrap();
        assert_eq!(dotted, zeroed);
        assert_eq!(dotted.get(Position::new(0, 1)), Some(Digit::D2));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseGridError::BadLength { len: 3 })
        );
        assert_eq!(
            format!("x{}", ".".repeat(80)).parse::<DigitGrid>(),
            Err(ParseGridError::BadCharacter {
                character: 'x',
                index: 0
            })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let text = format!("91{}8", ".".repeat(78));
        let grid: DigitGrid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_counts() {
        let grid: DigitGrid = format!("123{}", ".".repeat(78)).parse().unwrap();
        assert_eq!(grid.filled_count(), 3);
        assert!(!grid.is_full());
    }

    proptest::proptest! {
        #[test]
        fn prop_display_parse_round_trip(
            cells in proptest::collection::vec(proptest::option::of(1u8..=9), 81),
        ) {
            let mut grid = DigitGrid::new();
            for (i, value) in cells.into_iter().enumerate() {
                grid.set(Position::from_index(i), value.and_then(Digit::new));
            }
            proptest::prop_assert_eq!(grid.to_string().parse::<DigitGrid>(), Ok(grid));
        }
    }
}

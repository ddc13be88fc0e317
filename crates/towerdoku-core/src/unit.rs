//! Sudoku constraint groups.

use std::fmt::{self, Display};

use crate::Position;

/// A sudoku unit: a row, a column, or a 3×3 box.
///
/// Completion tracking and validity checks iterate these 27 groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A row identified by its row coordinate (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column coordinate (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to
    /// bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl Unit {
    /// All rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { row: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { row: i as u8 };
            i += 1;
        }
        rows
    };

    /// All columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { col: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { col: i as u8 };
            i += 1;
        }
        columns
    };

    /// All boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// All 27 units in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the nine positions contained in this unit.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        for i in 0u8..9 {
            positions[usize::from(i)] = match self {
                Self::Row { row } => Position::new(row, i),
                Self::Column { col } => Position::new(i, col),
                Self::Box { index } => Position::from_box(index, i),
            };
        }
        positions
    }

    /// Returns `true` if the unit contains the given position.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Self::Row { row } => pos.row() == row,
            Self::Column { col } => pos.col() == col,
            Self::Box { index } => pos.box_index() == index,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { row } => write!(f, "row {row}"),
            Self::Column { col } => write!(f, "column {col}"),
            Self::Box { index } => write!(f, "box {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_27_distinct_units() {
        assert_eq!(Unit::ALL.len(), 27);
        for (i, unit) in Unit::ALL.iter().enumerate() {
            assert!(!Unit::ALL[..i].contains(unit));
        }
    }

    #[test]
    fn test_positions_belong_to_their_unit() {
        for unit in Unit::ALL {
            for pos in unit.positions() {
                assert!(unit.contains(pos), "{unit} should contain {pos}");
            }
        }
    }

    #[test]
    fn test_box_positions() {
        let positions = Unit::Box { index: 4 }.positions();
        assert_eq!(positions[0], Position::new(3, 3));
        assert_eq!(positions[8], Position::new(5, 5));
    }

    #[test]
    fn test_every_cell_is_in_three_units() {
        for pos in Position::ALL {
            let count = Unit::ALL.iter().filter(|unit| unit.contains(pos)).count();
            assert_eq!(count, 3);
        }
    }
}

//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// Rows and columns are both in the range 0-8; row 0 is the top of the
/// board and column 0 is the left edge, where enemy paths enter.
///
/// # Examples
///
/// ```
/// use towerdoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.index(), 4 * 9 + 7);
/// assert_eq!(pos.to_string(), "r4c7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8. Use
    /// [`Position::try_new`] for untrusted input.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Creates a position, returning `None` for out-of-range coordinates.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 9 && col < 9 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Creates a position from a row-major index in the range 0-80.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81, "position index out of range");
        #[expect(clippy::cast_possible_truncation)]
        let row = (index / 9) as u8;
        #[expect(clippy::cast_possible_truncation)]
        let col = (index % 9) as u8;
        Self { row, col }
    }

    /// Creates a position from a box index (0-8) and a cell index within
    /// that box (0-8), both counted left to right, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if either index is 9 or greater.
    #[must_use]
    pub const fn from_box(box_index: u8, cell_index: u8) -> Self {
        assert!(box_index < 9 && cell_index < 9, "box index out of range");
        Self {
            row: (box_index / 3) * 3 + cell_index / 3,
            col: (box_index % 3) * 3 + cell_index % 3,
        }
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the position one row up, if any.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.row > 0 {
            Some(Self {
                row: self.row - 1,
                col: self.col,
            })
        } else {
            None
        }
    }

    /// Returns the position one row down, if any.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.row < 8 {
            Some(Self {
                row: self.row + 1,
                col: self.col,
            })
        } else {
            None
        }
    }

    /// Returns the position one column to the left, if any.
    ///
    /// Paths never move left; this exists for neighborhood queries.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.col > 0 {
            Some(Self {
                row: self.row,
                col: self.col - 1,
            })
        } else {
            None
        }
    }

    /// Returns the position one column to the right, if any.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.col < 8 {
            Some(Self {
                row: self.row,
                col: self.col + 1,
            })
        } else {
            None
        }
    }

    /// Returns an iterator over the 20 sudoku peers of this position: the
    /// other cells sharing its row, column, or 3×3 box.
    pub fn peers(self) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |peer| {
            *peer != self
                && (peer.row == self.row
                    || peer.col == self.col
                    || peer.box_index() == self.box_index())
        })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_board_in_row_major_order() {
        assert_eq!(Position::ALL.len(), 81);
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(*pos, Position::from_index(i));
        }
    }

    #[test]
    fn test_try_new_bounds() {
        assert_eq!(Position::try_new(0, 0), Some(Position::new(0, 0)));
        assert_eq!(Position::try_new(8, 8), Some(Position::new(8, 8)));
        assert_eq!(Position::try_new(9, 0), None);
        assert_eq!(Position::try_new(0, 9), None);
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(1, 4).box_index(), 1);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 8).box_index(), 8);
        assert_eq!(Position::from_box(4, 0), Position::new(3, 3));
        assert_eq!(Position::from_box(8, 8), Position::new(8, 8));
    }

    #[test]
    fn test_moves_respect_edges() {
        let top_left = Position::new(0, 0);
        assert_eq!(top_left.up(), None);
        assert_eq!(top_left.left(), None);
        assert_eq!(top_left.down(), Some(Position::new(1, 0)));
        assert_eq!(top_left.right(), Some(Position::new(0, 1)));

        let bottom_right = Position::new(8, 8);
        assert_eq!(bottom_right.down(), None);
        assert_eq!(bottom_right.right(), None);
    }

    #[test]
    fn test_peers_count_and_exclusion() {
        let pos = Position::new(4, 4);
        let peers: Vec<_> = pos.peers().collect();
        assert_eq!(peers.len(), 20);
        assert!(!peers.contains(&pos));
        assert!(peers.contains(&Position::new(4, 0)));
        assert!(peers.contains(&Position::new(0, 4)));
        assert!(peers.contains(&Position::new(3, 3)));
        assert!(!peers.contains(&Position::new(0, 0)));
    }
}

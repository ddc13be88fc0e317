//! The enemy traversal path.

use crate::{CellSet, Position};

/// An ordered sequence of cells enemies walk, from the left edge of the
/// board to the right edge.
///
/// A non-empty path always satisfies the binding invariants of the board
/// engine: it enters in column 0, exits in column 8, each step is an up,
/// down, or right move, and no cell is visited twice. Invalid sequences
/// are rejected at construction, so holding a `Path` is proof the
/// invariants hold.
///
/// The empty path is the degenerate case used by boards without combat.
///
/// # Examples
///
/// ```
/// use towerdoku_core::{Path, Position};
///
/// let cells: Vec<_> = (0..9).map(|col| Position::new(4, col)).collect();
/// let path = Path::from_cells(cells).unwrap();
///
/// assert_eq!(path.len(), 9);
/// assert_eq!(path.start(), Some(Position::new(4, 0)));
/// assert_eq!(path.end(), Some(Position::new(4, 8)));
/// assert!(path.contains(Position::new(4, 3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    cells: Vec<Position>,
    members: CellSet,
}

impl Path {
    /// Creates the empty path.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: Vec::new(),
            members: CellSet::EMPTY,
        }
    }

    /// Creates a path from an ordered cell sequence.
    ///
    /// An empty sequence yields the empty path. A non-empty sequence must
    /// start in column 0, end in column 8, step only up, down, or right,
    /// and never revisit a cell.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`PathError`].
    pub fn from_cells(cells: Vec<Position>) -> Result<Self, PathError> {
        let Some((&first, _)) = cells.split_first() else {
            return Ok(Self::empty());
        };
        if first.col() != 0 {
            return Err(PathError::Entry { start: first });
        }
        let last = *cells.last().expect("non-empty sequence has a last cell");
        if last.col() != 8 {
            return Err(PathError::Exit { end: last });
        }

        let mut members = CellSet::EMPTY;
        members.insert(first);
        for window in cells.windows(2) {
            let (from, to) = (window[0], window[1]);
            let connected = [from.up(), from.down(), from.right()]
                .into_iter()
                .flatten()
                .any(|step| step == to);
            if !connected {
                return Err(PathError::Disconnected { from, to });
            }
            if members.contains(to) {
                return Err(PathError::Revisited { position: to });
            }
            members.insert(to);
        }

        Ok(Self { cells, members })
    }

    /// Returns the path cells in traversal order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Returns `true` if the position lies on the path.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.members.contains(pos)
    }

    /// Returns the path membership as a [`CellSet`].
    #[must_use]
    pub const fn cell_set(&self) -> CellSet {
        self.members
    }

    /// Returns the number of cells on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if this is the empty path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the entry cell (column 0), if the path is non-empty.
    #[must_use]
    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    /// Returns the exit cell (column 8), if the path is non-empty.
    #[must_use]
    pub fn end(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    /// Returns an iterator over the path cells in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Position;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Position>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}

/// Error returned when a cell sequence violates a path invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PathError {
    /// The first cell is not in column 0.
    #[display("path must enter at column 0, starts at {start}")]
    Entry {
        /// The offending first cell.
        start: Position,
    },
    /// The last cell is not in column 8.
    #[display("path must exit at column 8, ends at {end}")]
    Exit {
        /// The offending last cell.
        end: Position,
    },
    /// Two consecutive cells are not joined by an up, down, or right move.
    #[display("path step {from} -> {to} is not an up, down, or right move")]
    Disconnected {
        /// Cell the step starts from.
        from: Position,
        /// Cell the step lands on.
        to: Position,
    },
    /// A cell appears more than once.
    #[display("path revisits {position}")]
    Revisited {
        /// The revisited cell.
        position: Position,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_row(row: u8) -> Vec<Position> {
        (0..9).map(|col| Position::new(row, col)).collect()
    }

    #[test]
    fn test_empty_path() {
        let path = Path::empty();
        assert!(path.is_empty());
        assert_eq!(path.start(), None);
        assert_eq!(path.end(), None);
        assert_eq!(Path::from_cells(Vec::new()), Ok(Path::empty()));
    }

    #[test]
    fn test_straight_row_is_valid() {
        let path = Path::from_cells(straight_row(0)).unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.cell_set().len(), 9);
    }

    #[test]
    fn test_zigzag_is_valid() {
        let cells = vec![
            Position::new(3, 0),
            Position::new(2, 0),
            Position::new(2, 1),
            Position::new(3, 1),
            Position::new(3, 2),
            Position::new(3, 3),
            Position::new(3, 4),
            Position::new(3, 5),
            Position::new(3, 6),
            Position::new(3, 7),
            Position::new(3, 8),
            Position::new(4, 8),
        ];
        let path = Path::from_cells(cells).unwrap();
        assert_eq!(path.start(), Some(Position::new(3, 0)));
        assert_eq!(path.end(), Some(Position::new(4, 8)));
    }

    #[test]
    fn test_rejects_bad_entry_and_exit() {
        let mut cells = straight_row(1);
        cells.remove(0);
        assert_eq!(
            Path::from_cells(cells),
            Err(PathError::Entry {
                start: Position::new(1, 1)
            })
        );

        let mut cells = straight_row(1);
        cells.pop();
        assert_eq!(
            Path::from_cells(cells),
            Err(PathError::Exit {
                end: Position::new(1, 7)
            })
        );
    }

    #[test]
    fn test_rejects_left_and_diagonal_moves() {
        // Left move hidden in the middle
        let cells = vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 0),
        ];
        assert!(matches!(
            Path::from_cells(cells),
            Err(PathError::Disconnected { .. }) | Err(PathError::Revisited { .. })
        ));

        // Diagonal step
        let cells = vec![Position::new(0, 0), Position::new(1, 1)];
        assert_eq!(
            Path::from_cells(cells),
            Err(PathError::Disconnected {
                from: Position::new(0, 0),
                to: Position::new(1, 1)
            })
        );
    }

    #[test]
    fn test_rejects_revisit() {
        let cells = vec![
            Position::new(1, 0),
            Position::new(0, 0),
            Position::new(1, 0),
        ];
        assert_eq!(
            Path::from_cells(cells),
            Err(PathError::Revisited {
                position: Position::new(1, 0)
            })
        );
    }
}

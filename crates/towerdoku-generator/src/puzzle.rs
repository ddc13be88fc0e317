//! Puzzle building: the fixed/hidden partition.

use rand::{Rng, seq::SliceRandom as _};
use towerdoku_core::{CellSet, DigitGrid, Path, Position};

/// Puzzle difficulty, mapping to the number of revealed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum Difficulty {
    /// 40 revealed cells.
    #[display("easy")]
    Easy,
    /// 30 revealed cells.
    #[default]
    #[display("medium")]
    Medium,
    /// 25 revealed cells.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of cells revealed at this difficulty.
    #[must_use]
    pub const fn reveal_count(self) -> usize {
        match self {
            Self::Easy => 40,
            Self::Medium => 30,
            Self::Hard => 25,
        }
    }
}

/// Builds a playable puzzle from a solution and a path.
///
/// Path cells are voided unconditionally: they are never part of the
/// sudoku presentation, whatever the reveal budget. The remaining cells
/// are visited in a shuffled order: the first `reveal_count` keep their
/// solution value and are marked fixed, the rest are hidden.
///
/// Returns the puzzle grid (revealed values only) and the fixed-cell
/// mask. With fewer than `reveal_count` non-path cells available, every
/// non-path cell ends up fixed.
pub fn build_puzzle<R: Rng + ?Sized>(
    solution: &DigitGrid,
    path: &Path,
    reveal_count: usize,
    rng: &mut R,
) -> (DigitGrid, CellSet) {
    let mut puzzle = *solution;
    let mut fixed = CellSet::EMPTY;

    for pos in path {
        puzzle.set(pos, None);
    }

    let mut order = Position::ALL;
    order.shuffle(rng);

    let mut remaining = reveal_count;
    for pos in order {
        if path.contains(pos) {
            continue;
        }
        if remaining > 0 {
            fixed.insert(pos);
            remaining -= 1;
        } else {
            puzzle.set(pos, None);
        }
    }

    (puzzle, fixed)
}

//! Complete solution generation.

use rand::{Rng, seq::SliceRandom as _};
use towerdoku_core::{Digit, DigitGrid, Position};

/// Generates one complete, randomized, valid sudoku solution.
///
/// The three diagonal 3×3 boxes share no row, column, or box constraints
/// with each other, so each is seeded with an independently shuffled
/// permutation of 1-9 without any conflict being possible. Backtracking
/// then completes the rest of the grid; because the seed boxes are random,
/// the completion is randomized as well.
///
/// # Panics
///
/// Panics if the backtracking completion fails. A valid completion exists
/// for every diagonal seeding, so a failure here is a defect in the
/// solver, not a runtime condition to recover from.
#[must_use]
pub fn generate_solution<R: Rng + ?Sized>(rng: &mut R) -> DigitGrid {
    let mut grid = DigitGrid::new();
    for box_index in [0, 4, 8] {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        for (cell_index, digit) in (0_u8..9).zip(digits) {
            grid.set(Position::from_box(box_index, cell_index), Some(digit));
        }
    }

    let solved = towerdoku_solver::solve(&mut grid);
    assert!(solved, "diagonally seeded grid must always complete");
    grid
}

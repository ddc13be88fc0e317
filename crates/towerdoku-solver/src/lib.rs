//! Backtracking constraint solver for towerdoku boards.
//!
//! The solver is used in two roles: completing a partially seeded grid
//! into a full solution during generation, and verifying that a built
//! puzzle's hidden cells still admit a consistent assignment (path cells
//! excluded from the search).
//!
//! Every function here is pure in its failure behavior: an unsolvable
//! input yields `false`, never an error or a panic. Retrying is the
//! caller's responsibility.
//!
//! # Examples
//!
//! ```
//! use towerdoku_core::DigitGrid;
//!
//! let mut grid = DigitGrid::new();
//! assert!(towerdoku_solver::solve(&mut grid));
//! assert!(grid.is_full());
//! assert!(towerdoku_solver::is_valid_solution(&grid));
//! ```

use tinyvec::ArrayVec;
use towerdoku_core::{CellSet, Digit, DigitGrid, DigitSet, Position, Unit};

/// Returns `true` if placing `digit` at `pos` would not conflict with any
/// row, column, or box peer.
///
/// The cell itself is excluded from the check, so a digit already sitting
/// in the cell is considered valid for that cell.
#[must_use]
pub fn is_valid_placement(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    pos.peers().all(|peer| grid.get(peer) != Some(digit))
}

/// Returns every digit that could legally be placed at `pos`.
#[must_use]
pub fn candidates(grid: &DigitGrid, pos: Position) -> DigitSet {
    Digit::ALL
        .into_iter()
        .filter(|&digit| is_valid_placement(grid, pos, digit))
        .collect()
}

/// Solves the grid in place by backtracking.
///
/// Empty cells are filled in row-major order, trying digits in increasing
/// order and undoing on dead ends. Returns `true` if a complete solution
/// was found (the grid is then fully filled); on `false` every attempted
/// cell has been reset to empty.
pub fn solve(grid: &mut DigitGrid) -> bool {
    solve_excluding(grid, &CellSet::EMPTY)
}

/// Solves the grid in place, leaving cells in `excluded` untouched.
///
/// Only empty cells outside `excluded` participate in the search; current
/// non-empty cells act as fixed context. Returns `true` if a consistent
/// assignment was found for exactly that cell subset.
pub fn solve_excluding(grid: &mut DigitGrid, excluded: &CellSet) -> bool {
    let mut open: ArrayVec<[Position; 81]> = ArrayVec::default();
    for pos in Position::ALL {
        if grid.get(pos).is_none() && !excluded.contains(pos) {
            open.push(pos);
        }
    }
    fill(grid, &open)
}

fn fill(grid: &mut DigitGrid, open: &[Position]) -> bool {
    let Some((&pos, rest)) = open.split_first() else {
        return true;
    };
    for digit in Digit::ALL {
        if is_valid_placement(grid, pos, digit) {
            grid.set(pos, Some(digit));
            if fill(grid, rest) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

/// Returns `true` if the grid's empty cells outside `excluded` admit at
/// least one consistent assignment.
///
/// The grid itself is not modified; the search runs on a copy.
#[must_use]
pub fn is_solvable(grid: &DigitGrid, excluded: &CellSet) -> bool {
    let mut scratch = *grid;
    solve_excluding(&mut scratch, excluded)
}

/// Returns `true` if every row, column, and box of the grid is exactly
/// the set of digits 1-9.
#[must_use]
pub fn is_valid_solution(grid: &DigitGrid) -> bool {
    Unit::ALL.into_iter().all(|unit| {
        let digits: DigitSet = unit
            .positions()
            .into_iter()
            .filter_map(|pos| grid.get(pos))
            .collect();
        digits == DigitSet::FULL
    })
}

//! Core data structures for the towerdoku board engine.
//!
//! This crate provides the fundamental types shared by puzzle generation,
//! solving, and live board management:
//!
//! - [`digit`]: type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: a compact set of digits for candidate tracking
//! - [`position`]: board coordinates with row-major indexing and the
//!   movement helpers the enemy path is built from
//! - [`unit`]: the three kinds of sudoku constraint groups (rows, columns,
//!   and 3×3 boxes)
//! - [`cell_set`]: a compact set over the 81-cell board universe, used for
//!   the fixed-cell mask and path membership
//! - [`grid`]: the 9×9 digit grid with a string codec for tests and tools
//! - [`path`]: the validated enemy traversal path
//!
//! # Examples
//!
//! ```
//! use towerdoku_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! assert_eq!(grid.get(Position::new(4, 4)), Some(Digit::D5));
//! assert_eq!(grid.filled_count(), 1);
//! ```

pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod path;
pub mod position;
pub mod unit;

// Re-export commonly used types
pub use self::{
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    path::{Path, PathError},
    position::Position,
    unit::Unit,
};

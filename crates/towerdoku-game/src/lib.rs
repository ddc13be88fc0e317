//! Live board state management for the towerdoku engine.
//!
//! [`BoardState`] is the boundary every other subsystem talks to: it owns
//! the live grid, the solution, the fixed-cell mask, and the enemy path,
//! accepts tower placements through [`BoardState::place_digit`], tracks
//! unit completion, and reports state transitions as [`BoardEvent`]s for
//! the rendering/combat/scoring shells to consume.
//!
//! Placement follows the game's accept-but-flag contract: a rule-violating
//! digit still lands on the board, and the violation is reported rather
//! than rejected. Downstream combat logic depends on illegal towers
//! existing so it can later remove and refund them.
//!
//! # Examples
//!
//! ```
//! use towerdoku_game::BoardState;
//! use towerdoku_generator::{BoardStyle, Difficulty};
//!
//! let board = BoardState::new(Difficulty::Easy, BoardStyle::Defense);
//!
//! assert!(!board.is_complete());
//! assert_eq!(board.fixed_cells().len(), Difficulty::Easy.reveal_count());
//! assert!(!board.path_positions().is_empty());
//! ```

pub mod board;
pub mod completion;
pub mod event;

pub use self::{board::BoardState, completion::CompletionStatus, event::BoardEvent};

use towerdoku_core::{Digit, Position};

/// Why a mutation was rejected.
///
/// Rejections never change board state; the shell translates them into
/// user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// The cell is pre-revealed and never player-editable.
    #[display("cell is fixed and cannot be modified")]
    FixedCell,
    /// The cell lies on the enemy path and is out of play.
    #[display("cell lies on the enemy path")]
    PathCell,
    /// The cell already holds the placed digit.
    #[display("cell already holds that digit")]
    UnchangedValue,
}

/// A cell occupancy claim from an external registry (for example, the
/// combat layer's tower list), used to reconcile the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalPlacement {
    /// The claimed cell.
    pub position: Position,
    /// The digit that should occupy the cell, or `None` for empty.
    pub digit: Option<Digit>,
}

//! Notifications emitted by the board state manager.

use towerdoku_core::{Digit, Position, Unit};

/// A state transition reported by [`BoardState`](crate::BoardState).
///
/// Events accumulate on the board and are drained by the shell with
/// [`BoardState::take_events`](crate::BoardState::take_events). They are
/// fire-and-forget from the engine's perspective: no return value is
/// expected from any consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// A puzzle was generated and committed as the live board.
    Generated,
    /// The enemy path changed; emitted alongside [`BoardEvent::Generated`].
    PathChanged,
    /// A cell changed value.
    CellChanged {
        /// The changed cell.
        position: Position,
        /// The new content of the cell, `None` after a clear.
        digit: Option<Digit>,
        /// Whether the new value was legal against the live board at
        /// placement time. Rule-violating placements still land on the
        /// board; this flag is how the violation is reported.
        rule_valid: bool,
    },
    /// A unit newly became complete.
    UnitCompleted {
        /// The completed unit.
        unit: Unit,
        /// `true` if at least one of the unit's filled cells is player
        /// content rather than pre-revealed; only such completions are
        /// eligible for bonuses.
        player_contributed: bool,
    },
    /// Every non-path cell now matches the solution.
    PuzzleComplete,
}

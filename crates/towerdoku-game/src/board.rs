//! The live board state manager.

use std::time::{Duration, Instant};

use towerdoku_core::{CellSet, Digit, DigitGrid, DigitSet, Path, Position, Unit};
use towerdoku_generator::{BoardGenerator, BoardSeed, BoardStyle, Difficulty, GeneratedBoard};

use crate::{BoardEvent, CompletionStatus, ExternalPlacement, PlaceError};

/// Minimum interval between effective completion checks; bursts of
/// mutations collapse into a single check.
const COMPLETION_CHECK_INTERVAL: Duration = Duration::from_millis(200);

/// The stateful core of a towerdoku game.
///
/// A `BoardState` owns one committed puzzle: the live grid, the solution,
/// the fixed-cell mask, the enemy path, and the completion-tracking sets.
/// All mutation goes through [`place_digit`](Self::place_digit),
/// [`clear_cell`](Self::clear_cell), and
/// [`fix_board_discrepancies`](Self::fix_board_discrepancies); all reads
/// go through accessors that hand out independent copies, so no caller
/// can mutate engine state through a returned value.
///
/// Instances are self-contained (there is no process-wide board), so
/// several can coexist, which tests rely on.
///
/// # Examples
///
/// ```
/// use towerdoku_game::BoardState;
/// use towerdoku_generator::{BoardStyle, Difficulty};
///
/// let mut board = BoardState::new(Difficulty::Easy, BoardStyle::Defense);
///
/// // Find a playable cell and place its correct digit
/// let pos = towerdoku_core::Position::ALL
///     .into_iter()
///     .find(|&pos| !board.is_fixed(pos) && !board.is_path(pos))
///     .expect("board has playable cells");
/// let digit = board.solution().get(pos).expect("solution is complete");
///
/// assert_eq!(board.place_digit(pos, digit), Ok(true));
/// assert_eq!(board.board().get(pos), Some(digit));
/// ```
#[derive(Debug, Clone)]
pub struct BoardState {
    board: DigitGrid,
    solution: DigitGrid,
    fixed: CellSet,
    path: Path,
    seed: BoardSeed,
    difficulty: Difficulty,
    style: BoardStyle,
    completed: CompletionStatus,
    events: Vec<BoardEvent>,
    last_completion_check: Option<Instant>,
    completion_check_interval: Duration,
}

impl BoardState {
    /// Generates and commits a new puzzle with the default generator.
    #[must_use]
    pub fn new(difficulty: Difficulty, style: BoardStyle) -> Self {
        Self::with_generator(&BoardGenerator::new(), difficulty, style)
    }

    /// Generates and commits a new puzzle with the given generator.
    #[must_use]
    pub fn with_generator(
        generator: &BoardGenerator,
        difficulty: Difficulty,
        style: BoardStyle,
    ) -> Self {
        Self::from_generated(generator.generate(difficulty, style))
    }

    /// Commits an already generated board as the live state.
    #[must_use]
    pub fn from_generated(generated: GeneratedBoard) -> Self {
        let mut state = Self {
            board: DigitGrid::new(),
            solution: DigitGrid::new(),
            fixed: CellSet::EMPTY,
            path: Path::empty(),
            seed: generated.seed,
            difficulty: generated.difficulty,
            style: generated.style,
            completed: CompletionStatus::default(),
            events: Vec::new(),
            last_completion_check: None,
            completion_check_interval: COMPLETION_CHECK_INTERVAL,
        };
        state.install(generated);
        state
    }

    /// Discards the live puzzle and commits a freshly generated one.
    pub fn regenerate(&mut self, difficulty: Difficulty, style: BoardStyle) {
        self.regenerate_with(&BoardGenerator::new(), difficulty, style);
    }

    /// Discards the live puzzle and commits one from the given generator.
    pub fn regenerate_with(
        &mut self,
        generator: &BoardGenerator,
        difficulty: Difficulty,
        style: BoardStyle,
    ) {
        self.install(generator.generate(difficulty, style));
    }

    fn install(&mut self, generated: GeneratedBoard) {
        let GeneratedBoard {
            board,
            solution,
            fixed,
            path,
            seed,
            difficulty,
            style,
        } = generated;
        self.board = board;
        self.solution = solution;
        self.fixed = fixed;
        self.path = path;
        self.seed = seed;
        self.difficulty = difficulty;
        self.style = style;
        self.completed = CompletionStatus::default();
        self.last_completion_check = None;
        self.events.push(BoardEvent::Generated);
        self.events.push(BoardEvent::PathChanged);
        self.run_completion_check();
    }

    /// Returns a copy of the live grid.
    #[must_use]
    pub fn board(&self) -> DigitGrid {
        self.board
    }

    /// Returns a copy of the solution grid.
    ///
    /// The solution exists for correctness checks and score computation in
    /// the shell; it is never part of the playable presentation.
    #[must_use]
    pub fn solution(&self) -> DigitGrid {
        self.solution
    }

    /// Returns a copy of the fixed-cell mask.
    #[must_use]
    pub fn fixed_cells(&self) -> CellSet {
        self.fixed
    }

    /// Returns the path membership set (O(1) lookups).
    #[must_use]
    pub fn path_cells(&self) -> CellSet {
        self.path.cell_set()
    }

    /// Returns the path cells in traversal order.
    #[must_use]
    pub fn path_positions(&self) -> &[Position] {
        self.path.cells()
    }

    /// Returns the enemy path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the seed the live puzzle was generated from.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
    }

    /// Returns the live puzzle's difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the live puzzle's style.
    #[must_use]
    pub fn style(&self) -> BoardStyle {
        self.style
    }

    /// Returns `true` if the cell is pre-revealed and immutable.
    #[must_use]
    pub fn is_fixed(&self, pos: Position) -> bool {
        self.fixed.contains(pos)
    }

    /// Returns `true` if the cell lies on the enemy path.
    #[must_use]
    pub fn is_path(&self, pos: Position) -> bool {
        self.path.contains(pos)
    }

    /// Returns `true` if placing `digit` at `pos` would be legal against
    /// the live board: no row, column, or box peer already holds it.
    ///
    /// This checks sudoku legality, not correctness; the solution is not
    /// consulted.
    #[must_use]
    pub fn is_valid_move(&self, pos: Position, digit: Digit) -> bool {
        pos.peers().all(|peer| self.board.get(peer) != Some(digit))
    }

    /// Returns the digits that could legally be placed at `pos`.
    ///
    /// Fixed and path cells have no possible values.
    #[must_use]
    pub fn possible_values(&self, pos: Position) -> DigitSet {
        if self.is_fixed(pos) || self.is_path(pos) {
            return DigitSet::EMPTY;
        }
        Digit::ALL
            .into_iter()
            .filter(|&digit| self.is_valid_move(pos, digit))
            .collect()
    }

    /// Places a digit on the board.
    ///
    /// The placement is accepted even when it violates sudoku rules; the
    /// returned flag (and the emitted [`BoardEvent::CellChanged`]) reports
    /// whether it was legal at placement time. Completion detection runs
    /// after the change, and [`BoardEvent::PuzzleComplete`] fires if the
    /// board now matches the solution everywhere outside the path.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaceError`], with no state change, when the cell is
    /// fixed, lies on the path, or already holds `digit`.
    pub fn place_digit(&mut self, pos: Position, digit: Digit) -> Result<bool, PlaceError> {
        self.check_mutable(pos)?;
        if self.board.get(pos) == Some(digit) {
            return Err(PlaceError::UnchangedValue);
        }

        let rule_valid = self.is_valid_move(pos, digit);
        self.board.set(pos, Some(digit));
        self.events.push(BoardEvent::CellChanged {
            position: pos,
            digit: Some(digit),
            rule_valid,
        });

        self.check_unit_completion();
        if self.is_complete() {
            self.events.push(BoardEvent::PuzzleComplete);
        }
        Ok(rule_valid)
    }

    /// Clears a cell.
    ///
    /// Clearing an already empty cell is permitted and leaves the board
    /// unchanged in content; the cell-change signal still fires.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaceError`], with no state change, when the cell is
    /// fixed or lies on the path.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), PlaceError> {
        self.check_mutable(pos)?;

        self.board.set(pos, None);
        self.events.push(BoardEvent::CellChanged {
            position: pos,
            digit: None,
            rule_valid: true,
        });
        self.check_unit_completion();
        Ok(())
    }

    fn check_mutable(&self, pos: Position) -> Result<(), PlaceError> {
        if self.is_fixed(pos) {
            return Err(PlaceError::FixedCell);
        }
        if self.is_path(pos) {
            return Err(PlaceError::PathCell);
        }
        Ok(())
    }

    /// Overwrites the board to match an external placement registry.
    ///
    /// The live grid and the shell's tower registry are maintained
    /// separately and drift under combat effects; this reconciles them.
    /// Claims on fixed or path cells are ignored. Returns the number of
    /// cells that actually changed; completion detection re-runs when any
    /// did.
    pub fn fix_board_discrepancies(&mut self, placements: &[ExternalPlacement]) -> usize {
        let mut fixed_count = 0;
        for placement in placements {
            let pos = placement.position;
            if self.is_fixed(pos) || self.is_path(pos) {
                continue;
            }
            if self.board.get(pos) == placement.digit {
                continue;
            }
            let rule_valid = match placement.digit {
                Some(digit) => self.is_valid_move(pos, digit),
                None => true,
            };
            self.board.set(pos, placement.digit);
            self.events.push(BoardEvent::CellChanged {
                position: pos,
                digit: placement.digit,
                rule_valid,
            });
            fixed_count += 1;
        }
        if fixed_count > 0 {
            self.run_completion_check();
        }
        fixed_count
    }

    /// Re-derives the unit completion sets from the live board.
    ///
    /// Checks are rate-limited: calls landing within the configured
    /// interval of the previous effective check are dropped, collapsing a
    /// burst of mutations into one check. Newly completed units emit
    /// [`BoardEvent::UnitCompleted`] exactly once per transition.
    pub fn check_unit_completion(&mut self) {
        if let Some(last) = self.last_completion_check
            && last.elapsed() < self.completion_check_interval
        {
            return;
        }
        self.last_completion_check = Some(Instant::now());
        self.run_completion_check();
    }

    /// Sets the minimum interval between effective completion checks.
    ///
    /// Tests use [`Duration::ZERO`] to make every check effective.
    pub fn set_completion_check_interval(&mut self, interval: Duration) {
        self.completion_check_interval = interval;
    }

    fn run_completion_check(&mut self) {
        for unit in Unit::ALL {
            let mut required = 0_usize;
            let mut filled = 0_usize;
            let mut digits = DigitSet::EMPTY;
            let mut player_contributed = false;
            for pos in unit.positions() {
                if self.is_path(pos) {
                    continue;
                }
                required += 1;
                if let Some(digit) = self.board.get(pos) {
                    filled += 1;
                    digits.insert(digit);
                    if !self.is_fixed(pos) {
                        player_contributed = true;
                    }
                }
            }

            // Complete: all non-path cells filled, values pairwise distinct
            if filled == required && digits.len() == required {
                if self.completed.insert(unit) {
                    self.events.push(BoardEvent::UnitCompleted {
                        unit,
                        player_contributed,
                    });
                }
            } else {
                self.completed.remove(unit);
            }
        }
    }

    /// Returns the currently completed units.
    #[must_use]
    pub fn completion_status(&self) -> CompletionStatus {
        self.completed
    }

    /// Returns `true` if every non-path cell holds its solution value.
    ///
    /// Strictly stronger than unit completion, which only requires local
    /// distinctness: a full board with a transposed pair is locally clean
    /// in some units yet not complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Position::ALL
            .into_iter()
            .filter(|&pos| !self.is_path(pos))
            .all(|pos| self.board.get(pos) == self.solution.get(pos))
    }

    /// Returns the events accumulated since the last drain.
    #[must_use]
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    /// Drains and returns the accumulated events.
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }
}

//! The generation loop: retry, validate, fall back.

use towerdoku_core::{CellSet, DigitGrid, Path, Position};

use crate::{
    BoardSeed, Difficulty,
    path_gen::{PathConfig, PathGenerator},
    puzzle::build_puzzle,
    solution::generate_solution,
};

/// Whether a board carries an enemy path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display, derive_more::IsVariant)]
pub enum BoardStyle {
    /// Tower-defense board: a path is carved and kept out of play.
    #[default]
    #[display("defense")]
    Defense,
    /// Pure sudoku board with no path.
    #[display("basic")]
    Basic,
}

/// A committed board: solution, reveal partition, and path, produced
/// together and treated as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The playable grid: revealed values only, everything else empty.
    pub board: DigitGrid,
    /// The complete solution the board was built from.
    pub solution: DigitGrid,
    /// Cells that are revealed and never player-editable.
    pub fixed: CellSet,
    /// The enemy path; empty for [`BoardStyle::Basic`] boards.
    pub path: Path,
    /// Seed the board was generated from.
    pub seed: BoardSeed,
    /// Difficulty the reveal count was taken from.
    pub difficulty: Difficulty,
    /// Style the board was generated for.
    pub style: BoardStyle,
}

/// Configuration for the generation loop.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Attempts before the emergency fallback engages.
    pub max_attempts: usize,
    /// Reveal count for the fallback board; generous so the fallback is
    /// trivially playable.
    pub fallback_reveal_count: usize,
    /// Heuristic weights for path carving.
    pub path: PathConfig,
    /// Cells the path generator routes around.
    pub points_of_interest: CellSet,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            fallback_reveal_count: 60,
            path: PathConfig::default(),
            points_of_interest: CellSet::EMPTY,
        }
    }
}

/// Generates committed boards, retrying until a solvable one is found.
///
/// Generation is probabilistic and must never leave the game without a
/// playable board: after `max_attempts` failed rounds the generator
/// commits an emergency fallback (a fresh solution, a straight top-row
/// path, and a generous reveal count) that is solvable by construction.
///
/// # Examples
///
/// ```
/// use towerdoku_generator::{BoardGenerator, BoardStyle, Difficulty};
///
/// let board = BoardGenerator::new().generate(Difficulty::Medium, BoardStyle::Basic);
/// assert!(board.path.is_empty());
/// assert_eq!(board.fixed.len(), Difficulty::Medium.reveal_count());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoardGenerator {
    config: GeneratorConfig,
}

// Shortest possible column-0-to-column-8 span.
const MIN_PATH_LENGTH: usize = 9;

impl BoardGenerator {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given configuration.
    #[must_use]
    pub const fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a board from fresh entropy.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty, style: BoardStyle) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::from_entropy(), difficulty, style)
    }

    /// Generates a board reproducibly from the given seed.
    #[must_use]
    pub fn generate_with_seed(
        &self,
        seed: BoardSeed,
        difficulty: Difficulty,
        style: BoardStyle,
    ) -> GeneratedBoard {
        for attempt in 0..self.config.max_attempts {
            let mut rng = seed.stage_rng(&format!("attempt-{attempt}"));

            let path = match style {
                BoardStyle::Defense => {
                    // Shrink the length budget on later attempts; shorter,
                    // straighter paths fail less often.
                    let max_length = self
                        .config
                        .path
                        .max_length
                        .saturating_sub(attempt)
                        .max(MIN_PATH_LENGTH);
                    let path_config = PathConfig {
                        max_length,
                        ..self.config.path
                    };
                    let generator = PathGenerator::new(path_config)
                        .with_points_of_interest(self.config.points_of_interest);
                    match generator.generate(&mut rng) {
                        Ok(path) => path,
                        Err(err) => {
                            log::debug!("attempt {attempt}: degraded path rejected: {err}");
                            continue;
                        }
                    }
                }
                BoardStyle::Basic => Path::empty(),
            };

            let solution = generate_solution(&mut rng);
            let (board, fixed) =
                build_puzzle(&solution, &path, difficulty.reveal_count(), &mut rng);

            if towerdoku_solver::is_solvable(&board, &path.cell_set()) {
                return GeneratedBoard {
                    board,
                    solution,
                    fixed,
                    path,
                    seed,
                    difficulty,
                    style,
                };
            }
            log::debug!("attempt {attempt}: built puzzle failed the solvability check");
        }

        log::warn!(
            "board generation exhausted {} attempts, committing fallback board",
            self.config.max_attempts
        );
        self.fallback(seed, difficulty, style)
    }

    /// Emergency generation: deterministic layout, solvable by
    /// construction.
    fn fallback(
        &self,
        seed: BoardSeed,
        difficulty: Difficulty,
        style: BoardStyle,
    ) -> GeneratedBoard {
        let mut rng = seed.stage_rng("fallback");
        let solution = generate_solution(&mut rng);
        let path = match style {
            BoardStyle::Defense => {
                Path::from_cells((0..9).map(|col| Position::new(0, col)).collect())
                    .expect("straight top row is a valid path")
            }
            BoardStyle::Basic => Path::empty(),
        };
        let (board, fixed) =
            build_puzzle(&solution, &path, self.config.fallback_reveal_count, &mut rng);
        debug_assert!(towerdoku_solver::is_solvable(&board, &path.cell_set()));

        GeneratedBoard {
            board,
            solution,
            fixed,
            path,
            seed,
            difficulty,
            style,
        }
    }
}

//! Board generation for the towerdoku engine.
//!
//! Generation assembles a committed board state out of four steps:
//!
//! 1. [`path_gen`] carves a connected enemy path from the left edge of the
//!    board to the right edge, biased by tunable heuristics.
//! 2. [`solution`] produces a complete, randomized sudoku solution.
//! 3. [`puzzle`] partitions the non-path cells into revealed (fixed) and
//!    hidden (playable) cells according to the difficulty's reveal count.
//! 4. [`board`] loops the above with a solvability check and a bounded
//!    retry budget, falling back to an emergency deterministic board when
//!    the budget is exhausted; generation never leaves the game without a
//!    playable board.
//!
//! All randomness flows through a [`BoardSeed`], so any generated board
//! can be reproduced from its seed string.
//!
//! # Examples
//!
//! ```
//! use towerdoku_generator::{BoardGenerator, BoardStyle, Difficulty};
//!
//! let generator = BoardGenerator::new();
//! let board = generator.generate(Difficulty::Easy, BoardStyle::Defense);
//!
//! assert!(towerdoku_solver::is_valid_solution(&board.solution));
//! assert!(!board.path.is_empty());
//! ```

pub mod board;
pub mod path_gen;
pub mod puzzle;
pub mod seed;
pub mod solution;

// Re-export commonly used types
pub use self::{
    board::{BoardGenerator, BoardStyle, GeneratedBoard, GeneratorConfig},
    path_gen::{PathConfig, PathGenerator},
    puzzle::{Difficulty, build_puzzle},
    seed::{BoardSeed, ParseSeedError},
    solution::generate_solution,
};

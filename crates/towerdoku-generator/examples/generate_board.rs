//! Example demonstrating board generation.
//!
//! This example shows how to:
//! - Generate a board for a difficulty and style
//! - Reproduce a board from its seed
//! - Display the board, solution, fixed mask, and path
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Pick a difficulty and style:
//!
//! ```sh
//! cargo run --example generate_board -- --difficulty hard --style basic
//! ```
//!
//! Reproduce a previous board from its printed seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed <64-hex-chars>
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use towerdoku_core::{Position, Unit};
use towerdoku_generator::{BoardGenerator, BoardSeed, BoardStyle, Difficulty, GeneratedBoard};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    Defense,
    Basic,
}

impl From<StyleArg> for BoardStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Defense => BoardStyle::Defense,
            StyleArg::Basic => BoardStyle::Basic,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty controlling the reveal count.
    #[arg(long, value_name = "DIFFICULTY", default_value = "easy")]
    difficulty: DifficultyArg,

    /// Board style: defense carves an enemy path, basic is pure sudoku.
    #[arg(long, value_name = "STYLE", default_value = "defense")]
    style: StyleArg,

    /// Seed to reproduce a board from (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match &args.seed {
        Some(text) => match text.parse::<BoardSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        None => BoardSeed::from_entropy(),
    };

    let generator = BoardGenerator::new();
    let board = generator.generate_with_seed(seed, args.difficulty.into(), args.style.into());
    print_board(&board);
}

fn print_board(board: &GeneratedBoard) {
    println!("Seed:");
    println!("  {}", board.seed);
    println!();

    println!("Board ({} / {}):", board.difficulty, board.style);
    print_grid(|pos| {
        if board.path.contains(pos) {
            '#'
        } else {
            match board.board.get(pos) {
                Some(digit) => digit_char(digit.value()),
                None => '.',
            }
        }
    });
    println!();

    println!("Solution:");
    print_grid(|pos| match board.solution.get(pos) {
        Some(digit) => digit_char(digit.value()),
        None => '.',
    });
    println!();

    println!("Fixed cells: {}", board.fixed.len());
    println!(
        "Path ({} cells): {}",
        board.path.len(),
        board
            .path
            .iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    );
}

fn print_grid(cell: impl Fn(Position) -> char) {
    for row in Unit::ROWS {
        print!("  ");
        for pos in row.positions() {
            print!("{}", cell(pos));
        }
        println!();
    }
}

fn digit_char(value: u8) -> char {
    char::from(b'0' + value)
}

//! Transport-agnostic request and response shapes for the three puzzle
//! operations.
//!
//! Every response is a status-tagged enum, so a JSON binding produces
//! `{"status": "success", ...}` or `{"status": "error", "message": ...}`
//! without further mapping.

use log::debug;
use serde::{Deserialize, Serialize};
use tango_core::{Grid, is_valid};
use tango_generator::{Difficulty, PuzzleGenerator};
use tango_solver::Solver;

use crate::{GridDto, HintsDto};

/// A request carrying a board and its hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRequestDto {
    /// The board to operate on.
    pub grid: GridDto,
    /// The hints accompanying the board.
    #[serde(default)]
    pub hints: HintsDto,
}

/// Response to a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerateResponse {
    /// A fresh puzzle.
    Success {
        /// The starting board; filled cells are fixed.
        grid: GridDto,
        /// The hints accompanying the board.
        hints: HintsDto,
    },
    /// Generation failed or the request was malformed.
    Error {
        /// Human-readable description of the failure.
        message: String,
    },
}

/// Response to a validation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidateResponse {
    /// The board was checked.
    Success {
        /// `true` iff the board has no violations, full or not.
        is_valid: bool,
    },
    /// The request was malformed.
    Error {
        /// Human-readable description of the failure.
        message: String,
    },
}

/// Response to a solve request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SolveResponse {
    /// A completion of the request's board.
    Success {
        /// A full board satisfying every rule and hint.
        solution: GridDto,
    },
    /// The board is unsolvable or the request was malformed.
    Error {
        /// Human-readable description of the failure.
        message: String,
    },
}

/// Generates a puzzle of the named difficulty.
///
/// `difficulty` is one of `easy`, `medium`, or `hard`; anything else maps to
/// the error arm, as does generator failure.
pub fn generate_puzzle(generator: &mut PuzzleGenerator, difficulty: &str) -> GenerateResponse {
    let difficulty = match difficulty.parse::<Difficulty>() {
        Ok(difficulty) => difficulty,
        Err(err) => {
            return GenerateResponse::Error {
                message: err.to_string(),
            };
        }
    };
    match generator.generate(difficulty) {
        Ok(puzzle) => {
            debug!(
                "generate: {difficulty} puzzle with {} givens",
                puzzle.problem.filled_count(),
            );
            GenerateResponse::Success {
                grid: GridDto::from(&puzzle.problem),
                hints: HintsDto::from_hint_set(&puzzle.hints),
            }
        }
        Err(err) => GenerateResponse::Error {
            message: err.to_string(),
        },
    }
}

/// Checks a board for violations.
///
/// `is_valid` is `true` iff the board currently breaks no count, run, or
/// hint rule; emptiness and partial boards are fine. Malformed hint keys map
/// to the error arm.
#[must_use]
pub fn validate_puzzle(request: &PuzzleRequestDto) -> ValidateResponse {
    let hints = match request.hints.to_hint_set() {
        Ok(hints) => hints,
        Err(err) => {
            return ValidateResponse::Error {
                message: err.to_string(),
            };
        }
    };
    let grid = Grid::from(&request.grid);
    ValidateResponse::Success {
        is_valid: is_valid(&grid, &hints),
    }
}

/// Completes a board.
///
/// The filled cells of the request constrain the solution. An unsolvable
/// board maps to the error arm with the solver's message, distinct from a
/// malformed request.
#[must_use]
pub fn solve_puzzle(request: &PuzzleRequestDto) -> SolveResponse {
    let hints = match request.hints.to_hint_set() {
        Ok(hints) => hints,
        Err(err) => {
            return SolveResponse::Error {
                message: err.to_string(),
            };
        }
    };
    let grid = Grid::from(&request.grid);
    let solver = Solver::new();
    match solver.solve(&grid, &hints) {
        Ok(solution) => SolveResponse::Success {
            solution: GridDto::from(&solution),
        },
        Err(err) => SolveResponse::Error {
            message: err.to_string(),
        },
    }
}

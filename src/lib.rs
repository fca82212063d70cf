//! N-Queens Solver
//!
//! Enumerates every placement of N non-attacking queens on an N×N board
//! using one of four search strategies, and times the search.

pub mod board;
pub mod config;
pub mod error;
pub mod search;
pub mod solver;
pub mod utils;

pub use config::Settings;
pub use error::SolverError;
pub use search::Strategy;
pub use solver::{solve, solve_named, NQueensProblem, Solution, SolutionSet, SolveOutcome};

use anyhow::Result;

/// Solve the board size and strategy named in the settings
pub fn solve_from_settings(settings: &Settings) -> Result<SolveOutcome> {
    settings.validate()?;
    let problem = NQueensProblem::new(settings.solver.board_size, settings.solver.strategy)?;
    Ok(problem.solve())
}

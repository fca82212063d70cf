//! Solver facade, solution model and validation

pub mod problem;
pub mod solution;
pub mod validator;

pub use problem::{solve, solve_named, NQueensProblem, SolutionStatistics, SolveOutcome};
pub use solution::{Conflict, ConflictKind, Solution, SolutionSet};
pub use validator::{AgreementReport, SetValidationResult, SolutionValidator, ValidationResult};

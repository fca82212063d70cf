//! N-Queens problem definition and the timed solve entry points

use super::SolutionSet;
use crate::error::{SolverError, SolverResult};
use crate::search::{SearchStats, Strategy};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Boards above this size take minutes or more with every strategy
const LARGE_BOARD: usize = 14;
/// Breadth-first frontiers grow past a few million prefixes above this size
const LARGE_FRONTIER_BOARD: usize = 11;

/// A validated (board size, strategy) pair
///
/// Holds no search state; every call to [`NQueensProblem::solve`] works on a
/// fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NQueensProblem {
    board_size: usize,
    strategy: Strategy,
}

/// Result of one timed solve
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub board_size: usize,
    pub strategy: Strategy,
    pub solutions: SolutionSet,
    pub elapsed: Duration,
    pub stats: SearchStats,
}

/// Raw numbers for result screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionStatistics {
    pub board_size: usize,
    pub strategy: Strategy,
    pub solution_count: usize,
    pub queens_per_solution: usize,
    pub max_score: usize,
    pub elapsed_ms: f64,
    pub search: SearchStats,
}

impl NQueensProblem {
    /// Create a problem, rejecting negative board sizes
    pub fn new(board_size: i64, strategy: Strategy) -> SolverResult<Self> {
        let board_size = usize::try_from(board_size)
            .map_err(|_| SolverError::InvalidSize { size: board_size })?;

        Ok(Self { board_size, strategy })
    }

    /// Create a problem from a strategy name
    pub fn from_name(board_size: i64, strategy: &str) -> SolverResult<Self> {
        let strategy = strategy.parse::<Strategy>()?;
        Self::new(board_size, strategy)
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Enumerate every solution and time the search
    pub fn solve(&self) -> SolveOutcome {
        if self.board_size > LARGE_BOARD {
            warn!("Board size {} is very large; the search may take a long time", self.board_size);
        } else if self.strategy == Strategy::BreadthFirst && self.board_size > LARGE_FRONTIER_BOARD {
            warn!(
                "Breadth-first search on a {}x{} board keeps a very large frontier in memory",
                self.board_size, self.board_size
            );
        }

        debug!("Solving {}-queens with {}", self.board_size, self.strategy);
        let start_time = Instant::now();
        let result = self.strategy.run(self.board_size);
        let elapsed = start_time.elapsed();

        info!(
            "{} found {} solution(s) for n={} in {:.3}ms",
            self.strategy,
            result.solutions.len(),
            self.board_size,
            elapsed.as_secs_f64() * 1000.0
        );
        debug!("Search stats: {}", result.stats);

        SolveOutcome {
            board_size: self.board_size,
            strategy: self.strategy,
            solutions: result.solutions,
            elapsed,
            stats: result.stats,
        }
    }
}

impl SolveOutcome {
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    pub fn statistics(&self) -> SolutionStatistics {
        SolutionStatistics {
            board_size: self.board_size,
            strategy: self.strategy,
            solution_count: self.solutions.len(),
            queens_per_solution: self.board_size,
            max_score: self.solutions.max_score(),
            elapsed_ms: self.elapsed.as_secs_f64() * 1000.0,
            search: self.stats,
        }
    }
}

/// Solve an `n`-queens board with the given strategy
pub fn solve(n: i64, strategy: Strategy) -> SolverResult<SolveOutcome> {
    Ok(NQueensProblem::new(n, strategy)?.solve())
}

/// Solve with a strategy given by name
pub fn solve_named(n: i64, strategy: &str) -> SolverResult<SolveOutcome> {
    Ok(NQueensProblem::from_name(n, strategy)?.solve())
}

impl std::fmt::Display for SolutionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution Statistics ({}):", self.strategy)?;
        writeln!(f, "  Board size: {}x{}", self.board_size, self.board_size)?;
        writeln!(f, "  Total solutions: {}", self.solution_count)?;
        writeln!(f, "  Maximum queens placeable: {}", self.queens_per_solution)?;
        writeln!(f, "  Maximum score possible: {}", self.max_score)?;
        writeln!(f, "  Total time taken: {:.4} seconds", self.elapsed_ms / 1000.0)?;
        writeln!(f, "  Search: {}", self.search)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_COUNTS: [usize; 9] = [1, 1, 0, 0, 2, 10, 4, 40, 92];

    #[test]
    fn test_known_counts_for_every_strategy() {
        for strategy in Strategy::ALL {
            for (n, &expected) in KNOWN_COUNTS.iter().enumerate() {
                let outcome = solve(n as i64, strategy).unwrap();
                assert_eq!(outcome.solution_count(), expected, "{} with n={}", strategy, n);
            }
        }
    }

    #[test]
    fn test_strategies_agree() {
        for n in 0..8 {
            let reference = solve(n, Strategy::DepthFirst).unwrap();
            for strategy in Strategy::ALL {
                let outcome = solve(n, strategy).unwrap();
                assert!(
                    outcome.solutions.same_solutions_as(&reference.solutions),
                    "{} disagrees with depth-first for n={}",
                    strategy,
                    n
                );
            }
        }
    }

    #[test]
    fn test_every_solution_is_valid_and_unique() {
        for strategy in Strategy::ALL {
            let outcome = solve(8, strategy).unwrap();
            assert!(outcome.solutions.iter().all(|s| s.is_valid() && s.size() == 8));
            assert_eq!(outcome.solutions.duplicate_count(), 0);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        for strategy in Strategy::ALL {
            let problem = NQueensProblem::new(6, strategy).unwrap();
            let first = problem.solve();
            let second = problem.solve();
            assert_eq!(first.solutions, second.solutions);
            assert_eq!(first.stats, second.stats);
        }
    }

    #[test]
    fn test_empty_board_has_one_empty_solution() {
        for strategy in Strategy::ALL {
            let outcome = solve(0, strategy).unwrap();
            assert_eq!(outcome.solution_count(), 1);
            assert!(outcome.solutions.as_slice()[0].columns().is_empty());
        }
    }

    #[test]
    fn test_negative_size_rejected() {
        assert_eq!(
            solve(-1, Strategy::Optimized).unwrap_err(),
            SolverError::InvalidSize { size: -1 }
        );
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let err = solve_named(8, "greedy").unwrap_err();
        assert!(matches!(err, SolverError::UnknownStrategy { .. }));

        // Strategy is checked before size
        let err = solve_named(-4, "greedy").unwrap_err();
        assert!(matches!(err, SolverError::UnknownStrategy { .. }));
    }

    #[test]
    fn test_solve_named_aliases() {
        let outcome = solve_named(4, "NQueensSolver").unwrap();
        assert_eq!(outcome.strategy, Strategy::Optimized);
        assert_eq!(outcome.solution_count(), 2);
    }

    #[test]
    fn test_statistics() {
        let outcome = solve(8, Strategy::Backtracking).unwrap();
        let stats = outcome.statistics();

        assert_eq!(stats.solution_count, 92);
        assert_eq!(stats.queens_per_solution, 8);
        assert_eq!(stats.max_score, 80);
        assert!(stats.elapsed_ms >= 0.0);
        assert!(stats.to_string().contains("Maximum score possible: 80"));
    }
}

//! Backtracking with constant-time conflict checks

use super::{SearchResult, SearchStats};
use crate::board::TrackedBoard;
use crate::solver::SolutionSet;

/// Recursive backtracking over a `TrackedBoard`
///
/// Every placement marks its column and both diagonals; the guard clears them
/// once the subtree is exhausted, whether or not it produced solutions.
pub struct OptimizedSearch {
    size: usize,
    stats: SearchStats,
    solutions: SolutionSet,
}

impl OptimizedSearch {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            stats: SearchStats::default(),
            solutions: SolutionSet::new(size),
        }
    }

    pub fn run(mut self) -> SearchResult {
        let mut board = TrackedBoard::new(self.size);
        self.solve_row(&mut board);
        debug_assert!(board.tracker().is_clear());

        SearchResult {
            solutions: self.solutions,
            stats: self.stats,
        }
    }

    fn solve_row(&mut self, board: &mut TrackedBoard) {
        let depth = board.placement().depth();
        self.stats.peak_frontier = self.stats.peak_frontier.max(depth + 1);

        if board.placement().is_complete() {
            self.solutions.push(board.placement().to_solution());
            return;
        }

        for col in 0..self.size {
            self.stats.safety_checks += 1;
            if board.is_safe(col) {
                self.stats.nodes_expanded += 1;
                let mut guard = board.place(col);
                self.solve_row(&mut guard);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::BacktrackingSearch;

    #[test]
    fn test_eight_queens_count() {
        let result = OptimizedSearch::new(8).run();
        assert_eq!(result.solutions.len(), 92);
        assert_eq!(result.solutions.as_slice()[0].columns(), &[0, 4, 7, 5, 2, 6, 1, 3]);
    }

    #[test]
    fn test_same_order_as_linear_backtracking() {
        for size in 0..=7 {
            let optimized = OptimizedSearch::new(size).run();
            let linear = BacktrackingSearch::new(size).run();
            assert_eq!(optimized.solutions, linear.solutions, "size {}", size);
            assert_eq!(optimized.stats.nodes_expanded, linear.stats.nodes_expanded);
        }
    }
}

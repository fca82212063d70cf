//! Recursive backtracking with the linear safety oracle

use super::{SearchResult, SearchStats};
use crate::board::{is_safe, Placement};
use crate::solver::SolutionSet;

/// Structural recursion over rows; the placement guard undoes each queen
/// when its subtree has been explored
pub struct BacktrackingSearch {
    size: usize,
    stats: SearchStats,
    solutions: SolutionSet,
}

impl BacktrackingSearch {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            stats: SearchStats::default(),
            solutions: SolutionSet::new(size),
        }
    }

    pub fn run(mut self) -> SearchResult {
        let mut placement = Placement::new(self.size);
        self.solve_row(&mut placement);

        SearchResult {
            solutions: self.solutions,
            stats: self.stats,
        }
    }

    fn solve_row(&mut self, placement: &mut Placement) {
        let row = placement.depth();
        self.stats.peak_frontier = self.stats.peak_frontier.max(row + 1);

        if placement.is_complete() {
            self.solutions.push(placement.to_solution());
            return;
        }

        for col in 0..self.size {
            self.stats.safety_checks += 1;
            if is_safe(placement.columns(), row, col) {
                self.stats.nodes_expanded += 1;
                let mut guard = placement.place(col);
                self.solve_row(&mut guard);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DepthFirstSearch;

    #[test]
    fn test_matches_depth_first_exactly() {
        for size in 0..=7 {
            let recursive = BacktrackingSearch::new(size).run();
            let iterative = DepthFirstSearch::new(size).run();
            assert_eq!(recursive.solutions, iterative.solutions, "size {}", size);
            assert_eq!(recursive.stats, iterative.stats, "size {}", size);
        }
    }

    #[test]
    fn test_five_queens() {
        let result = BacktrackingSearch::new(5).run();
        assert_eq!(result.solutions.len(), 10);
        assert_eq!(result.solutions.as_slice()[0].columns(), &[0, 2, 4, 1, 3]);
    }
}

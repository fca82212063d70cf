//! Depth-first enumeration over an explicit stack of row frames

use super::{SearchResult, SearchStats};
use crate::board::{is_safe, Placement};
use crate::solver::SolutionSet;

/// Iterative depth-first search
///
/// `frames[r]` is the next column to try on row `r`. The placement always
/// holds exactly `frames.len() - 1` queens, so a row is unplaced whenever
/// control is above it.
pub struct DepthFirstSearch {
    size: usize,
    stats: SearchStats,
}

impl DepthFirstSearch {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            stats: SearchStats::default(),
        }
    }

    pub fn run(mut self) -> SearchResult {
        let mut solutions = SolutionSet::new(self.size);
        let mut placement = Placement::new(self.size);
        let mut frames: Vec<usize> = vec![0];

        while let Some(&start) = frames.last() {
            self.stats.peak_frontier = self.stats.peak_frontier.max(frames.len());
            let row = frames.len() - 1;

            if row == self.size {
                solutions.push(placement.to_solution());
                frames.pop();
                placement.pop();
                continue;
            }

            match self.next_safe_column(&placement, row, start) {
                Some(col) => {
                    frames[row] = col + 1;
                    placement.push(col);
                    frames.push(0);
                    self.stats.nodes_expanded += 1;
                }
                None => {
                    frames.pop();
                    placement.pop();
                }
            }
        }

        SearchResult {
            solutions,
            stats: self.stats,
        }
    }

    fn next_safe_column(&mut self, placement: &Placement, row: usize, start: usize) -> Option<usize> {
        for col in start..self.size {
            self.stats.safety_checks += 1;
            if is_safe(placement.columns(), row, col) {
                return Some(col);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_queens_in_order() {
        let result = DepthFirstSearch::new(4).run();
        let columns: Vec<_> = result.solutions.iter().map(|s| s.columns().to_vec()).collect();
        assert_eq!(columns, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }

    #[test]
    fn test_solutions_are_lexicographic() {
        let result = DepthFirstSearch::new(6).run();
        let solutions = result.solutions.as_slice();
        assert_eq!(solutions.len(), 4);
        assert!(solutions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_trivial_boards() {
        let empty = DepthFirstSearch::new(0).run();
        assert_eq!(empty.solutions.len(), 1);
        assert!(empty.solutions.as_slice()[0].columns().is_empty());

        let single = DepthFirstSearch::new(1).run();
        assert_eq!(single.solutions.as_slice()[0].columns(), &[0]);

        assert!(DepthFirstSearch::new(3).run().solutions.is_empty());
    }

    #[test]
    fn test_stats_are_collected() {
        let result = DepthFirstSearch::new(5).run();
        assert_eq!(result.stats.peak_frontier, 6);
        assert!(result.stats.nodes_expanded > 10);
        assert!(result.stats.safety_checks > result.stats.nodes_expanded);
    }
}

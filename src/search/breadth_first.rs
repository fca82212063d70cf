//! Breadth-first enumeration over an explicit frontier of partial placements

use super::{SearchResult, SearchStats};
use crate::board::is_safe;
use crate::solver::{Solution, SolutionSet};
use std::collections::VecDeque;

/// Level-by-level search holding every live prefix in a FIFO queue
///
/// Each expansion allocates a fresh prefix; the queue length is the
/// strategy's memory cost and is reported as `peak_frontier`.
pub struct BreadthFirstSearch {
    size: usize,
    stats: SearchStats,
}

impl BreadthFirstSearch {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            stats: SearchStats::default(),
        }
    }

    pub fn run(mut self) -> SearchResult {
        let mut solutions = SolutionSet::new(self.size);
        let mut queue: VecDeque<Vec<usize>> = VecDeque::new();
        queue.push_back(Vec::new());
        self.stats.peak_frontier = 1;

        while let Some(prefix) = queue.pop_front() {
            self.stats.nodes_expanded += 1;
            let row = prefix.len();

            if row == self.size {
                solutions.push(Solution::new(prefix));
                continue;
            }

            for col in 0..self.size {
                self.stats.safety_checks += 1;
                if is_safe(&prefix, row, col) {
                    queue.push_back(Self::extend(&prefix, col));
                }
            }
            self.stats.peak_frontier = self.stats.peak_frontier.max(queue.len());
        }

        SearchResult {
            solutions,
            stats: self.stats,
        }
    }

    fn extend(prefix: &[usize], col: usize) -> Vec<usize> {
        let mut next = Vec::with_capacity(prefix.len() + 1);
        next.extend_from_slice(prefix);
        next.push(col);
        next
    }
}

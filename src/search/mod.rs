//! Search strategies enumerating every N-Queens solution

pub mod strategy;
pub mod depth_first;
pub mod breadth_first;
pub mod backtracking;
pub mod optimized;

pub use strategy::Strategy;
pub use depth_first::DepthFirstSearch;
pub use breadth_first::BreadthFirstSearch;
pub use backtracking::BacktrackingSearch;
pub use optimized::OptimizedSearch;

use crate::solver::SolutionSet;
use serde::{Deserialize, Serialize};

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Queens placed (depth-first family) or prefixes dequeued (breadth-first)
    pub nodes_expanded: u64,
    /// Safety oracle consultations
    pub safety_checks: u64,
    /// Deepest stack reached, or the largest queue length for breadth-first
    pub peak_frontier: usize,
}

/// Output of a single strategy run
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub solutions: SolutionSet,
    pub stats: SearchStats,
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} safety checks, peak frontier {}",
            self.nodes_expanded, self.safety_checks, self.peak_frontier
        )
    }
}

//! Strategy selection and dispatch

use super::{BacktrackingSearch, BreadthFirstSearch, DepthFirstSearch, OptimizedSearch, SearchResult};
use crate::error::SolverError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four enumeration algorithms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    Backtracking,
    #[default]
    Optimized,
}

impl Strategy {
    /// Every strategy, in menu order
    pub const ALL: [Strategy; 4] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::Backtracking,
        Strategy::Optimized,
    ];

    /// Canonical selector name
    pub fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "depth-first",
            Strategy::BreadthFirst => "breadth-first",
            Strategy::Backtracking => "backtracking",
            Strategy::Optimized => "optimized",
        }
    }

    /// Run the strategy on a fresh board of the given size
    pub fn run(self, size: usize) -> SearchResult {
        match self {
            Strategy::DepthFirst => DepthFirstSearch::new(size).run(),
            Strategy::BreadthFirst => BreadthFirstSearch::new(size).run(),
            Strategy::Backtracking => BacktrackingSearch::new(size).run(),
            Strategy::Optimized => OptimizedSearch::new(size).run(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "depth-first" | "dfs" => Ok(Strategy::DepthFirst),
            "breadth-first" | "bfs" => Ok(Strategy::BreadthFirst),
            "backtracking" | "recursive-backtracking" => Ok(Strategy::Backtracking),
            "optimized" | "nqueenssolver" => Ok(Strategy::Optimized),
            _ => Err(SolverError::UnknownStrategy { name: s.to_string() }),
        }
    }
}

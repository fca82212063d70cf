//! Solution representation for N-Queens problems

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A placement of queens, one column index per row
///
/// Produced solutions are always complete and conflict-free; solutions
/// loaded from elsewhere can be checked with [`Solution::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    columns: Vec<usize>,
}

/// Two queens attacking each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub first_row: usize,
    pub second_row: usize,
    pub kind: ConflictKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Column,
    Diagonal,
}

impl Solution {
    pub fn new(columns: Vec<usize>) -> Self {
        Self { columns }
    }

    /// Column of the queen in each row
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Board size (number of queens)
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Does a queen sit on (`row`, `col`)?
    pub fn has_queen(&self, row: usize, col: usize) -> bool {
        self.columns.get(row) == Some(&col)
    }

    /// Every attacking pair, in row order
    pub fn conflicts(&self) -> Vec<Conflict> {
        self.columns
            .iter()
            .copied()
            .enumerate()
            .tuple_combinations()
            .filter_map(|((r1, c1), (r2, c2))| {
                let kind = if c1 == c2 {
                    ConflictKind::Column
                } else if c1.abs_diff(c2) == r2 - r1 {
                    ConflictKind::Diagonal
                } else {
                    return None;
                };
                Some(Conflict {
                    first_row: r1,
                    second_row: r2,
                    kind,
                })
            })
            .collect()
    }

    /// In range and free of attacks
    pub fn is_valid(&self) -> bool {
        let size = self.size();
        self.columns.iter().all(|&col| col < size) && self.conflicts().is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns.iter().join(", "))
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ConflictKind::Column => "column",
            ConflictKind::Diagonal => "diagonal",
        };
        write!(f, "rows {} and {} share a {}", self.first_row, self.second_row, kind)
    }
}

/// All solutions for one board size, in the order the search found them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionSet {
    board_size: usize,
    solutions: Vec<Solution>,
}

impl SolutionSet {
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            solutions: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, solution: Solution) {
        debug_assert_eq!(solution.size(), self.board_size);
        self.solutions.push(solution);
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.solutions
    }

    /// Distinct solutions, ignoring discovery order
    pub fn to_set(&self) -> BTreeSet<Solution> {
        self.solutions.iter().cloned().collect()
    }

    /// Same solutions as `other` regardless of order
    pub fn same_solutions_as(&self, other: &SolutionSet) -> bool {
        if self.board_size != other.board_size || self.len() != other.len() {
            return false;
        }
        let mut mine = self.solutions.clone();
        let mut theirs = other.solutions.clone();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }

    /// Number of entries that repeat an earlier one
    pub fn duplicate_count(&self) -> usize {
        self.len() - self.to_set().len()
    }

    /// Score for a fully solved board: ten points per queen
    pub fn max_score(&self) -> usize {
        10 * self.board_size
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_solution() {
        let solution = Solution::new(vec![1, 3, 0, 2]);
        assert!(solution.is_valid());
        assert!(solution.has_queen(0, 1));
        assert!(!solution.has_queen(0, 0));
        assert_eq!(solution.to_string(), "1, 3, 0, 2");
    }

    #[test]
    fn test_conflict_detection() {
        let solution = Solution::new(vec![0, 2, 0, 1]);
        let conflicts = solution.conflicts();

        assert!(conflicts.contains(&Conflict {
            first_row: 0,
            second_row: 2,
            kind: ConflictKind::Column,
        }));
        assert!(conflicts.contains(&Conflict {
            first_row: 2,
            second_row: 3,
            kind: ConflictKind::Diagonal,
        }));
        assert!(!solution.is_valid());
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        assert!(!Solution::new(vec![5]).is_valid());
        assert!(Solution::new(vec![]).is_valid());
    }

    #[test]
    fn test_json_is_plain_array() {
        let solution = Solution::new(vec![2, 0, 3, 1]);
        assert_eq!(serde_json::to_string(&solution).unwrap(), "[2,0,3,1]");
    }

    #[test]
    fn test_set_comparison_ignores_order() {
        let mut first = SolutionSet::new(4);
        first.push(Solution::new(vec![1, 3, 0, 2]));
        first.push(Solution::new(vec![2, 0, 3, 1]));

        let mut second = SolutionSet::new(4);
        second.push(Solution::new(vec![2, 0, 3, 1]));
        second.push(Solution::new(vec![1, 3, 0, 2]));

        assert_ne!(first, second);
        assert!(first.same_solutions_as(&second));
        assert_eq!(first.duplicate_count(), 0);
        assert_eq!(first.max_score(), 40);
    }

    #[test]
    fn test_duplicate_count() {
        let mut set = SolutionSet::new(4);
        set.push(Solution::new(vec![1, 3, 0, 2]));
        set.push(Solution::new(vec![1, 3, 0, 2]));
        assert_eq!(set.duplicate_count(), 1);
    }
}

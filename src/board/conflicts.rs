//! Conflict tracking arrays for constant-time safety checks

use super::Placement;
use std::ops::{Deref, DerefMut};

/// Occupancy of every column and both diagonal families
///
/// `diagonals` is indexed by `row - col + (n - 1)`, `anti_diagonals` by
/// `row + col`. An entry is set iff exactly one placed queen maps to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictTracker {
    size: usize,
    columns: Vec<bool>,
    diagonals: Vec<bool>,
    anti_diagonals: Vec<bool>,
}

impl ConflictTracker {
    pub fn new(size: usize) -> Self {
        let diagonal_count = (2 * size).saturating_sub(1);
        Self {
            size,
            columns: vec![false; size],
            diagonals: vec![false; diagonal_count],
            anti_diagonals: vec![false; diagonal_count],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn diagonal_index(&self, row: usize, col: usize) -> usize {
        row + (self.size - 1) - col
    }

    /// O(1) check against every queen recorded in the arrays
    #[inline]
    pub fn is_safe(&self, row: usize, col: usize) -> bool {
        !(self.columns[col]
            || self.diagonals[self.diagonal_index(row, col)]
            || self.anti_diagonals[row + col])
    }

    /// Set or clear the column and both diagonals of (`row`, `col`) together
    #[inline]
    pub fn mark_used(&mut self, row: usize, col: usize, value: bool) {
        let diagonal = self.diagonal_index(row, col);
        self.columns[col] = value;
        self.diagonals[diagonal] = value;
        self.anti_diagonals[row + col] = value;
    }

    /// True when no column or diagonal is marked
    pub fn is_clear(&self) -> bool {
        self.columns
            .iter()
            .chain(&self.diagonals)
            .chain(&self.anti_diagonals)
            .all(|&used| !used)
    }

    /// Number of marked entries across all three arrays
    pub fn marked_count(&self) -> usize {
        self.columns
            .iter()
            .chain(&self.diagonals)
            .chain(&self.anti_diagonals)
            .filter(|&&used| used)
            .count()
    }
}

/// Placement paired with its conflict arrays, kept in lockstep
#[derive(Debug, Clone)]
pub struct TrackedBoard {
    placement: Placement,
    tracker: ConflictTracker,
}

impl TrackedBoard {
    pub fn new(size: usize) -> Self {
        Self {
            placement: Placement::new(size),
            tracker: ConflictTracker::new(size),
        }
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn tracker(&self) -> &ConflictTracker {
        &self.tracker
    }

    /// Can a queen go at `col` on the next free row?
    pub fn is_safe(&self, col: usize) -> bool {
        self.tracker.is_safe(self.placement.depth(), col)
    }

    /// Place a queen on the next free row and mark its lines
    ///
    /// The returned guard clears the marks and unplaces the queen on drop.
    pub fn place(&mut self, col: usize) -> TrackedGuard<'_> {
        let row = self.placement.depth();
        self.tracker.mark_used(row, col, true);
        self.placement.push(col);
        TrackedGuard { board: self, row, col }
    }
}

pub struct TrackedGuard<'a> {
    board: &'a mut TrackedBoard,
    row: usize,
    col: usize,
}

impl Deref for TrackedGuard<'_> {
    type Target = TrackedBoard;

    fn deref(&self) -> &TrackedBoard {
        self.board
    }
}

impl DerefMut for TrackedGuard<'_> {
    fn deref_mut(&mut self) -> &mut TrackedBoard {
        self.board
    }
}

impl Drop for TrackedGuard<'_> {
    fn drop(&mut self) {
        self.board.tracker.mark_used(self.row, self.col, false);
        self.board.placement.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_sizes() {
        let tracker = ConflictTracker::new(8);
        assert_eq!(tracker.columns.len(), 8);
        assert_eq!(tracker.diagonals.len(), 15);
        assert_eq!(tracker.anti_diagonals.len(), 15);

        let empty = ConflictTracker::new(0);
        assert!(empty.diagonals.is_empty());
        assert!(empty.is_clear());
    }

    #[test]
    fn test_mark_and_clear() {
        let mut tracker = ConflictTracker::new(4);
        tracker.mark_used(1, 2, true);

        assert_eq!(tracker.marked_count(), 3);
        assert!(!tracker.is_safe(3, 2)); // same column
        assert!(!tracker.is_safe(2, 3)); // same diagonal
        assert!(!tracker.is_safe(0, 3)); // same anti-diagonal
        assert!(tracker.is_safe(3, 1));

        tracker.mark_used(1, 2, false);
        assert!(tracker.is_clear());
    }

    #[test]
    fn test_guard_restores_arrays() {
        let mut board = TrackedBoard::new(5);
        {
            let mut first = board.place(0);
            assert!(!first.is_safe(1));
            {
                let second = first.place(2);
                assert_eq!(second.placement().columns(), &[0, 2]);
                assert_eq!(second.tracker().marked_count(), 6);
            }
            assert_eq!(first.tracker().marked_count(), 3);
        }
        assert!(board.tracker().is_clear());
        assert_eq!(board.placement().depth(), 0);
    }
}

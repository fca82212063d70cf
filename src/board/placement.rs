//! Placement vector: the per-row column assignment used while searching

use crate::solver::Solution;
use std::ops::{Deref, DerefMut};

/// Partial or complete queen placement on an N×N board
///
/// Queens are always placed on the row at the current depth, so rows
/// `0..depth` hold a column and rows `depth..size` are unplaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    size: usize,
    columns: Vec<usize>,
}

impl Placement {
    /// Create an empty placement for a board of the given size
    pub fn new(size: usize) -> Self {
        Self {
            size,
            columns: Vec::with_capacity(size),
        }
    }

    /// Board size (N)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of rows that currently hold a queen
    pub fn depth(&self) -> usize {
        self.columns.len()
    }

    /// True once every row holds a queen
    pub fn is_complete(&self) -> bool {
        self.columns.len() == self.size
    }

    /// Column of the queen in `row`, or `None` if the row is unplaced
    pub fn column(&self, row: usize) -> Option<usize> {
        self.columns.get(row).copied()
    }

    /// Columns of the placed rows, in row order
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Full per-row view, with `None` for every unplaced row
    pub fn to_vector(&self) -> Vec<Option<usize>> {
        (0..self.size).map(|row| self.column(row)).collect()
    }

    /// Put a queen in `col` on the next free row
    pub fn push(&mut self, col: usize) {
        debug_assert!(!self.is_complete(), "placement is already complete");
        debug_assert!(col < self.size, "column {} out of range", col);
        self.columns.push(col);
    }

    /// Remove the queen from the deepest placed row
    pub fn pop(&mut self) -> Option<usize> {
        self.columns.pop()
    }

    /// Place a queen and return a guard that removes it again when dropped
    pub fn place(&mut self, col: usize) -> PlacementGuard<'_> {
        self.push(col);
        PlacementGuard { placement: self }
    }

    /// Copy the current placement into a standalone solution
    pub fn to_solution(&self) -> Solution {
        Solution::new(self.columns.clone())
    }
}

/// Scoped queen placement; the queen is unplaced when the guard goes out of scope
pub struct PlacementGuard<'a> {
    placement: &'a mut Placement,
}

impl Deref for PlacementGuard<'_> {
    type Target = Placement;

    fn deref(&self) -> &Placement {
        self.placement
    }
}

impl DerefMut for PlacementGuard<'_> {
    fn deref_mut(&mut self) -> &mut Placement {
        self.placement
    }
}

impl Drop for PlacementGuard<'_> {
    fn drop(&mut self) {
        self.placement.pop();
    }
}

//! Linear-scan safety oracle shared by the depth-first, breadth-first and
//! recursive backtracking strategies

/// Can a queen go at (`row`, `col`) given the queens already in rows `0..row`?
///
/// `placed[i]` is the column of the queen in row `i`; only the first `row`
/// entries are consulted.
#[inline]
pub fn is_safe(placed: &[usize], row: usize, col: usize) -> bool {
    placed[..row]
        .iter()
        .enumerate()
        .all(|(i, &placed_col)| placed_col != col && placed_col.abs_diff(col) != row - i)
}

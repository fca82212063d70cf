//! File I/O for solution lists
//! Format: one solution per line, column indices separated by commas and/or
//! whitespace. Blank lines and lines starting with '#' are ignored. The empty
//! placement (the only solution of a 0x0 board) is written as a single `-`.

use crate::solver::Solution;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::Path;

const EMPTY_SOLUTION: &str = "-";

/// Load solutions from a text file
pub fn load_solutions_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Solution>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read solutions file: {}", path.as_ref().display()))?;

    parse_solutions(&content)
        .with_context(|| format!("Failed to parse solutions from file: {}", path.as_ref().display()))
}

/// Parse solutions from their text representation
pub fn parse_solutions(content: &str) -> Result<Vec<Solution>> {
    let mut solutions = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let solution = parse_solution_line(line)
            .with_context(|| format!("Invalid solution on line {}", line_idx + 1))?;
        solutions.push(solution);
    }

    if solutions.is_empty() {
        anyhow::bail!("Solutions file is empty or contains no solution lines");
    }

    Ok(solutions)
}

fn parse_solution_line(line: &str) -> Result<Solution> {
    if line == EMPTY_SOLUTION {
        return Ok(Solution::new(Vec::new()));
    }

    let columns = line
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .with_context(|| format!("'{}' is not a column index", token))
        })
        .collect::<Result<Vec<_>>>()?;

    let size = columns.len();
    if let Some((row, col)) = columns.iter().enumerate().find(|&(_, &col)| col >= size) {
        anyhow::bail!("Column {} in row {} is outside a {}x{} board", col, row, size, size);
    }

    Ok(Solution::new(columns))
}

/// Convert solutions to the line-per-solution text format
pub fn solutions_to_string(solutions: &[Solution]) -> String {
    solutions
        .iter()
        .map(|solution| match solution.columns() {
            [] => EMPTY_SOLUTION.to_string(),
            columns => columns.iter().join(", "),
        })
        .map(|line| line + "\n")
        .collect()
}

/// Save solutions to a text file
pub fn save_solutions_to_file<P: AsRef<Path>>(solutions: &[Solution], path: P) -> Result<()> {
    let content = solutions_to_string(solutions);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write solutions to file: {}", path.as_ref().display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_solutions() {
        let content = "# four queens\n1, 3, 0, 2\n\n2 0 3 1\n";
        let solutions = parse_solutions(content).unwrap();

        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].columns(), &[1, 3, 0, 2]);
        assert_eq!(solutions[1].columns(), &[2, 0, 3, 1]);
    }

    #[test]
    fn test_solutions_to_string() {
        let solutions = vec![Solution::new(vec![1, 3, 0, 2]), Solution::new(vec![0])];
        assert_eq!(solutions_to_string(&solutions), "1, 3, 0, 2\n0\n");
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/solutions.txt");

        let solutions = vec![Solution::new(vec![1, 3, 0, 2]), Solution::new(vec![2, 0, 3, 1])];
        save_solutions_to_file(&solutions, &file_path).unwrap();

        let loaded = load_solutions_from_file(&file_path).unwrap();
        assert_eq!(loaded, solutions);
    }

    #[test]
    fn test_empty_board_round_trip() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("solutions.txt");

        let outcome = crate::solve(0, crate::Strategy::Optimized).unwrap();
        save_solutions_to_file(outcome.solutions.as_slice(), &file_path).unwrap();
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "-\n");

        let loaded = load_solutions_from_file(&file_path).unwrap();
        assert_eq!(loaded, vec![Solution::new(Vec::new())]);
        assert_eq!(loaded.as_slice(), outcome.solutions.as_slice());
    }

    #[test]
    fn test_invalid_input() {
        // Not a number
        assert!(parse_solutions("1, x, 0\n").is_err());

        // Column outside the board
        assert!(parse_solutions("0, 4, 1, 2\n").is_err());

        // Nothing but comments
        assert!(parse_solutions("# empty\n\n").is_err());
    }

    #[test]
    fn test_error_names_the_line() {
        let err = parse_solutions("1, 3, 0, 2\n1, 3, 9, 2\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }
}

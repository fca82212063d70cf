//! Solution validation for N-Queens problems

use super::{Conflict, Solution, SolutionSet};
use crate::search::Strategy;
use rayon::prelude::*;
use std::collections::HashSet;
use std::time::Instant;

/// Checks solutions and cross-checks strategies against each other
#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionValidator {
    expected_size: Option<usize>,
}

/// Result of validating a single solution
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub conflicts: Vec<Conflict>,
    pub error_message: Option<String>,
}

/// Result of validating many solutions
#[derive(Debug, Clone)]
pub struct SetValidationResult {
    pub total_solutions: usize,
    pub valid_solutions: usize,
    pub invalid_solutions: usize,
    pub duplicate_solutions: usize,
    /// (index, result) for every invalid solution
    pub failures: Vec<(usize, ValidationResult)>,
    pub validation_time_ms: u64,
}

/// Outcome of running every strategy on the same board
#[derive(Debug, Clone)]
pub struct AgreementReport {
    pub board_size: usize,
    pub counts: Vec<(Strategy, usize)>,
    pub all_agree: bool,
    pub disagreeing: Vec<Strategy>,
}

impl SolutionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also require every solution to be for an `size`×`size` board
    pub fn with_expected_size(size: usize) -> Self {
        Self {
            expected_size: Some(size),
        }
    }

    /// Validate one solution
    pub fn validate(&self, solution: &Solution) -> ValidationResult {
        if let Some(expected) = self.expected_size {
            if solution.size() != expected {
                return ValidationResult {
                    is_valid: false,
                    conflicts: Vec::new(),
                    error_message: Some(format!(
                        "Size mismatch: solution places {} queens, expected {}",
                        solution.size(),
                        expected
                    )),
                };
            }
        }

        let size = solution.size();
        if let Some((row, &col)) = solution.columns().iter().enumerate().find(|&(_, &col)| col >= size) {
            return ValidationResult {
                is_valid: false,
                conflicts: Vec::new(),
                error_message: Some(format!(
                    "Row {} has column {}, outside a {}x{} board",
                    row, col, size, size
                )),
            };
        }

        let conflicts = solution.conflicts();
        let error_message = if conflicts.is_empty() {
            None
        } else {
            Some(Self::describe_conflicts(&conflicts))
        };

        ValidationResult {
            is_valid: conflicts.is_empty(),
            conflicts,
            error_message,
        }
    }

    fn describe_conflicts(conflicts: &[Conflict]) -> String {
        let mut message = format!("Found {} attacking pair(s). ", conflicts.len());

        for (i, conflict) in conflicts.iter().take(3).enumerate() {
            if i == 0 {
                message.push_str("Examples: ");
            }
            message.push_str(&format!("{}; ", conflict));
        }

        if conflicts.len() > 3 {
            message.push_str(&format!("... and {} more", conflicts.len() - 3));
        }

        message
    }

    /// Validate every solution in parallel and count duplicates
    pub fn validate_set(&self, solutions: &[Solution]) -> SetValidationResult {
        let start_time = Instant::now();

        let failures: Vec<(usize, ValidationResult)> = solutions
            .par_iter()
            .enumerate()
            .map(|(i, solution)| (i, self.validate(solution)))
            .filter(|(_, result)| !result.is_valid)
            .collect();

        let distinct: HashSet<&Solution> = solutions.iter().collect();
        let invalid_solutions = failures.len();

        SetValidationResult {
            total_solutions: solutions.len(),
            valid_solutions: solutions.len() - invalid_solutions,
            invalid_solutions,
            duplicate_solutions: solutions.len() - distinct.len(),
            failures,
            validation_time_ms: start_time.elapsed().as_millis() as u64,
        }
    }

    /// Run every strategy on an `n`×`n` board and compare the solution sets
    pub fn check_agreement(&self, board_size: usize) -> AgreementReport {
        let results: Vec<(Strategy, SolutionSet)> = Strategy::ALL
            .iter()
            .map(|&strategy| (strategy, strategy.run(board_size).solutions))
            .collect();

        let reference = &results[0].1;
        let disagreeing: Vec<Strategy> = results
            .iter()
            .filter(|(_, set)| !set.same_solutions_as(reference))
            .map(|(strategy, _)| *strategy)
            .collect();

        AgreementReport {
            board_size,
            counts: results.iter().map(|(strategy, set)| (*strategy, set.len())).collect(),
            all_agree: disagreeing.is_empty(),
            disagreeing,
        }
    }
}

impl SetValidationResult {
    pub fn is_valid(&self) -> bool {
        self.invalid_solutions == 0 && self.duplicate_solutions == 0
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if self.is_valid { "VALID" } else { "INVALID" })?;
        if let Some(ref error) = self.error_message {
            write!(f, ": {}", error)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for SetValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution Set Validation:")?;
        writeln!(f, "  Total solutions: {}", self.total_solutions)?;
        writeln!(f, "  Valid solutions: {}", self.valid_solutions)?;
        writeln!(f, "  Invalid solutions: {}", self.invalid_solutions)?;
        writeln!(f, "  Duplicate solutions: {}", self.duplicate_solutions)?;
        writeln!(f, "  Validation time: {}ms", self.validation_time_ms)?;
        Ok(())
    }
}

impl std::fmt::Display for AgreementReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Strategy Agreement (n={}):", self.board_size)?;
        for (strategy, count) in &self.counts {
            writeln!(f, "  {:<14} {} solution(s)", strategy.name(), count)?;
        }
        if self.all_agree {
            writeln!(f, "  All strategies produce the same solution set")?;
        } else {
            let names: Vec<_> = self.disagreeing.iter().map(|s| s.name()).collect();
            writeln!(f, "  Disagreeing with depth-first: {}", names.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_solution() {
        let validator = SolutionValidator::new();
        let result = validator.validate(&Solution::new(vec![2, 0, 3, 1]));
        assert!(result.is_valid);
        assert!(result.conflicts.is_empty());
        assert!(result.error_message.is_none());
    }

    #[test]
    fn test_attacking_queens() {
        let validator = SolutionValidator::new();
        let result = validator.validate(&Solution::new(vec![0, 1, 2, 3]));
        assert!(!result.is_valid);
        assert_eq!(result.conflicts.len(), 6);
        assert!(result.error_message.unwrap().contains("... and 3 more"));
    }

    #[test]
    fn test_size_mismatch() {
        let validator = SolutionValidator::with_expected_size(8);
        let result = validator.validate(&Solution::new(vec![1, 3, 0, 2]));
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("Size mismatch"));
    }

    #[test]
    fn test_out_of_range_column() {
        let validator = SolutionValidator::new();
        let result = validator.validate(&Solution::new(vec![0, 7]));
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("outside"));
    }

    #[test]
    fn test_validate_set() {
        let validator = SolutionValidator::with_expected_size(4);
        let solutions = vec![
            Solution::new(vec![1, 3, 0, 2]),
            Solution::new(vec![2, 0, 3, 1]),
            Solution::new(vec![1, 3, 0, 2]),
            Solution::new(vec![0, 1, 2, 3]),
        ];

        let result = validator.validate_set(&solutions);
        assert_eq!(result.total_solutions, 4);
        assert_eq!(result.valid_solutions, 3);
        assert_eq!(result.invalid_solutions, 1);
        assert_eq!(result.duplicate_solutions, 1);
        assert_eq!(result.failures[0].0, 3);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_produced_sets_validate() {
        let validator = SolutionValidator::with_expected_size(8);
        for strategy in Strategy::ALL {
            let solutions = strategy.run(8).solutions;
            assert!(validator.validate_set(solutions.as_slice()).is_valid(), "{}", strategy);
        }
    }

    #[test]
    fn test_agreement_report() {
        let validator = SolutionValidator::new();
        for n in 0..8 {
            let report = validator.check_agreement(n);
            assert!(report.all_agree, "n={}", n);
            assert_eq!(report.counts.len(), 4);
        }

        let report = validator.check_agreement(6);
        assert!(report.counts.iter().all(|&(_, count)| count == 4));
        assert!(report.to_string().contains("All strategies"));
    }
}

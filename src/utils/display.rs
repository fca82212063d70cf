//! Display and output formatting utilities

use crate::board::save_solutions_to_file;
use crate::config::OutputFormat;
use crate::solver::{Solution, SolveOutcome};
use anyhow::{Context, Result};
use std::path::Path;

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Format a solution as a compact board
    pub fn format_board(solution: &Solution) -> String {
        let size = solution.size();
        let mut output = String::with_capacity(size * (size + 1));
        for row in 0..size {
            for col in 0..size {
                output.push(if solution.has_queen(row, col) { 'Q' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a solution as a board with row and column numbers
    pub fn format_board_with_coords(solution: &Solution) -> String {
        let size = solution.size();
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..size {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for row in 0..size {
            output.push_str(&format!("{:2} ", row));
            for col in 0..size {
                output.push_str(if solution.has_queen(row, col) { " Q" } else { " ·" });
            }
            output.push('\n');
        }

        output
    }

    /// Numbered list of the first `max_displayed` solutions
    pub fn format_solution_list(solutions: &[Solution], max_displayed: usize) -> String {
        let mut output = String::new();

        output.push_str("Solutions:\n");
        for (i, solution) in solutions.iter().take(max_displayed).enumerate() {
            output.push_str(&format!("{:4}: {}\n", i + 1, solution));
        }

        if solutions.len() > max_displayed {
            output.push_str(&format!("      ... and {} more\n", solutions.len() - max_displayed));
        }

        output
    }

    /// Side-by-side timing table for several solves of the same board
    pub fn format_comparison_table(outcomes: &[SolveOutcome]) -> String {
        let mut output = String::new();

        output.push_str("Strategy       | Solutions | Time(ms)  | Nodes      | Checks       | Peak\n");
        output.push_str("---------------|-----------|-----------|------------|--------------|--------\n");

        for outcome in outcomes {
            output.push_str(&format!(
                "{:14} | {:9} | {:9.3} | {:10} | {:12} | {}\n",
                outcome.strategy.name(),
                outcome.solution_count(),
                outcome.elapsed.as_secs_f64() * 1000.0,
                outcome.stats.nodes_expanded,
                outcome.stats.safety_checks,
                outcome.stats.peak_frontier
            ));
        }

        output
    }

    /// Save a solve outcome to files based on output format
    pub fn save_solutions<P: AsRef<Path>>(
        outcome: &SolveOutcome,
        output_dir: P,
        format: OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        match format {
            OutputFormat::Text => {
                save_solutions_to_file(outcome.solutions.as_slice(), output_dir.join("solutions.txt"))?;
            }
            OutputFormat::Json => {
                let solutions_json = serde_json::to_string_pretty(&outcome.solutions)?;
                std::fs::write(output_dir.join("solutions.json"), solutions_json)
                    .context("Failed to write solutions.json")?;

                // Also save a summary file
                let summary_json = serde_json::to_string_pretty(&outcome.statistics())?;
                std::fs::write(output_dir.join("summary.json"), summary_json)
                    .context("Failed to write summary.json")?;
            }
            OutputFormat::Board => {
                for (i, solution) in outcome.solutions.iter().enumerate() {
                    let filename = format!("solution_{:03}.txt", i + 1);
                    let content = format!(
                        "Solution {} ({}):\n{}",
                        i + 1,
                        solution,
                        Self::format_board_with_coords(solution)
                    );
                    std::fs::write(output_dir.join(&filename), content)
                        .with_context(|| format!("Failed to write {}", filename))?;
                }
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

//! Configuration settings for the N-Queens solver

use crate::search::Strategy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub solver: SolverConfig,
    pub output: OutputConfig,
    pub benchmark: BenchmarkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    pub board_size: i64,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Solutions printed to the console; the rest are only counted
    pub max_displayed: usize,
    pub save_solutions: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Board,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    pub runs: usize,
    pub sizes: Vec<i64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            solver: SolverConfig {
                board_size: 8,
                strategy: Strategy::Optimized,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                max_displayed: 5,
                save_solutions: false,
                output_directory: PathBuf::from("output/solutions"),
            },
            benchmark: BenchmarkConfig {
                runs: 3,
                sizes: vec![4, 5, 6, 7, 8],
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.solver.board_size < 0 {
            anyhow::bail!("Board size must be zero or positive, got {}", self.solver.board_size);
        }

        if self.benchmark.runs == 0 {
            anyhow::bail!("Number of benchmark runs must be positive");
        }

        if self.benchmark.sizes.is_empty() {
            anyhow::bail!("Benchmark needs at least one board size");
        }

        if let Some(size) = self.benchmark.sizes.iter().find(|&&size| size < 0) {
            anyhow::bail!("Benchmark board size must be zero or positive, got {}", size);
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(board_size) = cli_overrides.board_size {
            self.solver.board_size = board_size;
        }
        if let Some(strategy) = cli_overrides.strategy {
            self.solver.strategy = strategy;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
        if cli_overrides.save {
            self.output.save_solutions = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub board_size: Option<i64>,
    pub strategy: Option<Strategy>,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
    pub save: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.solver.strategy, Strategy::Optimized);
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.solver.board_size = 6;
        settings.solver.strategy = Strategy::BreadthFirst;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.solver.board_size, 6);
        assert_eq!(loaded.solver.strategy, Strategy::BreadthFirst);
        assert_eq!(loaded.benchmark.sizes, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
solver:
  board_size: 5
  strategy: depth_first
output:
  format: json
  max_displayed: 2
  save_solutions: true
  output_directory: out
benchmark:
  runs: 1
  sizes: [4]
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.solver.strategy, Strategy::DepthFirst);
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.solver.board_size = -2;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.benchmark.runs = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.benchmark.sizes = vec![4, -1];
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            board_size: Some(10),
            strategy: Some(Strategy::Backtracking),
            save: true,
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.solver.board_size, 10);
        assert_eq!(settings.solver.strategy, Strategy::Backtracking);
        assert!(settings.output.save_solutions);
        assert_eq!(settings.output.format, OutputFormat::Text);
    }
}

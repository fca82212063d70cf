//! Configuration management for the N-Queens solver

pub mod settings;

pub use settings::{
    Settings, SolverConfig, OutputConfig, BenchmarkConfig, OutputFormat, CliOverrides
};

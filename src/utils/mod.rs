//! Presentation helpers shared by the CLI and the benchmark demo

pub mod display;

pub use display::{Color, ColorOutput, SolutionFormatter};

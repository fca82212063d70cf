//! Benchmark comparing the four search strategies across board sizes
//!
//! Board sizes and runs per configuration come from `config/default.yaml`
//! when present, otherwise from the built-in defaults.

use anyhow::{Context, Result};
use nqueens_solver::{
    config::Settings,
    search::{SearchStats, Strategy},
    solver::NQueensProblem,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
struct BenchmarkResult {
    strategy: Strategy,
    board_size: usize,
    run_times: Vec<Duration>,
    average_time: Duration,
    min_time: Duration,
    max_time: Duration,
    solutions_found: usize,
    stats: SearchStats,
}

impl BenchmarkResult {
    fn new(strategy: Strategy, board_size: usize) -> Self {
        Self {
            strategy,
            board_size,
            run_times: Vec::new(),
            average_time: Duration::ZERO,
            min_time: Duration::MAX,
            max_time: Duration::ZERO,
            solutions_found: 0,
            stats: SearchStats::default(),
        }
    }

    fn add_run(&mut self, duration: Duration, solutions_found: usize, stats: SearchStats) {
        self.run_times.push(duration);
        self.solutions_found = solutions_found;
        self.stats = stats;

        self.min_time = self.min_time.min(duration);
        self.max_time = self.max_time.max(duration);

        let total: Duration = self.run_times.iter().sum();
        self.average_time = total / self.run_times.len() as u32;
    }

    fn format_time(duration: Duration) -> String {
        format!("{:.3}ms", duration.as_secs_f64() * 1000.0)
    }

    fn display(&self) -> String {
        format!(
            "  {:<14} n={:<2} | Avg: {} | Min: {} | Max: {} | Solutions: {} | {}",
            self.strategy.name(),
            self.board_size,
            Self::format_time(self.average_time),
            Self::format_time(self.min_time),
            Self::format_time(self.max_time),
            self.solutions_found,
            self.stats
        )
    }
}

struct BenchmarkSuite {
    results: Vec<BenchmarkResult>,
    sizes: Vec<i64>,
    runs_per_config: usize,
}

impl BenchmarkSuite {
    fn new(sizes: Vec<i64>, runs_per_config: usize) -> Self {
        Self {
            results: Vec::new(),
            sizes,
            runs_per_config,
        }
    }

    fn run(&mut self) -> Result<()> {
        println!("Starting N-Queens strategy benchmark");
        println!("Sizes: {:?} ({} runs per config)\n", self.sizes, self.runs_per_config);

        for &size in &self.sizes {
            for strategy in Strategy::ALL {
                let problem = NQueensProblem::new(size, strategy)
                    .with_context(|| format!("Invalid benchmark size {}", size))?;
                println!("Testing {} on n={}...", strategy, problem.board_size());

                let mut result = BenchmarkResult::new(strategy, problem.board_size());
                for _ in 0..self.runs_per_config {
                    let outcome = problem.solve();
                    result.add_run(outcome.elapsed, outcome.solution_count(), outcome.stats);
                }
                self.results.push(result);
            }
        }

        println!();
        Ok(())
    }

    fn generate_report(&self) {
        println!("═══════════════════════════════════════════════════════════");
        println!("N-QUEENS STRATEGY BENCHMARK RESULTS");
        println!("═══════════════════════════════════════════════════════════");

        for &size in &self.sizes {
            println!("Board {}x{}:", size, size);
            for result in self.results.iter().filter(|r| r.board_size as i64 == size) {
                println!("{}", result.display());
            }
            self.report_fastest(size);
            println!();
        }
    }

    fn report_fastest(&self, size: i64) {
        let for_size: Vec<_> = self.results.iter().filter(|r| r.board_size as i64 == size).collect();

        let Some(fastest) = for_size.iter().min_by_key(|r| r.average_time) else {
            return;
        };
        println!("  Fastest: {} ({})", fastest.strategy, BenchmarkResult::format_time(fastest.average_time));

        if let Some(slowest) = for_size.iter().max_by_key(|r| r.average_time) {
            if fastest.average_time > Duration::ZERO {
                let ratio = slowest.average_time.as_secs_f64() / fastest.average_time.as_secs_f64();
                println!("  {} is {:.1}x slower", slowest.strategy, ratio);
            }
        }

        let agree = for_size.windows(2).all(|pair| pair[0].solutions_found == pair[1].solutions_found);
        if !agree {
            println!("  Strategies disagree on the solution count!");
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config_path = PathBuf::from("config/default.yaml");
    let settings = if config_path.exists() {
        Settings::from_file(&config_path).context("Failed to load benchmark settings")?
    } else {
        Settings::default()
    };

    let mut benchmark = BenchmarkSuite::new(settings.benchmark.sizes.clone(), settings.benchmark.runs);

    benchmark.run().context("Failed to run benchmark suite")?;

    benchmark.generate_report();

    Ok(())
}

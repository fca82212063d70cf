//! Command line front end for the N-Queens solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nqueens_solver::{
    board::load_solutions_from_file,
    config::{CliOverrides, OutputFormat, Settings},
    search::Strategy,
    solver::{NQueensProblem, SetValidationResult, Solution, SolutionValidator, SolveOutcome},
    utils::{ColorOutput, SolutionFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nqueens_solver")]
#[command(about = "N-Queens Solver")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every solution for one board size
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board size N (overrides config)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// Strategy: depth-first, breadth-first, backtracking or optimized (overrides config)
        #[arg(short, long)]
        strategy: Option<String>,

        /// Output format for saved solutions (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save solutions to the output directory
        #[arg(long)]
        save: bool,

        /// Draw a board for each displayed solution
        #[arg(long)]
        show_boards: bool,
    },

    /// Run every strategy on the same board and compare them
    Compare {
        /// Board size N
        #[arg(short = 'n', long, default_value_t = 8, allow_negative_numbers = true)]
        size: i64,

        /// Runs per strategy; the fastest is reported
        #[arg(short, long, default_value_t = 1)]
        runs: usize,
    },

    /// Check a file of solutions
    Validate {
        /// Solutions file, one solution per line
        #[arg(short, long)]
        file: PathBuf,

        /// Expected board size; also checks the file holds every solution
        #[arg(short = 'n', long)]
        size: Option<usize>,
    },

    /// Create example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Solve { config, size, strategy, format, output, save, show_boards } => {
            solve_command(config, size, strategy, format, output, save, show_boards)
        }
        Commands::Compare { size, runs } => compare_command(size, runs),
        Commands::Validate { file, size } => validate_command(file, size),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn solve_command(
    config_path: PathBuf,
    size: Option<i64>,
    strategy: Option<String>,
    format: Option<OutputFormat>,
    output_dir: Option<PathBuf>,
    save: bool,
    show_boards: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        log::warn!("Config file {} not found, using defaults", config_path.display());
        Settings::default()
    };

    // Apply CLI overrides
    let strategy = strategy
        .map(|name| name.parse::<Strategy>())
        .transpose()
        .context("Invalid strategy")?;
    let cli_overrides = CliOverrides {
        board_size: size,
        strategy,
        format,
        output_dir,
        save,
    };
    settings.merge_with_cli(&cli_overrides);

    let problem = NQueensProblem::new(settings.solver.board_size, settings.solver.strategy)
        .context("Invalid problem")?;

    println!("{}", ColorOutput::info(&format!(
        "Solving {}-queens with {}...",
        problem.board_size(),
        problem.strategy()
    )));
    let outcome = problem.solve();

    print_outcome(&outcome, settings.output.max_displayed, show_boards);

    if settings.output.save_solutions {
        SolutionFormatter::save_solutions(&outcome, &settings.output.output_directory, settings.output.format)
            .context("Failed to save solutions")?;
        println!("{}", ColorOutput::success(&format!(
            "Solutions saved to {}",
            settings.output.output_directory.display()
        )));
    }

    Ok(())
}

fn print_outcome(outcome: &SolveOutcome, max_displayed: usize, show_boards: bool) {
    if outcome.solutions.is_empty() {
        println!("{}", ColorOutput::warning(&format!(
            "No solutions exist for a {}x{} board ({:.4} seconds)",
            outcome.board_size,
            outcome.board_size,
            outcome.elapsed.as_secs_f64()
        )));
        return;
    }

    println!("{}", ColorOutput::success(&format!(
        "Found {} solution(s) in {:.4}s",
        outcome.solution_count(),
        outcome.elapsed.as_secs_f64()
    )));
    println!("\n{}", outcome.statistics());
    println!("{}", SolutionFormatter::format_solution_list(outcome.solutions.as_slice(), max_displayed));

    if show_boards {
        for (i, solution) in outcome.solutions.iter().take(max_displayed).enumerate() {
            println!("{}", ColorOutput::info(&format!("Solution {}:", i + 1)));
            println!("{}", SolutionFormatter::format_board_with_coords(solution));
        }
    }
}

fn compare_command(size: i64, runs: usize) -> Result<()> {
    if runs == 0 {
        anyhow::bail!("Number of runs must be positive");
    }

    println!("{}", ColorOutput::info(&format!(
        "Comparing strategies on n={} ({} run{} each)...",
        size,
        runs,
        if runs == 1 { "" } else { "s" }
    )));

    let mut outcomes = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let problem = NQueensProblem::new(size, strategy).context("Invalid problem")?;
        let fastest = (0..runs)
            .map(|_| problem.solve())
            .min_by_key(|outcome| outcome.elapsed)
            .context("No runs completed")?;
        outcomes.push(fastest);
    }

    println!("\n{}", SolutionFormatter::format_comparison_table(&outcomes));

    let reference = &outcomes[0].solutions;
    if outcomes.iter().all(|outcome| outcome.solutions.same_solutions_as(reference)) {
        println!("{}", ColorOutput::success("All strategies produce the same solution set"));
    } else {
        println!("{}", ColorOutput::error("Strategies disagree on the solution set"));
    }

    Ok(())
}

fn validate_command(file: PathBuf, size: Option<usize>) -> Result<()> {
    println!("{}", ColorOutput::info("Validating solutions..."));

    let solutions = load_solutions_from_file(&file)
        .with_context(|| format!("Failed to load solutions from {}", file.display()))?;

    let validator = match size {
        Some(size) => SolutionValidator::with_expected_size(size),
        None => SolutionValidator::new(),
    };
    let result = validator.validate_set(&solutions);
    println!("{}", result);

    for line in failure_lines(&solutions, &result, 5) {
        println!("{}", line);
    }

    if result.is_valid() {
        println!("{}", ColorOutput::success("All solutions are valid"));
    } else {
        println!("{}", ColorOutput::error("Solution file has problems"));
    }

    if let Some(size) = size {
        let (missing, expected) = missing_solutions(&solutions, size)?;
        if missing == 0 {
            println!("{}", ColorOutput::success(&format!("File covers all {} solutions", expected)));
        } else {
            println!("{}", ColorOutput::warning(&format!(
                "File is missing {} of {} solutions",
                missing, expected
            )));
        }
    }

    Ok(())
}

/// One line per invalid solution, numbered by position among the solutions
fn failure_lines(solutions: &[Solution], result: &SetValidationResult, limit: usize) -> Vec<String> {
    result
        .failures
        .iter()
        .take(limit)
        .map(|(index, failure)| format!("  Solution {} ({}): {}", index + 1, solutions[*index], failure))
        .collect()
}

/// (missing, expected) counts of the full solution set for an `size`x`size` board
fn missing_solutions(solutions: &[Solution], size: usize) -> Result<(usize, usize)> {
    let size = i64::try_from(size).context("Board size too large")?;
    let expected = NQueensProblem::new(size, Strategy::Optimized)
        .context("Invalid problem")?
        .solve()
        .solutions;
    let missing = expected.iter().filter(|s| !solutions.contains(s)).count();
    Ok((missing, expected.len()))
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let output_dir = directory.join("output/solutions");

    for dir in [&config_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Create example configuration variants
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut quick_config = Settings::default();
    quick_config.solver.board_size = 4;
    quick_config.solver.strategy = Strategy::DepthFirst;
    quick_config.output.max_displayed = 2;
    quick_config.to_file(&examples_dir.join("quick.yaml"))?;

    let mut frontier_config = Settings::default();
    frontier_config.solver.board_size = 8;
    frontier_config.solver.strategy = Strategy::BreadthFirst;
    frontier_config.output.format = OutputFormat::Json;
    frontier_config.output.save_solutions = true;
    frontier_config.to_file(&examples_dir.join("breadth_first.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- solve --config config/default.yaml");
    println!("3. Run: cargo run -- compare --size 8");

    Ok(())
}

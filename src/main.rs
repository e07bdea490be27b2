//! Mastermind - CLI
//!
//! Mastermind game with TUI and CLI modes, and a candidate-elimination solver
//! that cracks any classic code in at most 8 guesses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{SolveConfig, run_benchmark, run_simple, score_codes, solve_code},
    core::{Code, Color, DEFAULT_LENGTH, GameConfig},
    game::{Mode, RandomSecret},
    output::{print_benchmark_result, print_score_result, print_solve_result},
    solver::CandidateSet,
};
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Pause between computer guesses in the TUI
const TUI_DELAY: Duration = Duration::from_millis(1000);

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with a constraint-based solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Colors in play, as names (red,green,blue) or letters (RGB); default: the six classic colors
    #[arg(short, long, global = true)]
    colors: Option<String>,

    /// Number of slots in a code
    #[arg(short, long, global = true, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Seed for the computer's secrets (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple {
        /// Who guesses first
        #[arg(short, long, value_enum, default_value_t = Mode::PlayerVsComputer)]
        mode: Mode,

        /// Pause between computer guesses, in milliseconds
        #[arg(short, long, default_value = "1000")]
        delay_ms: u64,
    },

    /// Let the computer solve a specific secret code
    Solve {
        /// The secret code, e.g. RGBY or red,green,blue,yellow
        code: String,

        /// Give up after this many guesses
        #[arg(short, long)]
        max_guesses: Option<usize>,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a guess against a target code
    Score {
        /// The guessed code
        guess: String,

        /// The target code
        target: String,
    },

    /// Run the solver against every possible secret
    Benchmark {
        /// Only test the first N codes
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Route `tracing` output to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

/// Build the game configuration from the global flags
fn load_config(colors: Option<&str>, length: usize) -> Result<GameConfig> {
    let palette = match colors {
        Some(list) => {
            let code: Code = list
                .parse()
                .with_context(|| format!("invalid color list '{list}'"))?;
            code.colors().to_vec()
        }
        None => Color::CLASSIC.to_vec(),
    };

    GameConfig::new(palette, length).context("invalid game configuration")
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = load_config(cli.colors.as_deref(), cli.length)?;
    let source = cli
        .seed
        .map_or_else(RandomSecret::from_entropy, RandomSecret::seeded);

    match cli.command {
        Some(Commands::Play) | None => run_play_command(config, source),
        Some(Commands::Simple { mode, delay_ms }) => {
            run_simple_command(&config, mode, source, delay_ms)
        }
        Some(Commands::Solve {
            code,
            max_guesses,
            verbose,
        }) => run_solve_command(&config, &code, max_guesses, verbose),
        Some(Commands::Score { guess, target }) => run_score_command(&config, &guess, &target),
        Some(Commands::Benchmark { limit }) => run_benchmark_command(&config, limit),
    }
}

fn parse_code(text: &str) -> Result<Code> {
    text.parse()
        .with_context(|| format!("invalid code '{text}'"))
}

fn run_solve_command(
    config: &GameConfig,
    code: &str,
    max_guesses: Option<usize>,
    verbose: bool,
) -> Result<()> {
    let mut solve_config = SolveConfig::new(parse_code(code)?);
    if let Some(max) = max_guesses {
        solve_config.max_guesses = max;
    }

    let result = solve_code(solve_config, config)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_score_command(config: &GameConfig, guess: &str, target: &str) -> Result<()> {
    let result = score_codes(parse_code(guess)?, parse_code(target)?, config)?;
    print_score_result(&result);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, limit: Option<usize>) -> Result<()> {
    let all = CandidateSet::full(config);
    let secrets: Vec<Code> = all
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    println!(
        "Running benchmark on {} of {} codes ({} colors, length {})...",
        secrets.len(),
        all.len(),
        config.palette().len(),
        config.length()
    );

    let result = run_benchmark(config, &secrets, true)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_simple_command(
    config: &GameConfig,
    mode: Mode,
    mut source: RandomSecret,
    delay_ms: u64,
) -> Result<()> {
    run_simple(config, mode, &mut source, Duration::from_millis(delay_ms))
        .map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(config: GameConfig, source: RandomSecret) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(config, Mode::default(), source, TUI_DELAY);
    run_tui(app)
}

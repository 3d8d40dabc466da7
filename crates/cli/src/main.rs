//! fib CLI
//!
//! Reads an index from stdin and prints that Fibonacci number to stdout.

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use fib_core::FibConfig;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(ClapParser)]
#[command(name = "fib")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read an index from stdin and print that Fibonacci number", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Line to print before reading the index (overrides the config file)
    #[arg(long)]
    prompt: Option<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Completions { shell }) => run_completions(shell),
        None => run_fib(cli.config.as_deref(), cli.prompt),
    }
}

/// Logs go to stderr so stdout carries nothing but the prompt and result.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "fib", &mut io::stdout());
}

fn run_fib(config_path: Option<&Path>, prompt: Option<String>) {
    let mut config = match config_path {
        Some(path) => match FibConfig::load(path) {
            Ok(c) => {
                info!("Loaded config from {}", path.display());
                c
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => FibConfig::default(),
    };

    if let Some(prompt) = prompt {
        config = config.with_prompt(prompt);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = fib_core::run(stdin.lock(), stdout.lock(), &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

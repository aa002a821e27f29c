//! Arbt CLI - command-line driver for the Arroba lexer.
//!
//! This is the main entry point for the arbt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{error_messages, OutputFormat};
use commands::{run_check, run_init, run_lex, CheckArgs, InitArgs, LexArgs};
use config::Config;
use error::{ArbtError, Result};

/// Arbt - lexer driver for the Arroba scripting language
///
/// Arbt prints the tokens of Arroba source files, checks that files lex
/// cleanly, and writes a default configuration file.
#[derive(Parser, Debug)]
#[command(name = "arbt")]
#[command(author = "Arroba Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexer driver for the Arroba scripting language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "ARBT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ARBT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "ARBT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the arbt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file
    ///
    /// Scans FILE (or standard input when FILE is `-`) and prints one token
    /// per line, or a JSON array with --format json.
    Lex(LexCommand),

    /// Check that source files lex cleanly
    ///
    /// Prints `ok FILE (N tokens)` per clean file and a diagnostic per
    /// failing file. Exits with status 1 if any file failed.
    Check(CheckCommand),

    /// Write a default arbt.toml
    Init(InitCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file, or `-` for standard input
    input: PathBuf,

    /// Output format (text, json) (default: from config)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Print each token's source range
    #[arg(long)]
    spans: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to initialize (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing arbt.toml
    #[arg(short, long)]
    force: bool,
}

/// Settings shared by every command, after merging flags over the
/// configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    verbose: bool,
    color: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            verbose: cli.verbose || config.verbose,
            color: !cli.no_color && config.diagnostics.color,
        }
    }
}

/// Main entry point for the arbt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Diagnostics were already printed by the command.
        Err(err) if matches!(err.downcast_ref::<ArbtError>(), Some(ArbtError::LexFailed { .. })) => {
            ExitCode::FAILURE
        },
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref()).context("loading configuration")?;
    let settings = Settings::resolve(&cli, &config);

    init_logging(settings.verbose, cli.no_color)?;
    debug!(?settings, "starting");

    let name = command_name(&cli.command);
    execute_command(cli.command, settings, &config).with_context(|| format!("running `{}`", name))
}

/// Initialize the logging system.
///
/// Logs go to standard error so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ArbtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Lex(_) => "lex",
        Commands::Check(_) => "check",
        Commands::Init(_) => "init",
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, settings: Settings, config: &Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, settings, config),
        Commands::Check(args) => execute_check(args, settings),
        Commands::Init(args) => execute_init(args, settings),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, settings: Settings, config: &Config) -> Result<()> {
    let format = match args.format {
        Some(name) => OutputFormat::from_str(&name).ok_or_else(|| {
            ArbtError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, name))
        })?,
        None => config.lex.output_format()?,
    };

    let lex_args = LexArgs {
        input: args.input,
        format,
        show_spans: args.spans || config.lex.show_spans,
        color: settings.color,
    };
    let count = run_lex(lex_args)?;
    debug!(tokens = count, "lex finished");
    Ok(())
}

/// Execute the check command.
fn execute_check(args: CheckCommand, settings: Settings) -> Result<()> {
    let check_args = CheckArgs {
        inputs: args.inputs,
        color: settings.color,
    };
    run_check(check_args).map(|_| ())
}

/// Execute the init command.
fn execute_init(args: InitCommand, settings: Settings) -> Result<()> {
    let init_args = InitArgs {
        verbose: settings.verbose,
        force: args.force,
        path: args.path,
    };
    run_init(init_args).map(|_| ())
}

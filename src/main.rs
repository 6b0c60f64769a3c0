//! BMI Calculator - Terminal Body Mass Index calculator
//!
//! Without a subcommand this launches the interactive form. Subcommands give
//! headless, scriptable access to the same evaluator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

use bmi_calc::cli::{CalcArgs, CategoriesArgs, CliResult, ConfigArgs, ExitCode};
use bmi_calc::config::Config;
use bmi_calc::constants::APP_BINARY_NAME;
use bmi_calc::{logging, tui};

/// BMI Calculator - compute Body Mass Index from height and weight
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate BMI from height (cm) and weight (kg)
    Calc(CalcArgs),
    /// List BMI categories and their ranges
    Categories(CategoriesArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            logging::init_stderr(cli.verbose);
            if let Err(err) = run_command(command) {
                eprintln!("Error: {err}");
                std::process::exit(err.exit_code.code());
            }
            std::process::exit(ExitCode::Success.code());
        }
        None => run_interactive(cli.verbose),
    }
}

fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Calc(args) => args.execute(),
        Command::Categories(args) => args.execute(),
        Command::Config(args) => args.execute(),
    }
}

fn run_interactive(verbose: bool) -> Result<()> {
    // Logging is best effort; the form works without a log file
    if let Err(e) = logging::init_file(verbose) {
        eprintln!("Warning: Failed to set up logging: {e}");
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config, using defaults: {e:#}");
            Config::default()
        }
    };

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config);

    let result = tui::run_tui(&mut app_state, &mut terminal);

    tui::restore_terminal(terminal)?;

    result
}

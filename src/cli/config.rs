//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use tracing::info;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Show key hints in the status bar
    #[arg(long, value_name = "BOOL")]
    key_hints: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_key_hints: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;

        if self.json {
            let output = ConfigOutput {
                path: path.to_string_lossy().to_string(),
                ui: UiOutput {
                    theme: config.ui.theme_mode.as_str().to_string(),
                    show_key_hints: config.ui.show_key_hints,
                },
            };
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            println!("BMI Calculator Configuration");
            println!("============================");
            println!();
            println!("File: {}", path.display());
            println!();
            println!("UI:");
            println!("  Theme Mode: {}", config.ui.theme_mode.as_str());
            println!("  Key Hints:  {}", config.ui.show_key_hints);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.theme.is_none() && self.key_hints.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme or --key-hints",
            ));
        }

        let theme = match &self.theme {
            Some(value) => Some(ThemeMode::parse(value).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?),
            None => None,
        };

        let mut config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;

        if let Some(theme) = theme {
            config.ui.theme_mode = theme;
        }
        if let Some(show) = self.key_hints {
            config.ui.show_key_hints = show;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        info!(?config, "configuration updated");
        println!("Configuration updated successfully.");

        Ok(())
    }
}

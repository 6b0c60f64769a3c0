//! CLI command handlers.
//!
//! This module provides headless, scriptable access to the BMI evaluator
//! and to the application configuration.

pub mod calc;
pub mod categories;
pub mod common;
pub mod config;

// Re-export types used by main.rs and tests
pub use calc::CalcArgs;
pub use categories::CategoriesArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;

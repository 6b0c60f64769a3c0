//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and file locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "BMI Calculator";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "bmi-calc";

/// Directory name under the platform config directory.
pub const APP_CONFIG_DIR_NAME: &str = "BmiCalc";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "BMI_CALC_CONFIG_DIR";

/// Log file written while the terminal UI owns the screen.
pub const LOG_FILE_NAME: &str = "bmi-calc.log";

//! BMI Calculator Library
//!
//! This library provides the Body Mass Index evaluator, the terminal form
//! built around it, the headless CLI commands, and configuration handling.

// Module declarations
pub mod bmi;
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod tui;

//! One-shot BMI calculation command.

use crate::bmi::{BmiCategory, BmiResult, Measurement, ValidationError};
use crate::cli::common::{CliError, CliResult};
use clap::Args;
use serde::Serialize;
use tracing::debug;

/// Calculate BMI from height and weight
#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// Height in centimeters
    #[arg(long, value_name = "CM", allow_hyphen_values = true, default_value = "")]
    pub height: String,

    /// Weight in kilograms
    #[arg(long, value_name = "KG", allow_hyphen_values = true, default_value = "")]
    pub weight: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a successful calculation
#[derive(Debug, Serialize)]
struct CalcOutput {
    bmi: f64,
    display: String,
    category: BmiCategory,
    height_cm: f64,
    weight_kg: f64,
}

/// JSON output for a rejected calculation
#[derive(Debug, Serialize)]
struct CalcErrorOutput {
    error: ValidationError,
    message: String,
}

impl CalcArgs {
    /// Execute the calc command
    pub fn execute(&self) -> CliResult<()> {
        debug!(height = %self.height, weight = %self.weight, "calc command");

        let measurement = match Measurement::parse(&self.height, &self.weight) {
            Ok(measurement) => measurement,
            Err(error) => return self.report_rejection(error),
        };
        let result = BmiResult::from_value(measurement.bmi());

        if self.json {
            let output = CalcOutput {
                bmi: result.rounded(),
                display: result.display_value(),
                category: result.category(),
                height_cm: measurement.height_cm(),
                weight_kg: measurement.weight_kg(),
            };
            print_json(&output)?;
        } else {
            println!("BMI:      {}", result.display_value());
            println!("Category: {}", result.category());
        }

        Ok(())
    }

    fn report_rejection(&self, error: ValidationError) -> CliResult<()> {
        if self.json {
            print_json(&CalcErrorOutput {
                error,
                message: error.to_string(),
            })?;
        }
        Err(CliError::validation(error.to_string()))
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

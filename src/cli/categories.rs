//! Category listing command.

use crate::bmi::BmiCategory;
use crate::cli::common::{CliError, CliResult};
use clap::Args;
use serde::Serialize;

/// List BMI categories and their ranges
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryInfo {
    category: BmiCategory,
    /// Inclusive lower bound, absent for the lowest category
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
    /// Exclusive upper bound, absent for the highest category
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<f64>,
    range: String,
}

#[derive(Debug, Serialize)]
struct CategoryListOutput {
    categories: Vec<CategoryInfo>,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> CliResult<()> {
        let categories: Vec<CategoryInfo> = BmiCategory::ALL
            .iter()
            .map(|&category| {
                let (min, max) = category.range();
                CategoryInfo {
                    category,
                    min,
                    max,
                    range: category.range_description(),
                }
            })
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&CategoryListOutput { categories })
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("BMI Categories");
            println!("==============");
            for info in &categories {
                println!("  {:<12} {}", info.category.label(), info.range);
            }
        }

        Ok(())
    }
}

//! BMI evaluation: input validation, the BMI formula, and classification.
//!
//! [`evaluate`] is a pure function of the two raw input strings. It never
//! panics on malformed text; unparseable numbers are reported as the
//! positivity failure of the field they were entered in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::BmiCategory;

/// Centimeters per meter, used to convert the height input.
const CM_PER_METER: f64 = 100.0;

/// Reasons a BMI could not be computed from the given input.
///
/// All variants are user-facing and recoverable by re-entering input. The
/// `Display` implementation yields the exact message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// One or both inputs were empty
    #[error("Please enter both height and weight.")]
    MissingInput,
    /// Height was zero, negative, or not a number
    #[error("Height must be a positive number.")]
    InvalidHeight,
    /// Weight was zero, negative, or not a number
    #[error("Weight must be a positive number.")]
    InvalidWeight,
}

/// A validated pair of measurements.
///
/// Both values are finite and strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    height_cm: f64,
    height_m: f64,
    weight_kg: f64,
}

impl Measurement {
    /// Validates raw input text and converts height from centimeters to meters.
    ///
    /// Rules are applied in order and the first failure wins:
    /// 1. either input blank: [`ValidationError::MissingInput`]
    /// 2. height not a positive number: [`ValidationError::InvalidHeight`]
    /// 3. weight not a positive number: [`ValidationError::InvalidWeight`]
    pub fn parse(height_text: &str, weight_text: &str) -> Result<Self, ValidationError> {
        if height_text.trim().is_empty() || weight_text.trim().is_empty() {
            return Err(ValidationError::MissingInput);
        }

        let height_cm = parse_number(height_text);
        let height_m = height_cm / CM_PER_METER;
        if !is_positive(height_m) {
            return Err(ValidationError::InvalidHeight);
        }

        let weight_kg = parse_number(weight_text);
        if !is_positive(weight_kg) {
            return Err(ValidationError::InvalidWeight);
        }

        Ok(Self {
            height_cm,
            height_m,
            weight_kg,
        })
    }

    /// Height in meters.
    #[must_use]
    pub const fn height_m(&self) -> f64 {
        self.height_m
    }

    /// Height in centimeters, as entered.
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Weight in kilograms.
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Unrounded BMI: weight divided by the square of height.
    #[must_use]
    pub fn bmi(&self) -> f64 {
        self.weight_kg / (self.height_m * self.height_m)
    }
}

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    value: f64,
    category: BmiCategory,
}

impl BmiResult {
    /// Builds a result from an unrounded BMI value.
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self {
            value,
            category: BmiCategory::from_bmi(value),
        }
    }

    /// Unrounded BMI value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// BMI rounded to one decimal place.
    #[must_use]
    pub fn rounded(&self) -> f64 {
        (self.value * 10.0).round() / 10.0
    }

    /// BMI formatted with one decimal digit, e.g. `"24.2"`.
    ///
    /// Built from [`rounded`](Self::rounded) so halves round away from zero.
    #[must_use]
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.rounded())
    }

    /// Category of the unrounded value.
    #[must_use]
    pub const fn category(&self) -> BmiCategory {
        self.category
    }
}

/// Computes the BMI and category from raw height (cm) and weight (kg) text.
///
/// # Examples
///
/// ```
/// use bmi_calc::bmi::{evaluate, BmiCategory, ValidationError};
///
/// let result = evaluate("170", "70").unwrap();
/// assert_eq!(result.display_value(), "24.2");
/// assert_eq!(result.category(), BmiCategory::Normal);
///
/// assert_eq!(evaluate("", "70"), Err(ValidationError::MissingInput));
/// ```
pub fn evaluate(height_text: &str, weight_text: &str) -> Result<BmiResult, ValidationError> {
    let measurement = Measurement::parse(height_text, weight_text)?;
    Ok(BmiResult::from_value(measurement.bmi()))
}

/// Parses decimal text, yielding NaN for anything that is not a number.
fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// NaN and infinities fail, as do zero and negatives.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

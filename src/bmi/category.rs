//! Weight-status categories derived from BMI thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the Normal range (inclusive).
pub const NORMAL_MIN: f64 = 18.5;

/// Lower bound of the Overweight range (inclusive).
pub const OVERWEIGHT_MIN: f64 = 25.0;

/// Lower bound of the Obese range (inclusive).
pub const OBESE_MIN: f64 = 30.0;

/// Weight-status category for a BMI value.
///
/// Ranges are half-open with an inclusive lower bound:
///
/// | Range | Category |
/// |---|---|
/// | bmi < 18.5 | Underweight |
/// | 18.5 ≤ bmi < 25 | Normal |
/// | 25 ≤ bmi < 30 | Overweight |
/// | bmi ≥ 30 | Obese |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// bmi < 18.5
    Underweight,
    /// 18.5 ≤ bmi < 25
    Normal,
    /// 25 ≤ bmi < 30
    Overweight,
    /// bmi ≥ 30
    Obese,
}

impl BmiCategory {
    /// All categories in ascending order.
    pub const ALL: [Self; 4] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
    ];

    /// Classifies an unrounded BMI value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_calc::bmi::BmiCategory;
    ///
    /// assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    /// assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
    /// ```
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_MIN {
            Self::Underweight
        } else if bmi < OVERWEIGHT_MIN {
            Self::Normal
        } else if bmi < OBESE_MIN {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label shown next to the BMI value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Range covered by this category as `(lower, upper)`.
    ///
    /// `None` means the range is unbounded on that side. The lower bound is
    /// inclusive, the upper bound exclusive.
    #[must_use]
    pub const fn range(self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::Underweight => (None, Some(NORMAL_MIN)),
            Self::Normal => (Some(NORMAL_MIN), Some(OVERWEIGHT_MIN)),
            Self::Overweight => (Some(OVERWEIGHT_MIN), Some(OBESE_MIN)),
            Self::Obese => (Some(OBESE_MIN), None),
        }
    }

    /// Human-readable range, e.g. `"18.5 ≤ BMI < 25.0"`.
    #[must_use]
    pub fn range_description(self) -> String {
        match self.range() {
            (None, Some(upper)) => format!("BMI < {upper:.1}"),
            (Some(lower), Some(upper)) => format!("{lower:.1} ≤ BMI < {upper:.1}"),
            (Some(lower), None) => format!("BMI ≥ {lower:.1}"),
            (None, None) => "any BMI".to_string(),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Body Mass Index evaluation.
//!
//! This module holds the only domain logic of the application: validating the
//! two raw inputs, computing the BMI and classifying it. It has no dependency
//! on the UI, CLI, or configuration layers.

pub mod category;
pub mod evaluator;

pub use category::BmiCategory;
pub use evaluator::{evaluate, BmiResult, Measurement, ValidationError};

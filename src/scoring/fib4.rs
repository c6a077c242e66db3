//! FIB-4 index computation and input validation

use thiserror::Error;

use crate::labs::{normalize_platelets, parse_lab_value};
use crate::models::{LabField, LabForm, ScoreResult};

/// Scoring error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// A required field is empty, non-numeric, or exactly zero. Zero is
    /// rejected along with missing values: the formula divides by platelets
    /// and takes sqrt(ALT), so a zero anywhere is never computable input.
    #[error("Incomplete or invalid input: {}", .field.display_name())]
    IncompleteOrInvalidInput { field: LabField },
}

/// Result type for scoring operations
pub type ScoringResult<T> = Result<T, ScoreError>;

/// Compute the raw FIB-4 index from validated values
///
/// score = (age × AST) / (platelets × √ALT), platelets in 10^9/L.
pub fn fib4_index(age: f64, ast: f64, alt: f64, platelets: f64) -> f64 {
    (age * ast) / (platelets * alt.sqrt())
}

fn require(field: LabField, value: Option<f64>) -> ScoringResult<f64> {
    match value {
        Some(v) if v != 0.0 => Ok(v),
        _ => Err(ScoreError::IncompleteOrInvalidInput { field }),
    }
}

/// Validate a form and compute its FIB-4 result
///
/// The platelet count is converted to 10^9/L before the zero check, so a raw
/// count of zero fails in any unit. Fails on the first bad field with no
/// partial result.
pub fn score_form(form: &LabForm) -> ScoringResult<ScoreResult> {
    let age = require(LabField::Age, parse_lab_value(&form.age))?;
    let ast = require(LabField::Ast, parse_lab_value(&form.ast))?;
    let alt = require(LabField::Alt, parse_lab_value(&form.alt))?;
    let platelets = require(
        LabField::Platelets,
        normalize_platelets(&form.platelets, form.platelet_unit),
    )?;

    Ok(ScoreResult::from_value(fib4_index(age, ast, alt, platelets)))
}

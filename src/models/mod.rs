//! Data models
//!
//! Structs representing the lab input form and the scoring result payload.

mod lab_form;
mod score;

pub use lab_form::{LabField, LabForm};
pub use score::{RiskCategory, ScoreResult};

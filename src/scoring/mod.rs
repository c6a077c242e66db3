//! FIB-4 scoring module
//!
//! Validates raw lab inputs and computes the FIB-4 index.

pub mod fib4;

pub use fib4::{fib4_index, score_form, ScoreError, ScoringResult};

//! Lab value handling
//!
//! Parsing of raw lab strings and conversion of platelet counts to the
//! canonical 10^9/L unit.

pub mod converter;
pub mod units;

pub use converter::{normalize_platelets, normalize_platelets_tagged, parse_lab_value};
pub use units::{PlateletUnit, CANONICAL_PER_CELL_PER_UL};

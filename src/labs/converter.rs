//! Lab value parsing and platelet unit conversion
//!
//! Raw form fields arrive as strings; everything here turns them into finite
//! numbers in canonical units.

use super::units::PlateletUnit;

/// Parse a raw lab field into a finite f64
///
/// Returns None for empty, non-numeric, or non-finite input.
pub fn parse_lab_value(s: &str) -> Option<f64> {
    let value: f64 = s.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Convert a platelet count string to 10^9/L
pub fn normalize_platelets(value: &str, unit: PlateletUnit) -> Option<f64> {
    Some(parse_lab_value(value)? * unit.factor_to_canonical())
}

/// Convert a platelet count string under a free-form unit tag
///
/// Tags that match no known unit pass through as already-canonical (×1).
/// This can mask a mislabeled unit, so the fallback is logged.
pub fn normalize_platelets_tagged(value: &str, unit_tag: &str) -> Option<f64> {
    match PlateletUnit::from_str(unit_tag) {
        Some(unit) => normalize_platelets(value, unit),
        None => {
            tracing::warn!(
                "Unrecognized platelet unit '{}'. Treating value as 10^9/L.",
                unit_tag
            );
            parse_lab_value(value)
        }
    }
}

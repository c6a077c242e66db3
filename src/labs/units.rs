//! Platelet unit types and conversion constants
//!
//! Platelet counts are reported in 10^9/L, 10^3/μL, or raw cells/μL depending
//! on the lab. Everything downstream works in 10^9/L.

use serde::{Deserialize, Serialize};

/// Canonical (10^9/L) units per raw cell/μL
pub const CANONICAL_PER_CELL_PER_UL: f64 = 0.001;

/// Unit a platelet count is reported in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlateletUnit {
    /// Canonical clinical unit (10^9/L)
    #[default]
    #[serde(rename = "10^9/L")]
    GigaPerLiter,
    /// 10^3/μL, numerically equal to 10^9/L
    #[serde(rename = "10^3/μL")]
    ThousandPerMicroliter,
    /// Raw cells per microliter
    #[serde(rename = "/μL")]
    PerMicroliter,
}

impl PlateletUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlateletUnit::GigaPerLiter => "10^9/L",
            PlateletUnit::ThousandPerMicroliter => "10^3/μL",
            PlateletUnit::PerMicroliter => "/μL",
        }
    }

    /// Parse from string, accepting common ASCII spellings
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "10^9/l" | "10e9/l" | "giga/l" => Some(PlateletUnit::GigaPerLiter),
            "10^3/μl" | "10^3/ul" | "k/μl" | "k/ul" => Some(PlateletUnit::ThousandPerMicroliter),
            "/μl" | "/ul" | "cells/μl" | "cells/ul" => Some(PlateletUnit::PerMicroliter),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlateletUnit::GigaPerLiter => "10⁹/L",
            PlateletUnit::ThousandPerMicroliter => "10³/μL",
            PlateletUnit::PerMicroliter => "/μL",
        }
    }

    /// Multiplier taking a value in this unit to 10^9/L
    ///
    /// 10^3/μL is numerically equal to 10^9/L by clinical convention.
    pub fn factor_to_canonical(&self) -> f64 {
        match self {
            PlateletUnit::GigaPerLiter => 1.0,
            PlateletUnit::ThousandPerMicroliter => 1.0,
            PlateletUnit::PerMicroliter => CANONICAL_PER_CELL_PER_UL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_canonical() {
        assert_eq!(PlateletUnit::from_str("10^9/L"), Some(PlateletUnit::GigaPerLiter));
        assert_eq!(PlateletUnit::from_str("10e9/L"), Some(PlateletUnit::GigaPerLiter));
    }

    #[test]
    fn test_from_str_thousand_per_microliter() {
        assert_eq!(
            PlateletUnit::from_str("10^3/μL"),
            Some(PlateletUnit::ThousandPerMicroliter)
        );
        assert_eq!(
            PlateletUnit::from_str("K/uL"),
            Some(PlateletUnit::ThousandPerMicroliter)
        );
    }

    #[test]
    fn test_from_str_per_microliter() {
        assert_eq!(PlateletUnit::from_str("/μL"), Some(PlateletUnit::PerMicroliter));
        assert_eq!(PlateletUnit::from_str("cells/uL"), Some(PlateletUnit::PerMicroliter));
    }

    #[test]
    fn test_from_str_unknown() {
        assert_eq!(PlateletUnit::from_str("mg/dL"), None);
        assert_eq!(PlateletUnit::from_str(""), None);
    }

    #[test]
    fn test_from_str_round_trips_as_str() {
        for unit in [
            PlateletUnit::GigaPerLiter,
            PlateletUnit::ThousandPerMicroliter,
            PlateletUnit::PerMicroliter,
        ] {
            assert_eq!(PlateletUnit::from_str(unit.as_str()), Some(unit));
        }
    }

    #[test]
    fn test_factor_to_canonical() {
        assert_eq!(PlateletUnit::GigaPerLiter.factor_to_canonical(), 1.0);
        assert_eq!(PlateletUnit::ThousandPerMicroliter.factor_to_canonical(), 1.0);
        assert_eq!(PlateletUnit::PerMicroliter.factor_to_canonical(), 0.001);
    }

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(PlateletUnit::default(), PlateletUnit::GigaPerLiter);
    }
}

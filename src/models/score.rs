//! Score result model
//!
//! Risk band classification and the result payload handed to the caller.

use serde::{Deserialize, Serialize};

/// FIB-4 risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Indeterminate Risk")]
    Indeterminate,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskCategory {
    /// Classify an unrounded FIB-4 score
    ///
    /// Below 1.3 is low, 1.3 through 2.67 inclusive is indeterminate,
    /// above 2.67 is high. The bands partition the whole line.
    pub fn from_score(score: f64) -> Self {
        if score < 1.3 {
            RiskCategory::Low
        } else if score <= 2.67 {
            RiskCategory::Indeterminate
        } else {
            RiskCategory::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low Risk",
            RiskCategory::Indeterminate => "Indeterminate Risk",
            RiskCategory::High => "High Risk",
        }
    }

    /// Advisory sentence shown alongside the category
    pub fn advisory(&self) -> &'static str {
        match self {
            RiskCategory::Low => {
                "This FIB-4 score is categorized as low risk for liver fibrosis."
            }
            RiskCategory::Indeterminate => {
                "This FIB-4 score is categorized as indeterminate risk for liver fibrosis."
            }
            RiskCategory::High => {
                "This FIB-4 score is categorized as high risk for liver fibrosis."
            }
        }
    }
}

/// Computed FIB-4 result
///
/// Serializes to the `{score, category}` payload the display layer consumes;
/// the unrounded value stays available for programmatic use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Score rounded to two decimal places for display
    pub score: String,
    pub category: RiskCategory,
    /// Unrounded score
    #[serde(skip)]
    pub value: f64,
}

impl ScoreResult {
    /// Build a result from an unrounded score
    ///
    /// Classification uses the unrounded value, not the displayed one.
    pub fn from_value(value: f64) -> Self {
        Self {
            score: format!("{:.2}", value),
            category: RiskCategory::from_score(value),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_breakpoints() {
        assert_eq!(RiskCategory::from_score(0.0), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(1.29), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(1.3), RiskCategory::Indeterminate);
        assert_eq!(RiskCategory::from_score(2.0), RiskCategory::Indeterminate);
        assert_eq!(RiskCategory::from_score(2.67), RiskCategory::Indeterminate);
        assert_eq!(RiskCategory::from_score(2.68), RiskCategory::High);
        assert_eq!(RiskCategory::from_score(100.0), RiskCategory::High);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(RiskCategory::Low.as_str(), "Low Risk");
        assert_eq!(RiskCategory::Indeterminate.as_str(), "Indeterminate Risk");
        assert_eq!(RiskCategory::High.as_str(), "High Risk");
    }

    #[test]
    fn test_advisory_mentions_band() {
        assert!(RiskCategory::Low.advisory().contains("low risk"));
        assert!(RiskCategory::High.advisory().contains("high risk"));
    }

    #[test]
    fn test_result_rounds_for_display() {
        let result = ScoreResult::from_value(4.2163);
        assert_eq!(result.score, "4.22");
        assert_eq!(result.category, RiskCategory::High);
        assert!((result.value - 4.2163).abs() < 1e-12);
    }

    #[test]
    fn test_result_payload_shape() {
        let result = ScoreResult::from_value(0.48);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"score":"0.48","category":"Low Risk"}"#);
    }
}

use serde::{Deserialize, Serialize};

/// Ordinal risk category for the continuous pathway. Band boundaries are
/// half-open on the low side: a score of exactly 15.0 is `Low`, not
/// `VeryLow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    VeryLow,
    Low,
    Intermediate,
    High,
    VeryHigh,
}

impl RiskCategory {
    pub fn from_score(score: f64) -> Self {
        if score < 15.0 {
            RiskCategory::VeryLow
        } else if score < 30.0 {
            RiskCategory::Low
        } else if score < 50.0 {
            RiskCategory::Intermediate
        } else if score < 70.0 {
            RiskCategory::High
        } else {
            RiskCategory::VeryHigh
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskCategory::VeryLow => "Very Low Risk",
            RiskCategory::Low => "Low Risk",
            RiskCategory::Intermediate => "Intermediate Risk",
            RiskCategory::High => "High Risk",
            RiskCategory::VeryHigh => "Very High Risk",
        }
    }

    /// Presentation hex color kept for interface parity with the charting
    /// collaborator.
    pub const fn display_color(self) -> &'static str {
        match self {
            RiskCategory::VeryLow => "#4CAF50",
            RiskCategory::Low => "#8BC34A",
            RiskCategory::Intermediate => "#FF9800",
            RiskCategory::High => "#FF5722",
            RiskCategory::VeryHigh => "#D32F2F",
        }
    }

    pub const fn prognosis(self) -> &'static str {
        match self {
            RiskCategory::VeryLow => "Excellent prognosis",
            RiskCategory::Low => "Good prognosis",
            RiskCategory::Intermediate => "Moderate prognosis",
            RiskCategory::High => "Poor prognosis",
            RiskCategory::VeryHigh => "Very poor prognosis",
        }
    }
}

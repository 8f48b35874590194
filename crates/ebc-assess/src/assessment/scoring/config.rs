use serde::{Deserialize, Serialize};

/// Threshold configuration for the composite weighting.
///
/// The defaults are the published rubric values; tests and hosts construct
/// the engine from `ScoringConfig::default()` unless a study protocol says
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Normalization ceiling for the practical NPI range.
    pub npi_ceiling: f64,
    /// Points assigned to a ceiling-value NPI.
    pub npi_weight: f64,
    pub ki67_moderate_cutoff: f64,
    pub ki67_high_cutoff: f64,
    pub young_age_cutoff: u8,
    pub premenopausal_age_cutoff: u8,
    pub elderly_age_cutoff: u8,
    pub large_tumor_cutoff_cm: f64,
    pub extensive_nodes_cutoff: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            npi_ceiling: 6.8,
            npi_weight: 30.0,
            ki67_moderate_cutoff: 14.0,
            ki67_high_cutoff: 30.0,
            young_age_cutoff: 35,
            premenopausal_age_cutoff: 50,
            elderly_age_cutoff: 70,
            large_tumor_cutoff_cm: 5.0,
            extensive_nodes_cutoff: 10,
        }
    }
}

mod category;
mod config;
mod rules;

pub use category::RiskCategory;
pub use config::ScoringConfig;

use serde::{Deserialize, Serialize};

use super::domain::{ClinicalInput, MolecularSubtype, ScoreComponent};
use super::npi::NottinghamIndex;
use super::recommend::{self, RecommendationPlan};

/// Stateless engine applying the composite weighting to a validated input.
pub struct RiskEngine {
    config: ScoringConfig,
}

impl RiskEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score an input through the continuous pathway: weighted contributions
    /// clamped to 0–100, then categorized, then turned into a treatment plan.
    pub fn assess(&self, input: &ClinicalInput) -> CompositeAssessment {
        let breakdown = rules::score_input(input, &self.config);
        let risk_score = breakdown.total.clamp(0.0, 100.0);
        let category = RiskCategory::from_score(risk_score);

        let risk_factors = breakdown
            .components
            .iter()
            .filter_map(|component| component.note.clone())
            .collect();

        let recommendations = recommend::treatment_plan(
            Some(risk_score),
            input.er_status,
            input.pr_status,
            input.her2_status,
            input.age,
            input.tumor_size_cm,
            input.nodes_positive,
        );

        CompositeAssessment {
            npi: breakdown.npi,
            risk_score,
            category,
            molecular_subtype: breakdown.subtype,
            risk_factors,
            components: breakdown.components,
            recommendations,
        }
    }
}

/// Output of the continuous pathway: the score, its derivation trail, and
/// the generated treatment plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeAssessment {
    pub npi: NottinghamIndex,
    pub risk_score: f64,
    pub category: RiskCategory,
    pub molecular_subtype: MolecularSubtype,
    pub risk_factors: Vec<String>,
    pub components: Vec<ScoreComponent>,
    pub recommendations: RecommendationPlan,
}

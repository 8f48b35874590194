use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::decision_tree::BinaryRisk;
use super::domain::{AssessmentId, ClinicianContext, PathwayInput, PatientReference};
use super::scoring::CompositeAssessment;

/// Result of one scoring pathway. The variants deliberately differ in
/// shape: the banded pathway never produces a continuous score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pathway", rename_all = "snake_case")]
pub enum AssessmentOutcome {
    Composite(CompositeAssessment),
    DecisionTree { category: BinaryRisk },
}

impl AssessmentOutcome {
    pub fn risk_label(&self) -> &'static str {
        match self {
            AssessmentOutcome::Composite(assessment) => assessment.category.label(),
            AssessmentOutcome::DecisionTree { category } => category.label(),
        }
    }

    pub fn risk_score(&self) -> Option<f64> {
        match self {
            AssessmentOutcome::Composite(assessment) => Some(assessment.risk_score),
            AssessmentOutcome::DecisionTree { .. } => None,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            AssessmentOutcome::Composite(assessment) => format!(
                "{} (score {:.1}): {}",
                assessment.category.label(),
                assessment.risk_score,
                assessment.category.prognosis()
            ),
            AssessmentOutcome::DecisionTree { category } => {
                format!("{} by banded classification", category.label())
            }
        }
    }
}

/// Repository record pairing the submitted input with its computed outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub clinician: ClinicianContext,
    pub patient: PatientReference,
    pub assessed_on: NaiveDate,
    pub notes: Option<String>,
    pub input: PathwayInput,
    pub outcome: AssessmentOutcome,
}

impl AssessmentRecord {
    pub fn status_view(&self) -> AssessmentView {
        AssessmentView {
            assessment_id: self.assessment_id.clone(),
            patient_record_id: self.patient.record_id.clone(),
            assessed_on: self.assessed_on,
            risk_label: self.outcome.risk_label(),
            risk_score: self.outcome.risk_score(),
            summary: self.outcome.summary(),
        }
    }
}

/// Sanitized representation of a stored assessment for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub assessment_id: AssessmentId,
    pub patient_record_id: String,
    pub assessed_on: NaiveDate,
    pub risk_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
    pub summary: String,
}

/// Storage abstraction so the service module can be exercised in isolation.
/// Durable implementations live with the host; the core only sees the trait.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn for_clinician(&self, clinician_id: &str)
        -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use super::decision_tree::{self, IndeterminateRisk};
use super::domain::{AssessmentId, AssessmentSubmission, PathwayInput};
use super::intake::{IntakeError, IntakeGuard};
use super::repository::{
    AssessmentOutcome, AssessmentRecord, AssessmentRepository, RepositoryError,
};
use super::scoring::{RiskEngine, ScoringConfig};

/// Service composing the intake guard, the scoring pathways, and the
/// storage collaborator. Each submission is an independent, stateless
/// computation; only the record store and the id sequence are shared.
pub struct AssessmentService<R> {
    guard: IntakeGuard,
    engine: RiskEngine,
    repository: Arc<R>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asmt-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Self {
        Self::with_guard(IntakeGuard::default(), repository, config)
    }

    pub fn with_guard(guard: IntakeGuard, repository: Arc<R>, config: ScoringConfig) -> Self {
        Self {
            guard,
            engine: RiskEngine::new(config),
            repository,
        }
    }

    /// Validate and score a submission, persisting the outcome.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        self.guard.check(&submission)?;

        let outcome = match &submission.input {
            PathwayInput::Composite(input) => {
                AssessmentOutcome::Composite(self.engine.assess(input))
            }
            PathwayInput::DecisionTree(input) => AssessmentOutcome::DecisionTree {
                category: decision_tree::classify(input)?,
            },
        };

        let record = AssessmentRecord {
            assessment_id: next_assessment_id(),
            clinician: submission.clinician,
            patient: submission.patient,
            assessed_on: submission.assessed_on,
            notes: submission.notes,
            input: submission.input,
            outcome,
        };

        debug!(
            assessment_id = %record.assessment_id.0,
            risk = record.outcome.risk_label(),
            "assessment scored"
        );

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Fetch a stored assessment for API responses.
    pub fn get(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// All assessments recorded under one clinician account.
    pub fn history(
        &self,
        clinician_id: &str,
    ) -> Result<Vec<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.repository.for_clinician(clinician_id)?)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Indeterminate(#[from] IndeterminateRisk),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

use super::domain::{
    AssessmentSubmission, BandedInput, ClinicalInput, MenopausalStatus, PathwayInput,
};

/// Validation errors raised by the intake guard. Every failure is surfaced
/// before any scoring runs; nothing is silently coerced.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("age {found} outside supported range {min}-{max} for this pathway")]
    AgeOutOfRange { min: u8, max: u8, found: u8 },
    #[error("tumor size {found} cm outside supported range {min}-{max} cm")]
    TumorSizeOutOfRange { min: f64, max: f64, found: f64 },
    #[error("positive node count {found} exceeds supported maximum {max}")]
    NodeCountOutOfRange { max: u32, found: u32 },
    #[error("Ki67 value {0} outside the 0-100 percent range")]
    Ki67OutOfRange(f64),
    #[error("menopausal status {} is not accepted by the banded pathway", .0.label())]
    UnsupportedMenopausalStatus(MenopausalStatus),
    #[error("patient record id is required")]
    MissingPatientRecordId,
}

const CONTINUOUS_MIN_AGE: u8 = 18;
const CATEGORICAL_MIN_AGE: u8 = 1;
const MAX_AGE: u8 = 100;
const MIN_TUMOR_SIZE_CM: f64 = 0.1;
const MAX_TUMOR_SIZE_CM: f64 = 20.0;
const MAX_NODES_POSITIVE: u32 = 50;

/// Range limits applied to one pathway. The two pathways historically used
/// different age floors and menopausal vocabularies, so each keeps its own
/// policy instead of a unified one.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    pub min_age: u8,
    pub max_age: u8,
    pub min_tumor_size_cm: f64,
    pub max_tumor_size_cm: f64,
    pub max_nodes_positive: u32,
    pub permit_peri_menopausal: bool,
}

impl IntakePolicy {
    /// Limits for the continuous composite pathway.
    pub fn continuous() -> Self {
        Self {
            min_age: CONTINUOUS_MIN_AGE,
            max_age: MAX_AGE,
            min_tumor_size_cm: MIN_TUMOR_SIZE_CM,
            max_tumor_size_cm: MAX_TUMOR_SIZE_CM,
            max_nodes_positive: MAX_NODES_POSITIVE,
            permit_peri_menopausal: true,
        }
    }

    /// Limits for the banded decision-tree pathway, which accepts pediatric
    /// ages and only the pre/post menopausal vocabulary.
    pub fn categorical() -> Self {
        Self {
            min_age: CATEGORICAL_MIN_AGE,
            max_age: MAX_AGE,
            min_tumor_size_cm: MIN_TUMOR_SIZE_CM,
            max_tumor_size_cm: MAX_TUMOR_SIZE_CM,
            max_nodes_positive: MAX_NODES_POSITIVE,
            permit_peri_menopausal: false,
        }
    }
}

/// Guard validating submissions before they reach a scoring pathway.
#[derive(Debug, Clone)]
pub struct IntakeGuard {
    continuous: IntakePolicy,
    categorical: IntakePolicy,
}

impl Default for IntakeGuard {
    fn default() -> Self {
        Self::new(IntakePolicy::continuous(), IntakePolicy::categorical())
    }
}

impl IntakeGuard {
    pub fn new(continuous: IntakePolicy, categorical: IntakePolicy) -> Self {
        Self {
            continuous,
            categorical,
        }
    }

    pub fn continuous_policy(&self) -> &IntakePolicy {
        &self.continuous
    }

    pub fn categorical_policy(&self) -> &IntakePolicy {
        &self.categorical
    }

    /// Validate a full submission, dispatching on the pathway it targets.
    pub fn check(&self, submission: &AssessmentSubmission) -> Result<(), IntakeError> {
        if submission.patient.record_id.trim().is_empty() {
            return Err(IntakeError::MissingPatientRecordId);
        }

        match &submission.input {
            PathwayInput::Composite(input) => self.check_clinical(input),
            PathwayInput::DecisionTree(input) => self.check_banded(input),
        }
    }

    pub fn check_clinical(&self, input: &ClinicalInput) -> Result<(), IntakeError> {
        let policy = &self.continuous;

        check_age(policy, input.age)?;

        if !input.tumor_size_cm.is_finite()
            || input.tumor_size_cm < policy.min_tumor_size_cm
            || input.tumor_size_cm > policy.max_tumor_size_cm
        {
            return Err(IntakeError::TumorSizeOutOfRange {
                min: policy.min_tumor_size_cm,
                max: policy.max_tumor_size_cm,
                found: input.tumor_size_cm,
            });
        }

        if input.nodes_positive > policy.max_nodes_positive {
            return Err(IntakeError::NodeCountOutOfRange {
                max: policy.max_nodes_positive,
                found: input.nodes_positive,
            });
        }

        check_ki67(input.ki67_percent)?;

        Ok(())
    }

    pub fn check_banded(&self, input: &BandedInput) -> Result<(), IntakeError> {
        let policy = &self.categorical;

        check_age(policy, input.age)?;

        if !policy.permit_peri_menopausal
            && input.menopausal_status == MenopausalStatus::PeriMenopausal
        {
            return Err(IntakeError::UnsupportedMenopausalStatus(
                input.menopausal_status,
            ));
        }

        check_ki67(input.ki67_percent)?;

        Ok(())
    }
}

fn check_age(policy: &IntakePolicy, age: u8) -> Result<(), IntakeError> {
    if age < policy.min_age || age > policy.max_age {
        return Err(IntakeError::AgeOutOfRange {
            min: policy.min_age,
            max: policy.max_age,
            found: age,
        });
    }
    Ok(())
}

fn check_ki67(ki67_percent: f64) -> Result<(), IntakeError> {
    if !ki67_percent.is_finite() || !(0.0..=100.0).contains(&ki67_percent) {
        return Err(IntakeError::Ki67OutOfRange(ki67_percent));
    }
    Ok(())
}

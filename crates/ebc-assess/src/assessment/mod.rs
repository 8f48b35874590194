//! Clinical intake, risk scoring pathways, and treatment recommendations.
//!
//! Two pathways are kept behind distinct entry points because downstream
//! consumers depend on either: the continuous composite score (Nottingham
//! index plus weighted biomarker, age, and histology contributions) and the
//! banded decision tree (binary class, no continuous score). The intake
//! guard validates a submission before either pathway runs; the service and
//! router wire both to a storage collaborator.

pub mod decision_tree;
pub mod domain;
pub(crate) mod intake;
pub mod npi;
pub mod recommend;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use decision_tree::{classify, BinaryRisk, IndeterminateRisk};
pub use domain::{
    AssessmentId, AssessmentSubmission, BandedInput, ClinicalInput, ClinicianContext, Her2Status,
    HistologicalType, MenopausalStatus, MolecularSubtype, NodalStatusBand, PathwayInput,
    PatientReference, ReceptorStatus, RiskFactorKind, ScoreComponent, TumorGrade, TumorSizeBand,
};
pub use intake::{IntakeError, IntakeGuard, IntakePolicy};
pub use npi::NottinghamIndex;
pub use recommend::{treatment_plan, RecommendationPlan};
pub use repository::{
    AssessmentOutcome, AssessmentRecord, AssessmentRepository, AssessmentView, RepositoryError,
};
pub use router::assessment_router;
pub use scoring::{CompositeAssessment, RiskCategory, RiskEngine, ScoringConfig};
pub use service::{AssessmentService, AssessmentServiceError};

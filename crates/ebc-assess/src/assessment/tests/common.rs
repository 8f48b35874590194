use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::assessment::domain::{
    AssessmentId, AssessmentSubmission, BandedInput, ClinicalInput, ClinicianContext, Her2Status,
    HistologicalType, MenopausalStatus, NodalStatusBand, PathwayInput, PatientReference,
    ReceptorStatus, TumorGrade, TumorSizeBand,
};
use crate::assessment::repository::{
    AssessmentRecord, AssessmentRepository, RepositoryError,
};
use crate::assessment::{
    assessment_router, AssessmentService, IntakeGuard, RiskEngine, ScoringConfig,
};

pub(super) fn clinician() -> ClinicianContext {
    ClinicianContext {
        clinician_id: "dr_asha_menon_stjude2026".to_string(),
        hospital_code: "STJUDE2026".to_string(),
        department: Some("Oncology".to_string()),
    }
}

pub(super) fn patient(suffix: &str) -> PatientReference {
    PatientReference {
        record_id: format!("MRN-{suffix}"),
        display_name: "Test Patient".to_string(),
    }
}

/// Node-negative, hormone-positive baseline; lands in the Low band.
pub(super) fn clinical_input() -> ClinicalInput {
    ClinicalInput {
        age: 58,
        menopausal_status: MenopausalStatus::PostMenopausal,
        tumor_size_cm: 1.8,
        nodes_positive: 0,
        tumor_grade: TumorGrade::Grade2,
        er_status: ReceptorStatus::Positive,
        pr_status: ReceptorStatus::Positive,
        her2_status: Her2Status::Negative,
        ki67_percent: 10.0,
        histological_type: HistologicalType::InvasiveDuctal,
    }
}

/// Large, node-heavy, high-grade presentation used by the worked scenarios.
pub(super) fn high_risk_input() -> ClinicalInput {
    ClinicalInput {
        age: 45,
        menopausal_status: MenopausalStatus::PreMenopausal,
        tumor_size_cm: 6.0,
        nodes_positive: 12,
        tumor_grade: TumorGrade::Grade3,
        er_status: ReceptorStatus::Positive,
        pr_status: ReceptorStatus::Positive,
        her2_status: Her2Status::Negative,
        ki67_percent: 35.0,
        histological_type: HistologicalType::InvasiveDuctal,
    }
}

pub(super) fn banded_input() -> BandedInput {
    BandedInput {
        age: 44,
        menopausal_status: MenopausalStatus::PreMenopausal,
        nodal_status: NodalStatusBand::N0,
        tumor_size: TumorSizeBand::T2,
        tumor_grade: TumorGrade::Grade2,
        ki67_percent: 18.0,
    }
}

pub(super) fn assessed_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date")
}

pub(super) fn submission() -> AssessmentSubmission {
    AssessmentSubmission {
        clinician: clinician(),
        patient: patient("10447"),
        assessed_on: assessed_on(),
        notes: Some("No prior treatment".to_string()),
        input: PathwayInput::Composite(clinical_input()),
    }
}

pub(super) fn banded_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        clinician: clinician(),
        patient: patient("10448"),
        assessed_on: assessed_on(),
        notes: None,
        input: PathwayInput::DecisionTree(banded_input()),
    }
}

pub(super) fn engine() -> RiskEngine {
    RiskEngine::new(ScoringConfig::default())
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), ScoringConfig::default());
    (service, repository)
}

pub(super) fn assessment_router_with_service(
    service: AssessmentService<MemoryRepository>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_clinician(
        &self,
        clinician_id: &str,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard
            .values()
            .filter(|record| record.clinician.clinician_id == clinician_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.assessment_id.0.cmp(&b.assessment_id.0));
        Ok(records)
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn for_clinician(
        &self,
        _clinician_id: &str,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

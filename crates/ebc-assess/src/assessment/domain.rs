use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Clinician identity passed explicitly with every submission so records can
/// be partitioned per account without the core reading any session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicianContext {
    pub clinician_id: String,
    pub hospital_code: String,
    pub department: Option<String>,
}

/// Patient identity fields assigned by the surrounding system. The core never
/// interprets them; they travel with the record for the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientReference {
    pub record_id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenopausalStatus {
    PreMenopausal,
    PostMenopausal,
    PeriMenopausal,
}

impl MenopausalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            MenopausalStatus::PreMenopausal => "Pre-menopausal",
            MenopausalStatus::PostMenopausal => "Post-menopausal",
            MenopausalStatus::PeriMenopausal => "Peri-menopausal",
        }
    }
}

/// Nottingham histologic grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TumorGrade {
    Grade1,
    Grade2,
    Grade3,
}

impl TumorGrade {
    /// Parse a free-text grade label. Unrecognized labels fall back to
    /// Grade 2, the documented leniency policy for upstream form data.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Grade 1" => TumorGrade::Grade1,
            "Grade 3" => TumorGrade::Grade3,
            _ => TumorGrade::Grade2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TumorGrade::Grade1 => "Grade 1",
            TumorGrade::Grade2 => "Grade 2",
            TumorGrade::Grade3 => "Grade 3",
        }
    }
}

/// Hormone receptor result (ER or PR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceptorStatus {
    Positive,
    Negative,
}

impl ReceptorStatus {
    pub const fn is_positive(self) -> bool {
        matches!(self, ReceptorStatus::Positive)
    }
}

/// HER2/neu result. Equivocal findings are kept distinct: they satisfy
/// neither the positive nor the negative branch of subtype classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Her2Status {
    Positive,
    Negative,
    Equivocal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistologicalType {
    InvasiveDuctal,
    InvasiveLobular,
    MixedDuctalLobular,
    Inflammatory,
    Other,
}

impl HistologicalType {
    /// Parse a free-text histology label, falling back to `Other` (which
    /// scores the same as unrecognized input).
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Invasive Ductal Carcinoma" => HistologicalType::InvasiveDuctal,
            "Invasive Lobular Carcinoma" => HistologicalType::InvasiveLobular,
            "Mixed Ductal and Lobular" => HistologicalType::MixedDuctalLobular,
            "Inflammatory Breast Cancer" => HistologicalType::Inflammatory,
            _ => HistologicalType::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            HistologicalType::InvasiveDuctal => "Invasive Ductal Carcinoma",
            HistologicalType::InvasiveLobular => "Invasive Lobular Carcinoma",
            HistologicalType::MixedDuctalLobular => "Mixed Ductal and Lobular",
            HistologicalType::Inflammatory => "Inflammatory Breast Cancer",
            HistologicalType::Other => "Other",
        }
    }
}

/// Banded tumor size used by the categorical pathway only. Never derived
/// from `tumor_size_cm`; the two representations are separate inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TumorSizeBand {
    /// < 2 cm
    T1,
    /// 2–5 cm
    T2,
    /// > 5 cm
    T3,
}

/// Banded nodal status used by the categorical pathway only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodalStatusBand {
    /// no positive nodes
    N0,
    /// 1–3 positive nodes
    N1,
    /// 4 or more positive nodes
    N2Plus,
}

/// Intrinsic molecular subtype derived from receptor status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MolecularSubtype {
    LuminalA,
    LuminalB,
    Her2Positive,
    TripleNegative,
}

impl MolecularSubtype {
    /// Classify from biomarker status. Rules are tried in priority order and
    /// the first match wins; an equivocal HER2 result fails both the
    /// HER2-negative luminal branches and the HER2-positive branch.
    pub fn classify(er: ReceptorStatus, pr: ReceptorStatus, her2: Her2Status) -> Self {
        if er.is_positive() && pr.is_positive() && her2 == Her2Status::Negative {
            MolecularSubtype::LuminalA
        } else if er.is_positive() && her2 == Her2Status::Negative {
            MolecularSubtype::LuminalB
        } else if her2 == Her2Status::Positive {
            MolecularSubtype::Her2Positive
        } else {
            MolecularSubtype::TripleNegative
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MolecularSubtype::LuminalA => "Luminal A-like",
            MolecularSubtype::LuminalB => "Luminal B-like",
            MolecularSubtype::Her2Positive => "HER2-positive",
            MolecularSubtype::TripleNegative => "Triple-negative",
        }
    }
}

/// Clinical input for the continuous scoring pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalInput {
    pub age: u8,
    pub menopausal_status: MenopausalStatus,
    pub tumor_size_cm: f64,
    pub nodes_positive: u32,
    pub tumor_grade: TumorGrade,
    pub er_status: ReceptorStatus,
    pub pr_status: ReceptorStatus,
    pub her2_status: Her2Status,
    pub ki67_percent: f64,
    pub histological_type: HistologicalType,
}

/// Clinical input for the banded decision-tree pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandedInput {
    pub age: u8,
    pub menopausal_status: MenopausalStatus,
    pub nodal_status: NodalStatusBand,
    pub tumor_size: TumorSizeBand,
    pub tumor_grade: TumorGrade,
    pub ki67_percent: f64,
}

/// The two scoring pathways accepted at intake. Kept as distinct variants
/// because downstream consumers depend on either shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pathway", rename_all = "snake_case")]
pub enum PathwayInput {
    Composite(ClinicalInput),
    DecisionTree(BandedInput),
}

/// A complete submission: clinician context, patient identity, and the
/// clinical input for one pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub clinician: ClinicianContext,
    pub patient: PatientReference,
    pub assessed_on: NaiveDate,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub input: PathwayInput,
}

/// Factors that can contribute points to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskFactorKind {
    NottinghamIndex,
    MolecularSubtype,
    Proliferation,
    Age,
    Histology,
    TumorSize,
    NodalInvolvement,
    HighGrade,
}

/// Discrete contribution to a composite assessment, allowing transparent
/// audits of how the score was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: RiskFactorKind,
    pub points: f64,
    pub note: Option<String>,
}

use serde::{Deserialize, Serialize};

use super::domain::{Her2Status, ReceptorStatus};

/// Treatment recommendations grouped by modality. List order within each
/// modality is the order the rules fired and is part of the output contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationPlan {
    pub chemotherapy: Vec<String>,
    pub hormonal: Vec<String>,
    pub targeted: Vec<String>,
    pub radiation: Vec<String>,
    pub surgery: Vec<String>,
    pub follow_up: Vec<String>,
}

impl RecommendationPlan {
    /// Modalities with their display headings, in presentation order.
    pub fn sections(&self) -> [(&'static str, &[String]); 6] {
        [
            ("Chemotherapy", self.chemotherapy.as_slice()),
            ("Hormonal", self.hormonal.as_slice()),
            ("Targeted", self.targeted.as_slice()),
            ("Radiation", self.radiation.as_slice()),
            ("Surgery", self.surgery.as_slice()),
            ("Follow-up", self.follow_up.as_slice()),
        ]
    }

    /// Flattened single-line rendering used by record views.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        for (heading, entries) in self.sections() {
            for entry in entries {
                parts.push(format!("{heading}: {entry}"));
            }
        }
        parts.join("; ")
    }
}

/// Derive the treatment plan from the risk score and raw clinical fields.
///
/// Each modality's trigger is evaluated independently, so several populate
/// at once. A missing score (the banded pathway produces none) fails every
/// score threshold, degrading score-gated branches to their lower-intensity
/// variant.
pub fn treatment_plan(
    risk_score: Option<f64>,
    er_status: ReceptorStatus,
    pr_status: ReceptorStatus,
    her2_status: Her2Status,
    age: u8,
    tumor_size_cm: f64,
    nodes_positive: u32,
) -> RecommendationPlan {
    let score_at_least = |threshold: f64| risk_score.is_some_and(|score| score >= threshold);
    let mut plan = RecommendationPlan::default();

    if score_at_least(30.0) || nodes_positive > 0 || tumor_size_cm > 2.0 {
        if age < 70 {
            if score_at_least(50.0) {
                plan.chemotherapy
                    .push("Anthracycline + Taxane based regimen".to_string());
                plan.chemotherapy
                    .push("Consider dose-dense protocols".to_string());
            } else {
                plan.chemotherapy
                    .push("Standard adjuvant chemotherapy".to_string());
                plan.chemotherapy.push("TC or AC-T regimen".to_string());
            }
        } else {
            plan.chemotherapy
                .push("Consider single-agent chemotherapy".to_string());
            plan.chemotherapy
                .push("Assess comorbidities and performance status".to_string());
        }
    }

    if er_status.is_positive() || pr_status.is_positive() {
        if age < 50 {
            plan.hormonal
                .push("Tamoxifen 20mg daily for 5-10 years".to_string());
            plan.hormonal
                .push("Consider ovarian suppression (GnRH agonist)".to_string());
            if score_at_least(50.0) {
                plan.hormonal.push("Consider extended therapy".to_string());
            }
        } else {
            plan.hormonal
                .push("Aromatase inhibitor (preferred) or Tamoxifen".to_string());
            plan.hormonal.push("Duration: 5-10 years".to_string());
            if score_at_least(40.0) {
                plan.hormonal
                    .push("Consider extended AI therapy".to_string());
            }
        }
    }

    if her2_status == Her2Status::Positive {
        plan.targeted
            .push("Trastuzumab 1 year (every 3 weeks)".to_string());
        if score_at_least(50.0) {
            plan.targeted
                .push("Consider dual HER2 blockade (Trastuzumab + Pertuzumab)".to_string());
        }
        plan.targeted
            .push("Monitor cardiac function (ECHO/MUGA)".to_string());
    }

    if tumor_size_cm > 4.0 || nodes_positive >= 4 {
        plan.radiation
            .push("Post-mastectomy radiation therapy indicated".to_string());
    }
    plan.radiation
        .push("Breast conserving surgery: whole breast radiation".to_string());
    plan.radiation
        .push("Consider hypofractionated regimens".to_string());
    if nodes_positive > 0 {
        plan.radiation
            .push("Include regional lymph nodes".to_string());
    }

    if tumor_size_cm <= 3.0 && nodes_positive <= 2 {
        plan.surgery
            .push("Breast conserving surgery option".to_string());
        plan.surgery.push("Sentinel lymph node biopsy".to_string());
    } else {
        plan.surgery.push("Consider mastectomy".to_string());
        plan.surgery
            .push("Axillary lymph node dissection may be needed".to_string());
    }

    plan.follow_up
        .push("Clinical examination every 3-6 months for 3 years".to_string());
    plan.follow_up.push("Annual mammography".to_string());
    plan.follow_up
        .push("Monitor for treatment-related side effects".to_string());
    if score_at_least(50.0) {
        plan.follow_up
            .push("More frequent monitoring in first 2 years".to_string());
        plan.follow_up
            .push("Consider additional imaging (MRI/CT)".to_string());
    }

    plan
}

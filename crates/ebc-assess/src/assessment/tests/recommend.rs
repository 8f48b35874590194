use crate::assessment::domain::{Her2Status, ReceptorStatus};
use crate::assessment::recommend::treatment_plan;

#[test]
fn identical_inputs_yield_identical_plans() {
    let first = treatment_plan(
        Some(62.0),
        ReceptorStatus::Positive,
        ReceptorStatus::Negative,
        Her2Status::Positive,
        47,
        3.2,
        5,
    );
    let second = treatment_plan(
        Some(62.0),
        ReceptorStatus::Positive,
        ReceptorStatus::Negative,
        Her2Status::Positive,
        47,
        3.2,
        5,
    );

    assert_eq!(first, second);
}

#[test]
fn high_score_younger_patient_gets_intensified_regimens() {
    let plan = treatment_plan(
        Some(72.0),
        ReceptorStatus::Positive,
        ReceptorStatus::Positive,
        Her2Status::Positive,
        45,
        6.0,
        12,
    );

    assert_eq!(
        plan.chemotherapy,
        vec![
            "Anthracycline + Taxane based regimen".to_string(),
            "Consider dose-dense protocols".to_string(),
        ]
    );
    assert_eq!(
        plan.hormonal,
        vec![
            "Tamoxifen 20mg daily for 5-10 years".to_string(),
            "Consider ovarian suppression (GnRH agonist)".to_string(),
            "Consider extended therapy".to_string(),
        ]
    );
    assert_eq!(
        plan.targeted,
        vec![
            "Trastuzumab 1 year (every 3 weeks)".to_string(),
            "Consider dual HER2 blockade (Trastuzumab + Pertuzumab)".to_string(),
            "Monitor cardiac function (ECHO/MUGA)".to_string(),
        ]
    );
    assert_eq!(
        plan.radiation,
        vec![
            "Post-mastectomy radiation therapy indicated".to_string(),
            "Breast conserving surgery: whole breast radiation".to_string(),
            "Consider hypofractionated regimens".to_string(),
            "Include regional lymph nodes".to_string(),
        ]
    );
    assert_eq!(
        plan.surgery,
        vec![
            "Consider mastectomy".to_string(),
            "Axillary lymph node dissection may be needed".to_string(),
        ]
    );
    assert_eq!(
        plan.follow_up,
        vec![
            "Clinical examination every 3-6 months for 3 years".to_string(),
            "Annual mammography".to_string(),
            "Monitor for treatment-related side effects".to_string(),
            "More frequent monitoring in first 2 years".to_string(),
            "Consider additional imaging (MRI/CT)".to_string(),
        ]
    );
}

#[test]
fn older_patients_get_single_agent_chemotherapy_and_ai_preference() {
    let plan = treatment_plan(
        Some(55.0),
        ReceptorStatus::Positive,
        ReceptorStatus::Negative,
        Her2Status::Negative,
        76,
        2.8,
        1,
    );

    assert_eq!(
        plan.chemotherapy,
        vec![
            "Consider single-agent chemotherapy".to_string(),
            "Assess comorbidities and performance status".to_string(),
        ]
    );
    assert_eq!(
        plan.hormonal,
        vec![
            "Aromatase inhibitor (preferred) or Tamoxifen".to_string(),
            "Duration: 5-10 years".to_string(),
            "Consider extended AI therapy".to_string(),
        ]
    );
    assert!(plan.targeted.is_empty());
}

#[test]
fn missing_score_degrades_to_lower_intensity_branches() {
    let plan = treatment_plan(
        None,
        ReceptorStatus::Positive,
        ReceptorStatus::Negative,
        Her2Status::Positive,
        45,
        2.5,
        0,
    );

    // Chemotherapy still triggers on tumor size, but at standard intensity.
    assert_eq!(
        plan.chemotherapy,
        vec![
            "Standard adjuvant chemotherapy".to_string(),
            "TC or AC-T regimen".to_string(),
        ]
    );
    assert_eq!(
        plan.hormonal,
        vec![
            "Tamoxifen 20mg daily for 5-10 years".to_string(),
            "Consider ovarian suppression (GnRH agonist)".to_string(),
        ]
    );
    assert_eq!(
        plan.targeted,
        vec![
            "Trastuzumab 1 year (every 3 weeks)".to_string(),
            "Monitor cardiac function (ECHO/MUGA)".to_string(),
        ]
    );
    assert_eq!(plan.follow_up.len(), 3);
}

#[test]
fn quiet_presentations_skip_systemic_therapy() {
    let plan = treatment_plan(
        Some(20.0),
        ReceptorStatus::Negative,
        ReceptorStatus::Negative,
        Her2Status::Negative,
        55,
        1.5,
        0,
    );

    assert!(plan.chemotherapy.is_empty());
    assert!(plan.hormonal.is_empty());
    assert!(plan.targeted.is_empty());
    assert_eq!(
        plan.radiation,
        vec![
            "Breast conserving surgery: whole breast radiation".to_string(),
            "Consider hypofractionated regimens".to_string(),
        ]
    );
    assert_eq!(
        plan.surgery,
        vec![
            "Breast conserving surgery option".to_string(),
            "Sentinel lymph node biopsy".to_string(),
        ]
    );
}

#[test]
fn summary_flattens_sections_in_presentation_order() {
    let plan = treatment_plan(
        Some(20.0),
        ReceptorStatus::Negative,
        ReceptorStatus::Negative,
        Her2Status::Negative,
        55,
        1.5,
        0,
    );

    let summary = plan.summary();
    assert!(summary.starts_with("Radiation: Breast conserving surgery"));
    assert!(summary.contains("Follow-up: Annual mammography"));
}

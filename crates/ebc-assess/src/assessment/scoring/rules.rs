use super::super::domain::{
    ClinicalInput, HistologicalType, MolecularSubtype, RiskFactorKind, ScoreComponent, TumorGrade,
};
use super::super::npi::{self, NottinghamIndex};
use super::config::ScoringConfig;

const LUMINAL_A_POINTS: f64 = 5.0;
const LUMINAL_B_POINTS: f64 = 10.0;
const HER2_POSITIVE_POINTS: f64 = 20.0;
const TRIPLE_NEGATIVE_POINTS: f64 = 25.0;

const KI67_LOW_POINTS: f64 = 2.0;
const KI67_MODERATE_POINTS: f64 = 8.0;
const KI67_HIGH_POINTS: f64 = 15.0;

const YOUNG_AGE_POINTS: f64 = 10.0;
const PREMENOPAUSAL_AGE_POINTS: f64 = 5.0;
const ELDERLY_POINTS: f64 = 3.0;

const LARGE_TUMOR_POINTS: f64 = 5.0;
const EXTENSIVE_NODES_POINTS: f64 = 5.0;
const HIGH_GRADE_POINTS: f64 = 3.0;

pub(crate) struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub total: f64,
    pub npi: NottinghamIndex,
    pub subtype: MolecularSubtype,
}

const fn subtype_points(subtype: MolecularSubtype) -> f64 {
    match subtype {
        MolecularSubtype::LuminalA => LUMINAL_A_POINTS,
        MolecularSubtype::LuminalB => LUMINAL_B_POINTS,
        MolecularSubtype::Her2Positive => HER2_POSITIVE_POINTS,
        MolecularSubtype::TripleNegative => TRIPLE_NEGATIVE_POINTS,
    }
}

const fn histology_points(histology: HistologicalType) -> f64 {
    match histology {
        HistologicalType::InvasiveDuctal => 2.0,
        HistologicalType::InvasiveLobular => 1.0,
        HistologicalType::MixedDuctalLobular => 3.0,
        HistologicalType::Inflammatory => 5.0,
        HistologicalType::Other => 2.0,
    }
}

/// Accumulate the weighted contributions for one input.
///
/// Components are pushed in evaluation order; the notes they carry, in that
/// same order, form the patient-facing risk factor list.
pub(crate) fn score_input(input: &ClinicalInput, config: &ScoringConfig) -> ScoreBreakdown {
    let mut components = Vec::new();
    let mut total = 0.0;

    let index = npi::compute(input.tumor_size_cm, input.nodes_positive, input.tumor_grade);
    let npi_points = index.npi / config.npi_ceiling * config.npi_weight;
    components.push(ScoreComponent {
        factor: RiskFactorKind::NottinghamIndex,
        points: npi_points,
        note: None,
    });
    total += npi_points;

    let subtype = MolecularSubtype::classify(input.er_status, input.pr_status, input.her2_status);
    let molecular_points = subtype_points(subtype);
    components.push(ScoreComponent {
        factor: RiskFactorKind::MolecularSubtype,
        points: molecular_points,
        note: Some(format!("Molecular subtype: {}", subtype.label())),
    });
    total += molecular_points;

    let (ki67_points, ki67_note) = if input.ki67_percent < config.ki67_moderate_cutoff {
        (KI67_LOW_POINTS, "Low proliferation (Ki67 < 14%)")
    } else if input.ki67_percent < config.ki67_high_cutoff {
        (KI67_MODERATE_POINTS, "Moderate proliferation (Ki67 14-30%)")
    } else {
        (KI67_HIGH_POINTS, "High proliferation (Ki67 > 30%)")
    };
    components.push(ScoreComponent {
        factor: RiskFactorKind::Proliferation,
        points: ki67_points,
        note: Some(ki67_note.to_string()),
    });
    total += ki67_points;

    let (age_points, age_note) = if input.age < config.young_age_cutoff {
        (YOUNG_AGE_POINTS, Some("Young age (< 35 years)"))
    } else if input.age < config.premenopausal_age_cutoff {
        (PREMENOPAUSAL_AGE_POINTS, Some("Premenopausal age"))
    } else if input.age > config.elderly_age_cutoff {
        (ELDERLY_POINTS, Some("Elderly (> 70 years)"))
    } else {
        (0.0, None)
    };
    components.push(ScoreComponent {
        factor: RiskFactorKind::Age,
        points: age_points,
        note: age_note.map(str::to_string),
    });
    total += age_points;

    let hist_points = histology_points(input.histological_type);
    components.push(ScoreComponent {
        factor: RiskFactorKind::Histology,
        points: hist_points,
        note: None,
    });
    total += hist_points;

    if input.tumor_size_cm > config.large_tumor_cutoff_cm {
        components.push(ScoreComponent {
            factor: RiskFactorKind::TumorSize,
            points: LARGE_TUMOR_POINTS,
            note: Some("Large tumor (> 5 cm)".to_string()),
        });
        total += LARGE_TUMOR_POINTS;
    }

    if input.nodes_positive > config.extensive_nodes_cutoff {
        components.push(ScoreComponent {
            factor: RiskFactorKind::NodalInvolvement,
            points: EXTENSIVE_NODES_POINTS,
            note: Some("Extensive nodal involvement (> 10 nodes)".to_string()),
        });
        total += EXTENSIVE_NODES_POINTS;
    }

    if input.tumor_grade == TumorGrade::Grade3 {
        components.push(ScoreComponent {
            factor: RiskFactorKind::HighGrade,
            points: HIGH_GRADE_POINTS,
            note: Some("High-grade tumor".to_string()),
        });
        total += HIGH_GRADE_POINTS;
    }

    ScoreBreakdown {
        components,
        total,
        npi: index,
        subtype,
    }
}

use crate::infra::{default_scoring_config, InMemoryAssessmentRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::sync::Arc;

use ebc_assess::assessment::{
    AssessmentOutcome, AssessmentRepository, AssessmentService, AssessmentSubmission, BandedInput,
    ClinicalInput, ClinicianContext, Her2Status, HistologicalType, MenopausalStatus,
    NodalStatusBand, PathwayInput, PatientReference, ReceptorStatus, TumorGrade, TumorSizeBand,
};
use ebc_assess::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Assessment date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub(crate) assessed_on: Option<NaiveDate>,
    /// Skip the banded decision-tree portion of the demo.
    #[arg(long)]
    pub(crate) skip_banded: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        assessed_on,
        skip_banded,
    } = args;

    let assessed_on = assessed_on.unwrap_or_else(|| Local::now().date_naive());

    println!("EBC risk assessment demo");

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let service = Arc::new(AssessmentService::new(
        repository.clone(),
        default_scoring_config(),
    ));

    let record = match service.submit(composite_submission(assessed_on)) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };

    let view = record.status_view();
    println!(
        "- Scored assessment {} -> {}",
        view.assessment_id.0, view.summary
    );

    if let AssessmentOutcome::Composite(assessment) = &record.outcome {
        println!(
            "  NPI {:.1} (size {} / node {} / grade {})",
            assessment.npi.npi,
            assessment.npi.size_score,
            assessment.npi.node_score,
            assessment.npi.grade_score
        );
        println!(
            "  Molecular subtype: {}",
            assessment.molecular_subtype.label()
        );
        println!("  Risk factors:");
        for factor in &assessment.risk_factors {
            println!("    - {factor}");
        }
        println!("  Score components:");
        for component in &assessment.components {
            println!("    - {:?}: {:.1}", component.factor, component.points);
        }
        println!("  Treatment plan:");
        for (heading, entries) in assessment.recommendations.sections() {
            for entry in entries {
                println!("    - {heading}: {entry}");
            }
        }
    }

    let stored_view = match repository.fetch(&record.assessment_id) {
        Ok(Some(record)) => record.status_view(),
        Ok(None) => {
            println!("  Repository lookup returned no record");
            return Ok(());
        }
        Err(err) => {
            println!("  Repository unavailable: {}", err);
            return Ok(());
        }
    };
    match serde_json::to_string_pretty(&stored_view) {
        Ok(json) => println!("  Public status payload:\n{}", json),
        Err(err) => println!("  Public status payload unavailable: {}", err),
    }

    if skip_banded {
        return Ok(());
    }

    println!("\nBanded decision-tree demo");
    match service.submit(banded_submission(assessed_on)) {
        Ok(record) => {
            println!(
                "- Classified assessment {} -> {}",
                record.assessment_id.0,
                record.outcome.risk_label()
            );
        }
        Err(err) => println!("  Submission rejected: {}", err),
    }

    Ok(())
}

fn demo_clinician() -> ClinicianContext {
    ClinicianContext {
        clinician_id: "dr_demo_general2026".to_string(),
        hospital_code: "GENERAL2026".to_string(),
        department: Some("Oncology".to_string()),
    }
}

fn composite_submission(assessed_on: NaiveDate) -> AssessmentSubmission {
    AssessmentSubmission {
        clinician: demo_clinician(),
        patient: PatientReference {
            record_id: "MRN-DEMO-001".to_string(),
            display_name: "Demo Patient".to_string(),
        },
        assessed_on,
        notes: Some("Demonstration record; not a real patient".to_string()),
        input: PathwayInput::Composite(ClinicalInput {
            age: 52,
            menopausal_status: MenopausalStatus::PostMenopausal,
            tumor_size_cm: 2.4,
            nodes_positive: 2,
            tumor_grade: TumorGrade::Grade2,
            er_status: ReceptorStatus::Positive,
            pr_status: ReceptorStatus::Negative,
            her2_status: Her2Status::Positive,
            ki67_percent: 22.0,
            histological_type: HistologicalType::InvasiveDuctal,
        }),
    }
}

fn banded_submission(assessed_on: NaiveDate) -> AssessmentSubmission {
    AssessmentSubmission {
        clinician: demo_clinician(),
        patient: PatientReference {
            record_id: "MRN-DEMO-002".to_string(),
            display_name: "Demo Patient".to_string(),
        },
        assessed_on,
        notes: None,
        input: PathwayInput::DecisionTree(BandedInput {
            age: 47,
            menopausal_status: MenopausalStatus::PreMenopausal,
            nodal_status: NodalStatusBand::N0,
            tumor_size: TumorSizeBand::T2,
            tumor_grade: TumorGrade::Grade2,
            ki67_percent: 27.0,
        }),
    }
}

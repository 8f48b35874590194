use serde::{Deserialize, Serialize};

use super::domain::{BandedInput, NodalStatusBand, TumorGrade, TumorSizeBand};

/// Binary risk class produced by the banded pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryRisk {
    Low,
    High,
}

impl BinaryRisk {
    pub const fn label(self) -> &'static str {
        match self {
            BinaryRisk::Low => "Low Risk",
            BinaryRisk::High => "High Risk",
        }
    }
}

/// Ki67 split applied to the node-negative, mid-size, Grade 2 branch.
const KI67_SPLIT_PERCENT: f64 = 20.0;

/// Raised when no classification rule matches. Guessing a risk class is
/// unacceptable here, so the caller gets a typed outcome instead of a
/// default.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "no classification rule matched {nodal_status:?}/{tumor_size:?}/{tumor_grade:?} with Ki67 {ki67_percent}"
)]
pub struct IndeterminateRisk {
    pub nodal_status: NodalStatusBand,
    pub tumor_size: TumorSizeBand,
    pub tumor_grade: TumorGrade,
    pub ki67_percent: f64,
}

/// Classify a banded input into a binary risk class.
///
/// Rules are tried in order and partition the banded space: any nodal
/// involvement is high risk, node-negative inputs split on size band, and
/// the T2/Grade 2 remainder splits on the Ki67 threshold (inclusive on the
/// high side).
pub fn classify(input: &BandedInput) -> Result<BinaryRisk, IndeterminateRisk> {
    let class = match (input.nodal_status, input.tumor_size, input.tumor_grade) {
        (NodalStatusBand::N2Plus, _, _) => Some(BinaryRisk::High),
        (NodalStatusBand::N1, _, _) => Some(BinaryRisk::High),
        (NodalStatusBand::N0, TumorSizeBand::T3, _) => Some(BinaryRisk::High),
        (NodalStatusBand::N0, TumorSizeBand::T1, _) => Some(BinaryRisk::Low),
        (NodalStatusBand::N0, TumorSizeBand::T2, TumorGrade::Grade3) => Some(BinaryRisk::High),
        (NodalStatusBand::N0, TumorSizeBand::T2, TumorGrade::Grade1) => Some(BinaryRisk::Low),
        (NodalStatusBand::N0, TumorSizeBand::T2, TumorGrade::Grade2) => {
            if input.ki67_percent >= KI67_SPLIT_PERCENT {
                Some(BinaryRisk::High)
            } else if input.ki67_percent < KI67_SPLIT_PERCENT {
                Some(BinaryRisk::Low)
            } else {
                // A non-finite Ki67 satisfies neither comparison.
                None
            }
        }
    };

    class.ok_or(IndeterminateRisk {
        nodal_status: input.nodal_status,
        tumor_size: input.tumor_size,
        tumor_grade: input.tumor_grade,
        ki67_percent: input.ki67_percent,
    })
}

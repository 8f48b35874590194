use serde::{Deserialize, Serialize};

use super::domain::TumorGrade;

/// Nottingham Prognostic Index with its three sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NottinghamIndex {
    pub npi: f64,
    pub size_score: u8,
    pub node_score: u8,
    pub grade_score: u8,
}

/// Compute the Nottingham Prognostic Index.
///
/// npi = 0.2 × tumor size (cm) + node score + grade score. The size and
/// node sub-scores band at 2/5 cm and 0/3 nodes; there are no error cases.
pub fn compute(tumor_size_cm: f64, nodes_positive: u32, grade: TumorGrade) -> NottinghamIndex {
    let size_score: u8 = if tumor_size_cm <= 2.0 {
        1
    } else if tumor_size_cm <= 5.0 {
        2
    } else {
        3
    };

    let node_score: u8 = if nodes_positive == 0 {
        1
    } else if nodes_positive <= 3 {
        2
    } else {
        3
    };

    let grade_score: u8 = match grade {
        TumorGrade::Grade1 => 1,
        TumorGrade::Grade2 => 2,
        TumorGrade::Grade3 => 3,
    };

    NottinghamIndex {
        npi: 0.2 * tumor_size_cm + f64::from(node_score) + f64::from(grade_score),
        size_score,
        node_score,
        grade_score,
    }
}

//! Risk stratification core for early breast cancer assessments.
//!
//! The `assessment` module holds the scoring pathways (Nottingham index,
//! composite weighted score, banded decision tree) and the treatment
//! recommendation generator, together with the intake validation guard and
//! the service/repository seams a host wires up. `config`, `telemetry`, and
//! `error` carry the application plumbing shared with the HTTP service.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

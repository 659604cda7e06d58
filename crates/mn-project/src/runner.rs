//! Solve every case of a job.

use crate::schema::{JobFile, LoadCase};
use mn_core::units::{hz, ohm};
use mn_network::{Load, MatchError, MatchReport, MatchRequest, solve};
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of one case; a failing case does not stop the batch.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub id: String,
    #[serde(flatten)]
    pub result: CaseResult,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseResult {
    Solved { report: MatchReport },
    Failed { error: String },
}

impl CaseOutcome {
    pub fn report(&self) -> Option<&MatchReport> {
        match &self.result {
            CaseResult::Solved { report } => Some(report),
            CaseResult::Failed { .. } => None,
        }
    }
}

pub fn request_for(job: &JobFile, case: &LoadCase) -> Result<MatchRequest, MatchError> {
    let f = job
        .frequency_for(case)
        .ok_or(MatchError::InvalidInput {
            what: "frequency",
            value: f64::NAN,
        })?;
    Ok(MatchRequest::new(
        Load::new(case.resistance_ohm, case.reactance_ohm),
        ohm(job.reference_for(case)),
        hz(f),
    ))
}

pub fn run_job(job: &JobFile) -> Vec<CaseOutcome> {
    job.cases
        .iter()
        .map(|case| {
            let result = match request_for(job, case).and_then(|req| solve(&req)) {
                Ok(report) => {
                    if report.solutions.is_empty() && !report.already_matched {
                        warn!(case = %case.id, "no matching network found");
                    } else {
                        info!(
                            case = %case.id,
                            solutions = report.solutions.len(),
                            already_matched = report.already_matched,
                            "case solved"
                        );
                    }
                    CaseResult::Solved { report }
                }
                Err(e) => {
                    warn!(case = %case.id, error = %e, "case failed");
                    CaseResult::Failed {
                        error: e.to_string(),
                    }
                }
            };
            CaseOutcome {
                id: case.id.clone(),
                result,
            }
        })
        .collect()
}

//! Job file validation logic.

use crate::schema::{JobFile, LoadCase};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing value: {field} for case {id}")]
    Missing { field: String, id: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_job(job: &JobFile) -> Result<(), ValidationError> {
    if job.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: job.version,
        });
    }

    ensure_positive("reference_ohm", job.reference_ohm)?;
    if let Some(f) = job.frequency_hz {
        ensure_positive("frequency_hz", f)?;
    }

    let mut ids = HashSet::new();
    for case in &job.cases {
        if case.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "id".to_string(),
                value: format!("{:?}", case.id),
                reason: "must not be empty".to_string(),
            });
        }
        if !ids.insert(case.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: case.id.clone(),
                context: "cases".to_string(),
            });
        }
        validate_case(job, case)?;
    }

    Ok(())
}

fn validate_case(job: &JobFile, case: &LoadCase) -> Result<(), ValidationError> {
    ensure_positive(&format!("{}.resistance_ohm", case.id), case.resistance_ohm)?;
    if !case.reactance_ohm.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: format!("{}.reactance_ohm", case.id),
            value: case.reactance_ohm.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    if let Some(z0) = case.reference_ohm {
        ensure_positive(&format!("{}.reference_ohm", case.id), z0)?;
    }
    match job.frequency_for(case) {
        Some(f) => ensure_positive(&format!("{}.frequency_hz", case.id), f),
        None => Err(ValidationError::Missing {
            field: "frequency_hz".to_string(),
            id: case.id.clone(),
        }),
    }
}

fn ensure_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        })
    }
}

//! mn-project: batch job file format, validation and runner.

pub mod migrate;
pub mod runner;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use runner::{CaseOutcome, CaseResult, run_job};
pub use schema::*;
pub use validate::{ValidationError, validate_job};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<JobFile> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn parse_yaml(content: &str) -> ProjectResult<JobFile> {
    let mut job: JobFile = serde_yaml::from_str(content)?;
    job = migrate_to_latest(job)?;
    validate_job(&job)?;
    Ok(job)
}

pub fn save_yaml(path: &std::path::Path, job: &JobFile) -> ProjectResult<()> {
    validate_job(job)?;
    let content = serde_yaml::to_string(job)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<JobFile> {
    let content = std::fs::read_to_string(path)?;
    let mut job: JobFile = serde_json::from_str(&content)?;
    job = migrate_to_latest(job)?;
    validate_job(&job)?;
    Ok(job)
}

pub fn save_json(path: &std::path::Path, job: &JobFile) -> ProjectResult<()> {
    validate_job(job)?;
    let content = serde_json::to_string_pretty(job)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Pick the loader from the file extension; anything but `.json` reads as YAML.
pub fn load_any(path: &std::path::Path) -> ProjectResult<JobFile> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}

//! Schema migration framework.

use crate::ProjectError;
use crate::schema::JobFile;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut job: JobFile) -> Result<JobFile, ProjectError> {
    while job.version < LATEST_VERSION {
        job = migrate_one_version(job)?;
    }
    Ok(job)
}

fn migrate_one_version(job: JobFile) -> Result<JobFile, ProjectError> {
    match job.version {
        0 => migrate_v0_to_v1(job),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files had no name; derive one from the first case.
fn migrate_v0_to_v1(mut job: JobFile) -> Result<JobFile, ProjectError> {
    if job.name.is_empty() {
        job.name = match job.cases.first() {
            Some(case) => format!("{} match", case.id),
            None => "untitled".to_string(),
        };
    }
    job.version = 1;
    Ok(job)
}

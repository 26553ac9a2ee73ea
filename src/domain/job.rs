use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub id: i32,
    pub company_id: i32,
    pub title: String,
    /// Sanitized HTML produced by the external rich-text editor.
    pub description: String,
    pub location: String,
    pub employment_type: String,
    pub category: String,
    pub level: String,
    pub salary: String,
    pub status: JobStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewJob {
    pub company_id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub employment_type: String,
    pub category: String,
    pub level: String,
    pub salary: String,
    pub status: JobStatus,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateJob {
    pub title: String,
    pub description: String,
    pub location: String,
    pub employment_type: String,
    pub category: String,
    pub level: String,
    pub salary: String,
    pub status: JobStatus,
}

/// Lifecycle state of a job posting. Only `Open` jobs appear on the public
/// board.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Draft,
    Open,
    Closed,
}

impl JobStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            JobStatus::Draft => "draft",
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
        }
    }

    /// Every status, in the order filter panels list them.
    pub const ALL: [JobStatus; 3] = [JobStatus::Draft, JobStatus::Open, JobStatus::Closed];
}

impl Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for JobStatus {
    type Error = TypeConstraintError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "draft" => Ok(JobStatus::Draft),
            "open" => Ok(JobStatus::Open),
            "closed" => Ok(JobStatus::Closed),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Employment types offered by the application; a closed vocabulary rendered
/// as a static filter section.
pub const EMPLOYMENT_TYPES: &[&str] = &["full-time", "part-time", "contract", "internship"];

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a job posting. Postings are never deleted; they transition
/// from `open` to `closed` or `filled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Closed,
    Filled,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
            JobStatus::Filled => "filled",
        }
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(JobStatus::Open),
            "closed" => Ok(JobStatus::Closed),
            "filled" => Ok(JobStatus::Filled),
            other => Err(format!("unknown job status '{other}'")),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job entity - a paid posting looking for a specific craft.
///
/// `applications_count` mirrors the job-application ledger; only the
/// participation ledger mutates it.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: Uuid,
    pub posted_by: Uuid,
    pub title: String,
    pub description: String,
    pub craft_required: String,
    pub additional_crafts: Vec<String>,
    pub experience_level: String,
    pub job_type: String,
    pub location: Option<String>,
    pub remote_allowed: bool,
    pub budget_min: Option<i32>,
    pub budget_max: Option<i32>,
    pub currency: String,
    pub deadline: Option<NaiveDate>,
    pub status: JobStatus,
    pub applications_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Create a new open job posting with zero applications.
    pub fn new(
        posted_by: Uuid,
        title: String,
        description: String,
        craft_required: String,
        experience_level: String,
        job_type: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            posted_by,
            title,
            description,
            craft_required,
            additional_crafts: Vec::new(),
            experience_level,
            job_type,
            location: None,
            remote_allowed: false,
            budget_min: None,
            budget_max: None,
            currency: "USD".to_string(),
            deadline: None,
            status: JobStatus::Open,
            applications_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

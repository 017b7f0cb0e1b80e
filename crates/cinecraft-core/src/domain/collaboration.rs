use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a collaboration listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollaborationStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl CollaborationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CollaborationStatus::Open => "open",
            CollaborationStatus::InProgress => "in-progress",
            CollaborationStatus::Completed => "completed",
            CollaborationStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for CollaborationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(CollaborationStatus::Open),
            "in-progress" => Ok(CollaborationStatus::InProgress),
            "completed" => Ok(CollaborationStatus::Completed),
            "cancelled" => Ok(CollaborationStatus::Cancelled),
            other => Err(format!("unknown collaboration status '{other}'")),
        }
    }
}

impl fmt::Display for CollaborationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collaboration entity - a project looking for crew.
///
/// `current_collaborators` counts the creator, so it is never below 1. Only
/// the participation ledger (and the create-with-creator insert) touch it.
#[derive(Debug, Clone)]
pub struct Collaboration {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub title: String,
    pub description: String,
    pub project_type: Option<String>,
    pub needed_crafts: Vec<String>,
    pub timeline: Option<String>,
    pub budget_range: Option<String>,
    pub location: Option<String>,
    pub remote_allowed: bool,
    pub status: CollaborationStatus,
    pub max_collaborators: Option<i32>,
    pub current_collaborators: i32,
    pub created_at: DateTime<Utc>,
}

impl Collaboration {
    /// Create a new open collaboration. The creator is the first
    /// collaborator, so the count starts at 1.
    pub fn new(creator_id: Uuid, title: String, description: String, needed_crafts: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            creator_id,
            title,
            description,
            project_type: None,
            needed_crafts,
            timeline: None,
            budget_range: None,
            location: None,
            remote_allowed: false,
            status: CollaborationStatus::Open,
            max_collaborators: None,
            current_collaborators: 1,
            created_at: Utc::now(),
        }
    }
}

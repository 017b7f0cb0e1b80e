//! Read-model projections returned by the listing endpoints.
//!
//! Every view embeds the owning profile as a nested object; listings never
//! expose a bare foreign key as the only author information.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CollaborationStatus, JobStatus, MediaRef, User};

/// Public projection of a user, safe to serialize (no password hash).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub username: String,
    pub primary_craft: String,
    pub experience_level: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub portfolio_url: Option<String>,
    pub avatar_url: Option<String>,
    pub verified: bool,
    pub is_profile_complete: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            username: user.username,
            primary_craft: user.primary_craft,
            experience_level: user.experience_level,
            bio: user.bio,
            location: user.location,
            skills: user.skills,
            portfolio_url: user.portfolio_url,
            avatar_url: user.avatar_url,
            verified: user.verified,
            is_profile_complete: user.is_profile_complete,
            created_at: user.created_at,
        }
    }
}

/// The profile summary embedded in every listing row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub name: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub primary_craft: String,
    pub verified: bool,
}

/// A feed entry: the post, its author, and the viewer-relative like flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub media: Vec<MediaRef>,
    pub project_title: Option<String>,
    pub craft_tags: Vec<String>,
    pub location: Option<String>,
    pub collaboration_open: bool,
    pub likes_count: i32,
    pub comments_count: i32,
    pub shares_count: i32,
    pub created_at: DateTime<Utc>,
    pub is_liked: bool,
    pub user: AuthorSummary,
}

/// A job listing row with its poster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobView {
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
    pub poster: AuthorSummary,
}

/// A collaboration listing row with its creator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaborationView {
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
    pub creator: AuthorSummary,
}

/// An event listing row with its organizer and the computed attendee count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventView {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub is_virtual: bool,
    pub max_attendees: Option<i32>,
    pub price: Option<f64>,
    pub craft_focus: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub organizer_name: String,
    pub current_attendees: i64,
}

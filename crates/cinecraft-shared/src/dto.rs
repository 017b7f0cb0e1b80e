//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cinecraft_core::domain::views::{CollaborationView, JobView, PostView, UserProfile};

// ---------- auth ----------

/// Request to sign up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub username: String,
    pub primary_craft: String,
    pub experience_level: String,
}

/// Request to sign in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Response for both signup and signin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserProfile,
    pub token: String,
}

// ---------- posts ----------

/// A media attachment reference as submitted by the client. Uploads are out
/// of scope; the URL is stored as provided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaInput {
    pub url: String,
    pub media_type: String,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
    pub project_title: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub collaboration_open: bool,
    pub visibility: Option<String>,
    #[serde(default)]
    pub craft_tags: Vec<String>,
    #[serde(default)]
    pub media: Vec<MediaInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreatedResponse {
    pub success: bool,
    pub post_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub success: bool,
    pub posts: Vec<PostView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub success: bool,
    pub liked: bool,
    pub likes_count: i32,
}

// ---------- jobs ----------

/// Request to create a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub craft_required: String,
    #[serde(default)]
    pub additional_crafts: Vec<String>,
    pub experience_level: String,
    pub job_type: String,
    pub location: Option<String>,
    #[serde(default)]
    pub remote_allowed: bool,
    pub budget_min: Option<i32>,
    pub budget_max: Option<i32>,
    pub currency: Option<String>,
    pub deadline: Option<NaiveDate>,
}

/// Job listing query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobListQuery {
    pub search: Option<String>,
    pub craft: Option<String>,
    pub experience_level: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub remote_only: Option<bool>,
    pub budget_min: Option<i32>,
    pub budget_max: Option<i32>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCreatedResponse {
    pub success: bool,
    pub job_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsResponse {
    pub success: bool,
    pub jobs: Vec<JobView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub success: bool,
    pub application_id: Uuid,
}

// ---------- collaborations ----------

/// Request to create a collaboration listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollaborationRequest {
    pub title: String,
    pub description: String,
    pub project_type: Option<String>,
    pub needed_crafts: Vec<String>,
    pub timeline: Option<String>,
    pub budget_range: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub remote_allowed: bool,
    pub max_collaborators: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaborationCreatedResponse {
    pub success: bool,
    pub collaboration_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaborationsResponse {
    pub success: bool,
    pub collaborations: Vec<CollaborationView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantResponse {
    pub success: bool,
    pub participant_id: Uuid,
}

// ---------- events ----------

/// Request to create an event. The organizer comes from the verified token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    #[serde(default)]
    pub is_virtual: bool,
    pub max_attendees: Option<i32>,
    pub price: Option<f64>,
    #[serde(default)]
    pub craft_focus: Vec<String>,
}

/// Event listing query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventListQuery {
    pub event_type: Option<String>,
    pub craft: Option<String>,
    pub upcoming: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreated {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreatedResponse {
    pub success: bool,
    pub event: EventCreated,
}

// ---------- profile ----------

/// Full-form profile update; absent fields clear the stored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub portfolio_url: Option<String>,
    pub primary_craft: Option<String>,
    pub experience_level: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub is_profile_complete: bool,
}

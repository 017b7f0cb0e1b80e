//! Feed/listing query port: read-side composition of entities, owner
//! profiles, and viewer-relative flags.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::views::{CollaborationView, EventView, JobView, PostView};
use crate::error::RepoError;

/// Page size for the post feed.
pub const FEED_LIMIT: u64 = 20;

/// Page size for job and collaboration listings.
pub const LISTING_LIMIT: u64 = 50;

/// Job listing filters. Absent fields are unconstrained.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Case-insensitive substring over title or description.
    pub search: Option<String>,
    pub craft: Option<String>,
    pub experience_level: Option<String>,
    pub job_type: Option<String>,
    /// Substring match.
    pub location: Option<String>,
    pub remote_only: bool,
    /// Keep jobs whose budget range reaches at least this value.
    pub budget_min: Option<i32>,
    /// Keep jobs whose budget range starts at or below this value.
    pub budget_max: Option<i32>,
    /// Pagination offset into the (filtered, ordered) listing.
    pub offset: Option<u64>,
}

/// Event listing filters.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub event_type: Option<String>,
    /// Membership test against the event's craft_focus list.
    pub craft: Option<String>,
    /// Restrict to events dated today or later.
    pub upcoming: bool,
}

#[async_trait]
pub trait FeedQuery: Send + Sync {
    /// Public posts, newest first, with author profile and the viewer's
    /// `is_liked` flag.
    async fn compose_feed(&self, viewer_id: Uuid) -> Result<Vec<PostView>, RepoError>;

    /// Open jobs matching the filter, newest first, with poster profile.
    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<JobView>, RepoError>;

    /// Open and in-progress collaborations, newest first, with creator
    /// profile.
    async fn list_collaborations(&self) -> Result<Vec<CollaborationView>, RepoError>;

    /// Events matching the filter, ordered by (date, time) ascending, with
    /// organizer name and computed attendee count.
    async fn list_events(&self, filter: &EventFilter) -> Result<Vec<EventView>, RepoError>;
}

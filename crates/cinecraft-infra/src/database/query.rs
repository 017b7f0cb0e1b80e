//! Feed/listing query adapter.
//!
//! Read-side composition: each listing joins the parent entity with its
//! owner's profile summary and, where relevant, viewer-relative flags or
//! computed counts. Filters are typed `Condition` trees; no clause is ever
//! assembled from strings.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::{PgExpr, PgFunc};
use sea_orm::{
    ColumnTrait, Condition, DbConn, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use cinecraft_core::domain::views::{
    AuthorSummary, CollaborationView, EventView, JobView, PostView,
};
use cinecraft_core::domain::{Collaboration, CollaborationStatus, Job, JobStatus, Post, Visibility};
use cinecraft_core::error::RepoError;
use cinecraft_core::ports::{EventFilter, FEED_LIMIT, FeedQuery, JobFilter, LISTING_LIMIT};

use super::entity::{collaboration, event, event_registration, job, post, post_like, user};

/// Postgres-backed feed/listing queries.
pub struct PostgresFeedQuery {
    db: DbConn,
}

impl PostgresFeedQuery {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_err(e: sea_orm::DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

fn author_summary(profile: user::Model) -> AuthorSummary {
    AuthorSummary {
        name: profile.name,
        username: profile.username,
        avatar_url: profile.avatar_url,
        primary_craft: profile.primary_craft,
        verified: profile.verified,
    }
}

/// Build the WHERE tree for a job listing.
///
/// Jobs with an absent budget bound are unconstrained on that side, so a
/// budget filter keeps them.
pub(crate) fn job_filter_condition(filter: &JobFilter) -> Condition {
    let mut condition = Condition::all().add(job::Column::Status.eq(JobStatus::Open.as_str()));

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{search}%");
        condition = condition.add(
            Condition::any()
                .add(Expr::col((job::Entity, job::Column::Title)).ilike(pattern.clone()))
                .add(Expr::col((job::Entity, job::Column::Description)).ilike(pattern)),
        );
    }
    if let Some(craft) = filter.craft.as_deref() {
        condition = condition.add(job::Column::CraftRequired.eq(craft));
    }
    if let Some(level) = filter.experience_level.as_deref() {
        condition = condition.add(job::Column::ExperienceLevel.eq(level));
    }
    if let Some(job_type) = filter.job_type.as_deref() {
        condition = condition.add(job::Column::JobType.eq(job_type));
    }
    if let Some(location) = filter.location.as_deref().filter(|s| !s.is_empty()) {
        condition = condition
            .add(Expr::col((job::Entity, job::Column::Location)).ilike(format!("%{location}%")));
    }
    if filter.remote_only {
        condition = condition.add(job::Column::RemoteAllowed.eq(true));
    }
    if let Some(min) = filter.budget_min {
        condition = condition.add(
            Condition::any()
                .add(job::Column::BudgetMax.is_null())
                .add(job::Column::BudgetMax.gte(min)),
        );
    }
    if let Some(max) = filter.budget_max {
        condition = condition.add(
            Condition::any()
                .add(job::Column::BudgetMin.is_null())
                .add(job::Column::BudgetMin.lte(max)),
        );
    }

    condition
}

/// Build the WHERE tree for an event listing.
pub(crate) fn event_filter_condition(filter: &EventFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(event_type) = filter.event_type.as_deref() {
        condition = condition.add(event::Column::EventType.eq(event_type));
    }
    if let Some(craft) = filter.craft.as_deref() {
        condition = condition.add(
            Expr::val(craft).eq(PgFunc::any(Expr::col((event::Entity, event::Column::CraftFocus)))),
        );
    }
    if filter.upcoming {
        condition = condition.add(event::Column::Date.gte(Utc::now().date_naive()));
    }

    condition
}

#[derive(Debug, FromQueryResult)]
struct AttendeeCount {
    event_id: Uuid,
    count: i64,
}

#[async_trait]
impl FeedQuery for PostgresFeedQuery {
    async fn compose_feed(&self, viewer_id: Uuid) -> Result<Vec<PostView>, RepoError> {
        let rows = post::Entity::find()
            .find_also_related(user::Entity)
            .filter(post::Column::Visibility.eq(Visibility::Public.as_str()))
            .order_by_desc(post::Column::CreatedAt)
            .limit(FEED_LIMIT)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        let post_ids: Vec<Uuid> = rows.iter().map(|(p, _)| p.id).collect();
        let liked: HashSet<Uuid> = if post_ids.is_empty() {
            HashSet::new()
        } else {
            post_like::Entity::find()
                .filter(post_like::Column::UserId.eq(viewer_id))
                .filter(post_like::Column::PostId.is_in(post_ids))
                .all(&self.db)
                .await
                .map_err(query_err)?
                .into_iter()
                .map(|like| like.post_id)
                .collect()
        };

        let posts = rows
            .into_iter()
            .filter_map(|(model, author)| {
                let author = author?;
                let is_liked = liked.contains(&model.id);
                let p: Post = model.into();
                Some(PostView {
                    id: p.id,
                    user_id: p.user_id,
                    content: p.content,
                    media: p.media,
                    project_title: p.project_title,
                    craft_tags: p.craft_tags,
                    location: p.location,
                    collaboration_open: p.collaboration_open,
                    likes_count: p.likes_count,
                    comments_count: p.comments_count,
                    shares_count: p.shares_count,
                    created_at: p.created_at,
                    is_liked,
                    user: author_summary(author),
                })
            })
            .collect();

        Ok(posts)
    }

    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<JobView>, RepoError> {
        let rows = job::Entity::find()
            .find_also_related(user::Entity)
            .filter(job_filter_condition(filter))
            .order_by_desc(job::Column::CreatedAt)
            .offset(filter.offset)
            .limit(LISTING_LIMIT)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        let jobs = rows
            .into_iter()
            .filter_map(|(model, poster)| {
                let poster = poster?;
                let j: Job = model.into();
                Some(JobView {
                    id: j.id,
                    posted_by: j.posted_by,
                    title: j.title,
                    description: j.description,
                    craft_required: j.craft_required,
                    additional_crafts: j.additional_crafts,
                    experience_level: j.experience_level,
                    job_type: j.job_type,
                    location: j.location,
                    remote_allowed: j.remote_allowed,
                    budget_min: j.budget_min,
                    budget_max: j.budget_max,
                    currency: j.currency,
                    deadline: j.deadline,
                    status: j.status,
                    applications_count: j.applications_count,
                    created_at: j.created_at,
                    poster: author_summary(poster),
                })
            })
            .collect();

        Ok(jobs)
    }

    async fn list_collaborations(&self) -> Result<Vec<CollaborationView>, RepoError> {
        let rows = collaboration::Entity::find()
            .find_also_related(user::Entity)
            .filter(collaboration::Column::Status.is_in([
                CollaborationStatus::Open.as_str(),
                CollaborationStatus::InProgress.as_str(),
            ]))
            .order_by_desc(collaboration::Column::CreatedAt)
            .limit(LISTING_LIMIT)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        let collaborations = rows
            .into_iter()
            .filter_map(|(model, creator)| {
                let creator = creator?;
                let c: Collaboration = model.into();
                Some(CollaborationView {
                    id: c.id,
                    creator_id: c.creator_id,
                    title: c.title,
                    description: c.description,
                    project_type: c.project_type,
                    needed_crafts: c.needed_crafts,
                    timeline: c.timeline,
                    budget_range: c.budget_range,
                    location: c.location,
                    remote_allowed: c.remote_allowed,
                    status: c.status,
                    max_collaborators: c.max_collaborators,
                    current_collaborators: c.current_collaborators,
                    created_at: c.created_at,
                    creator: author_summary(creator),
                })
            })
            .collect();

        Ok(collaborations)
    }

    async fn list_events(&self, filter: &EventFilter) -> Result<Vec<EventView>, RepoError> {
        let rows = event::Entity::find()
            .find_also_related(user::Entity)
            .filter(event_filter_condition(filter))
            .order_by_asc(event::Column::Date)
            .order_by_asc(event::Column::Time)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        let event_ids: Vec<Uuid> = rows.iter().map(|(e, _)| e.id).collect();
        let counts: HashMap<Uuid, i64> = if event_ids.is_empty() {
            HashMap::new()
        } else {
            event_registration::Entity::find()
                .select_only()
                .column(event_registration::Column::EventId)
                .column_as(event_registration::Column::Id.count(), "count")
                .filter(event_registration::Column::EventId.is_in(event_ids))
                .group_by(event_registration::Column::EventId)
                .into_model::<AttendeeCount>()
                .all(&self.db)
                .await
                .map_err(query_err)?
                .into_iter()
                .map(|c| (c.event_id, c.count))
                .collect()
        };

        let events = rows
            .into_iter()
            .filter_map(|(model, organizer)| {
                let organizer = organizer?;
                let current_attendees = counts.get(&model.id).copied().unwrap_or(0);
                Some(EventView {
                    id: model.id,
                    organizer_id: model.organizer_id,
                    title: model.title,
                    description: model.description,
                    event_type: model.event_type,
                    date: model.date,
                    time: model.time,
                    location: model.location,
                    is_virtual: model.is_virtual,
                    max_attendees: model.max_attendees,
                    price: model.price,
                    craft_focus: model.craft_focus,
                    created_at: model.created_at.into(),
                    organizer_name: organizer.name,
                    current_attendees,
                })
            })
            .collect();

        Ok(events)
    }
}

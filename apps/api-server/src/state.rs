//! Application state - shared across all handlers.

use std::sync::Arc;

use uuid::Uuid;

use cinecraft_core::domain::{Event, Job, Post};
use cinecraft_core::ports::{
    BaseRepository, CollaborationRepository, FeedQuery, ParticipationLedger, UserRepository,
};
use cinecraft_infra::DbConn;
use cinecraft_infra::database::{
    PostgresCollaborationRepository, PostgresEventRepository, PostgresFeedQuery,
    PostgresJobRepository, PostgresParticipationLedger, PostgresPostRepository,
    PostgresUserRepository,
};

/// Shared application state: one adapter per port, all over the same pool.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn BaseRepository<Post, Uuid>>,
    pub jobs: Arc<dyn BaseRepository<Job, Uuid>>,
    pub collaborations: Arc<dyn CollaborationRepository>,
    pub events: Arc<dyn BaseRepository<Event, Uuid>>,
    pub ledger: Arc<dyn ParticipationLedger>,
    pub feed: Arc<dyn FeedQuery>,
}

impl AppState {
    /// Wire every adapter to the shared pool.
    pub fn new(db: DbConn) -> Self {
        let state = Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            jobs: Arc::new(PostgresJobRepository::new(db.clone())),
            collaborations: Arc::new(PostgresCollaborationRepository::new(db.clone())),
            events: Arc::new(PostgresEventRepository::new(db.clone())),
            ledger: Arc::new(PostgresParticipationLedger::new(db.clone())),
            feed: Arc::new(PostgresFeedQuery::new(db)),
        };

        tracing::info!("Application state initialized");

        state
    }
}

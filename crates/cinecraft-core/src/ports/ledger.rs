//! Participation Ledger port.
//!
//! One subsystem owns every membership relation (likes, job applications,
//! collaboration participants, event registrations) together with the
//! derived counter on the parent entity. Each operation must be atomic and
//! serialized per parent: two concurrent calls against the same parent may
//! never both pass a capacity or uniqueness check that only one can satisfy.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::error::RepoError;

/// Result of a like toggle: the state the caller ended up in, plus the
/// counter after the mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeOutcome {
    pub liked: bool,
    pub likes_count: i32,
}

#[async_trait]
pub trait ParticipationLedger: Send + Sync {
    /// Toggle the (post, user) like row and adjust `likes_count` to match.
    /// Each call flips the state and reports the resulting side.
    async fn toggle_like(&self, post_id: Uuid, user_id: Uuid) -> Result<LikeOutcome, LedgerError>;

    /// Record a job application and bump `applications_count`. Add-once:
    /// re-application is rejected, and the job must still be open.
    async fn apply_to_job(&self, job_id: Uuid, applicant_id: Uuid) -> Result<Uuid, LedgerError>;

    /// Join an open collaboration with the actor's primary craft as their
    /// role, bumping `current_collaborators`. Rejected when already a
    /// participant, when not open, or when at `max_collaborators`.
    async fn join_collaboration(&self, collaboration_id: Uuid, user_id: Uuid) -> Result<Uuid, LedgerError>;

    /// Register for an event. The attendee count is computed from the
    /// ledger (events store no counter) and checked against `max_attendees`.
    async fn register_for_event(&self, event_id: Uuid, user_id: Uuid) -> Result<(), LedgerError>;
}

/// Ledger operation failures. The messages are end-user safe.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The parent entity does not exist.
    #[error("Not found")]
    ParentMissing,

    #[error("You have already applied to this job")]
    AlreadyApplied,

    #[error("You are already part of this collaboration")]
    AlreadyParticipating,

    #[error("Already registered")]
    AlreadyRegistered,

    #[error("This job is no longer accepting applications")]
    JobNotOpen,

    #[error("This collaboration is no longer accepting new members")]
    CollaborationNotOpen,

    #[error("This collaboration is full")]
    CollaborationFull,

    #[error("Event is full")]
    EventFull,

    #[error(transparent)]
    Storage(#[from] RepoError),
}

//! Participation Ledger adapter.
//!
//! Every operation runs inside one transaction that locks the parent row
//! (`SELECT ... FOR UPDATE`) before checking preconditions or touching the
//! ledger. The lock serializes concurrent operations per parent, so a
//! capacity or uniqueness check can never act on stale state; an early
//! return drops the transaction, which rolls back.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DbConn, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set,
    TransactionTrait,
};
use uuid::Uuid;

use cinecraft_core::domain::{CollaborationStatus, JobStatus};
use cinecraft_core::error::RepoError;
use cinecraft_core::ports::{LedgerError, LikeOutcome, ParticipationLedger};

use super::entity::{
    collaboration, collaboration_participant, event, event_registration, job, job_application,
    post, post_like, user,
};

/// Postgres-backed participation ledger.
pub struct PostgresParticipationLedger {
    db: DbConn,
}

impl PostgresParticipationLedger {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> LedgerError {
    LedgerError::Storage(RepoError::Query(e.to_string()))
}

#[async_trait]
impl ParticipationLedger for PostgresParticipationLedger {
    async fn toggle_like(&self, post_id: Uuid, user_id: Uuid) -> Result<LikeOutcome, LedgerError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let parent = post::Entity::find_by_id(post_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::ParentMissing)?;

        let existing = post_like::Entity::find()
            .filter(post_like::Column::PostId.eq(post_id))
            .filter(post_like::Column::UserId.eq(user_id))
            .one(&txn)
            .await
            .map_err(db_err)?;

        let (liked, likes_count) = match existing {
            Some(_) => {
                post_like::Entity::delete_many()
                    .filter(post_like::Column::PostId.eq(post_id))
                    .filter(post_like::Column::UserId.eq(user_id))
                    .exec(&txn)
                    .await
                    .map_err(db_err)?;
                (false, (parent.likes_count - 1).max(0))
            }
            None => {
                let row = post_like::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    post_id: Set(post_id),
                    user_id: Set(user_id),
                    created_at: Set(Utc::now().into()),
                };
                post_like::Entity::insert(row)
                    .exec_without_returning(&txn)
                    .await
                    .map_err(db_err)?;
                (true, parent.likes_count + 1)
            }
        };

        post::Entity::update_many()
            .col_expr(post::Column::LikesCount, Expr::value(likes_count))
            .filter(post::Column::Id.eq(post_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        tracing::debug!(%post_id, %user_id, liked, "Like toggled");
        Ok(LikeOutcome { liked, likes_count })
    }

    async fn apply_to_job(&self, job_id: Uuid, applicant_id: Uuid) -> Result<Uuid, LedgerError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let parent = job::Entity::find_by_id(job_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::ParentMissing)?;

        let existing = job_application::Entity::find()
            .filter(job_application::Column::JobId.eq(job_id))
            .filter(job_application::Column::ApplicantId.eq(applicant_id))
            .one(&txn)
            .await
            .map_err(db_err)?;

        if existing.is_some() {
            return Err(LedgerError::AlreadyApplied);
        }

        if parent.status != JobStatus::Open.as_str() {
            return Err(LedgerError::JobNotOpen);
        }

        let application_id = Uuid::new_v4();
        let row = job_application::ActiveModel {
            id: Set(application_id),
            job_id: Set(job_id),
            applicant_id: Set(applicant_id),
            created_at: Set(Utc::now().into()),
        };
        job_application::Entity::insert(row)
            .exec_without_returning(&txn)
            .await
            .map_err(db_err)?;

        job::Entity::update_many()
            .col_expr(
                job::Column::ApplicationsCount,
                Expr::col(job::Column::ApplicationsCount).add(1),
            )
            .filter(job::Column::Id.eq(job_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        tracing::debug!(%job_id, %applicant_id, "Application recorded");
        Ok(application_id)
    }

    async fn join_collaboration(
        &self,
        collaboration_id: Uuid,
        user_id: Uuid,
    ) -> Result<Uuid, LedgerError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let parent = collaboration::Entity::find_by_id(collaboration_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::ParentMissing)?;

        let existing = collaboration_participant::Entity::find()
            .filter(collaboration_participant::Column::CollaborationId.eq(collaboration_id))
            .filter(collaboration_participant::Column::UserId.eq(user_id))
            .one(&txn)
            .await
            .map_err(db_err)?;

        if existing.is_some() {
            return Err(LedgerError::AlreadyParticipating);
        }

        if parent.status != CollaborationStatus::Open.as_str() {
            return Err(LedgerError::CollaborationNotOpen);
        }

        if let Some(max) = parent.max_collaborators
            && parent.current_collaborators >= max
        {
            return Err(LedgerError::CollaborationFull);
        }

        // The actor's primary craft becomes their role in the crew.
        let actor = user::Entity::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::Storage(RepoError::NotFound))?;

        let participant_id = Uuid::new_v4();
        let row = collaboration_participant::ActiveModel {
            id: Set(participant_id),
            collaboration_id: Set(collaboration_id),
            user_id: Set(user_id),
            craft_role: Set(actor.primary_craft),
            status: Set("accepted".to_string()),
            created_at: Set(Utc::now().into()),
        };
        collaboration_participant::Entity::insert(row)
            .exec_without_returning(&txn)
            .await
            .map_err(db_err)?;

        collaboration::Entity::update_many()
            .col_expr(
                collaboration::Column::CurrentCollaborators,
                Expr::col(collaboration::Column::CurrentCollaborators).add(1),
            )
            .filter(collaboration::Column::Id.eq(collaboration_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        tracing::debug!(%collaboration_id, %user_id, "Participant added");
        Ok(participant_id)
    }

    async fn register_for_event(&self, event_id: Uuid, user_id: Uuid) -> Result<(), LedgerError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let parent = event::Entity::find_by_id(event_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::ParentMissing)?;

        let existing = event_registration::Entity::find()
            .filter(event_registration::Column::EventId.eq(event_id))
            .filter(event_registration::Column::UserId.eq(user_id))
            .one(&txn)
            .await
            .map_err(db_err)?;

        if existing.is_some() {
            return Err(LedgerError::AlreadyRegistered);
        }

        // No stored counter on events; count the ledger under the lock.
        if let Some(cap) = parent.max_attendees {
            let attending = event_registration::Entity::find()
                .filter(event_registration::Column::EventId.eq(event_id))
                .count(&txn)
                .await
                .map_err(db_err)?;
            if attending >= cap as u64 {
                return Err(LedgerError::EventFull);
            }
        }

        let row = event_registration::ActiveModel {
            id: Set(Uuid::new_v4()),
            event_id: Set(event_id),
            user_id: Set(user_id),
            created_at: Set(Utc::now().into()),
        };
        event_registration::Entity::insert(row)
            .exec_without_returning(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        tracing::debug!(%event_id, %user_id, "Registration recorded");
        Ok(())
    }
}

//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use uuid::Uuid;

use cinecraft_core::domain::{Collaboration, ProfilePatch, User};
use cinecraft_core::error::RepoError;
use cinecraft_core::ports::{CollaborationRepository, UserRepository};

use super::entity::collaboration::{self, Entity as CollaborationEntity};
use super::entity::collaboration_participant;
use super::entity::event::Entity as EventEntity;
use super::entity::job::Entity as JobEntity;
use super::entity::post::Entity as PostEntity;
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL profile repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL job repository.
pub type PostgresJobRepository = PostgresBaseRepository<JobEntity>;

/// PostgreSQL collaboration repository.
pub type PostgresCollaborationRepository = PostgresBaseRepository<CollaborationEntity>;

/// PostgreSQL event repository.
pub type PostgresEventRepository = PostgresBaseRepository<EventEntity>;

fn query_err(e: sea_orm::DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let masked_local = if local.len() > 1 {
            format!("{}***", &local[..1])
        } else {
            "***".to_string()
        };
        format!("{}{}", masked_local, domain)
    } else {
        "***".to_string()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn update_profile(&self, user_id: Uuid, patch: ProfilePatch) -> Result<(), RepoError> {
        // Whole-form submit: optional text fields overwrite with NULL when
        // absent. primary_craft/experience_level are NOT NULL columns, so
        // those only change when provided.
        let mut update = UserEntity::update_many()
            .col_expr(user::Column::Bio, Expr::value(patch.bio))
            .col_expr(user::Column::Location, Expr::value(patch.location))
            .col_expr(user::Column::PortfolioUrl, Expr::value(patch.portfolio_url))
            .col_expr(user::Column::Skills, Expr::value(patch.skills))
            .col_expr(
                user::Column::IsProfileComplete,
                Expr::value(patch.is_profile_complete),
            )
            .col_expr(user::Column::UpdatedAt, Expr::value(Utc::now()));

        if let Some(primary_craft) = patch.primary_craft {
            update = update.col_expr(user::Column::PrimaryCraft, Expr::value(primary_craft));
        }
        if let Some(experience_level) = patch.experience_level {
            update = update.col_expr(user::Column::ExperienceLevel, Expr::value(experience_level));
        }

        let result = update
            .filter(user::Column::Id.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl CollaborationRepository for PostgresCollaborationRepository {
    async fn create_with_creator(&self, collab: Collaboration) -> Result<Collaboration, RepoError> {
        let txn = self.db.begin().await.map_err(query_err)?;

        let active: collaboration::ActiveModel = collab.clone().into();
        CollaborationEntity::insert(active)
            .exec_without_returning(&txn)
            .await
            .map_err(query_err)?;

        let creator_row = collaboration_participant::ActiveModel {
            id: Set(Uuid::new_v4()),
            collaboration_id: Set(collab.id),
            user_id: Set(collab.creator_id),
            craft_role: Set("Creator".to_string()),
            status: Set("accepted".to_string()),
            created_at: Set(Utc::now().into()),
        };
        collaboration_participant::Entity::insert(creator_row)
            .exec_without_returning(&txn)
            .await
            .map_err(query_err)?;

        txn.commit().await.map_err(query_err)?;

        Ok(collab)
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Collaboration, ProfilePatch, User};
use crate::error::RepoError;

/// Generic repository trait over an aggregate root.
///
/// Entities in scope are never physically deleted (status transitions are
/// soft), so there is no delete here.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// User repository with profile-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Overwrite the caller's own profile fields from a full-form submit.
    async fn update_profile(&self, user_id: Uuid, patch: ProfilePatch) -> Result<(), RepoError>;
}

/// Collaboration repository.
#[async_trait]
pub trait CollaborationRepository: BaseRepository<Collaboration, Uuid> {
    /// Insert the collaboration and seed its creator as the first accepted
    /// participant (role "Creator") in one transaction.
    async fn create_with_creator(&self, collab: Collaboration) -> Result<Collaboration, RepoError>;
}

//! Profile entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    pub primary_craft: String,
    pub experience_level: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub portfolio_url: Option<String>,
    pub avatar_url: Option<String>,
    pub verified: bool,
    pub is_profile_complete: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::job::Entity")]
    Job,
    #[sea_orm(has_many = "super::collaboration::Entity")]
    Collaboration,
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain User.
impl From<Model> for cinecraft_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            name: model.name,
            username: model.username,
            primary_craft: model.primary_craft,
            experience_level: model.experience_level,
            bio: model.bio,
            location: model.location,
            skills: model.skills,
            portfolio_url: model.portfolio_url,
            avatar_url: model.avatar_url,
            verified: model.verified,
            is_profile_complete: model.is_profile_complete,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from domain User to SeaORM ActiveModel.
impl From<cinecraft_core::domain::User> for ActiveModel {
    fn from(user: cinecraft_core::domain::User) -> Self {
        Self {
            id: Set(user.id),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            name: Set(user.name),
            username: Set(user.username),
            primary_craft: Set(user.primary_craft),
            experience_level: Set(user.experience_level),
            bio: Set(user.bio),
            location: Set(user.location),
            skills: Set(user.skills),
            portfolio_url: Set(user.portfolio_url),
            avatar_url: Set(user.avatar_url),
            verified: Set(user.verified),
            is_profile_complete: Set(user.is_profile_complete),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        }
    }
}

//! Collaboration entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use cinecraft_core::domain::CollaborationStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collaborations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub creator_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub project_type: Option<String>,
    pub needed_crafts: Vec<String>,
    pub timeline: Option<String>,
    pub budget_range: Option<String>,
    pub location: Option<String>,
    pub remote_allowed: bool,
    pub status: String,
    pub max_collaborators: Option<i32>,
    pub current_collaborators: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::collaboration_participant::Entity")]
    Participant,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Collaboration.
impl From<Model> for cinecraft_core::domain::Collaboration {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            creator_id: model.creator_id,
            title: model.title,
            description: model.description,
            project_type: model.project_type,
            needed_crafts: model.needed_crafts,
            timeline: model.timeline,
            budget_range: model.budget_range,
            location: model.location,
            remote_allowed: model.remote_allowed,
            status: model.status.parse().unwrap_or(CollaborationStatus::Open),
            max_collaborators: model.max_collaborators,
            current_collaborators: model.current_collaborators,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from domain Collaboration to SeaORM ActiveModel.
impl From<cinecraft_core::domain::Collaboration> for ActiveModel {
    fn from(collab: cinecraft_core::domain::Collaboration) -> Self {
        Self {
            id: Set(collab.id),
            creator_id: Set(collab.creator_id),
            title: Set(collab.title),
            description: Set(collab.description),
            project_type: Set(collab.project_type),
            needed_crafts: Set(collab.needed_crafts),
            timeline: Set(collab.timeline),
            budget_range: Set(collab.budget_range),
            location: Set(collab.location),
            remote_allowed: Set(collab.remote_allowed),
            status: Set(collab.status.as_str().to_string()),
            max_collaborators: Set(collab.max_collaborators),
            current_collaborators: Set(collab.current_collaborators),
            created_at: Set(collab.created_at.into()),
        }
    }
}

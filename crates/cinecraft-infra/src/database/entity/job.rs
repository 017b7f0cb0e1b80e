//! Job entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use cinecraft_core::domain::JobStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub posted_by: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub craft_required: String,
    pub additional_crafts: Vec<String>,
    pub experience_level: String,
    pub job_type: String,
    pub location: Option<String>,
    pub remote_allowed: bool,
    pub budget_min: Option<i32>,
    pub budget_max: Option<i32>,
    pub currency: String,
    pub deadline: Option<Date>,
    pub status: String,
    pub applications_count: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PostedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Job.
impl From<Model> for cinecraft_core::domain::Job {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            posted_by: model.posted_by,
            title: model.title,
            description: model.description,
            craft_required: model.craft_required,
            additional_crafts: model.additional_crafts,
            experience_level: model.experience_level,
            job_type: model.job_type,
            location: model.location,
            remote_allowed: model.remote_allowed,
            budget_min: model.budget_min,
            budget_max: model.budget_max,
            currency: model.currency,
            deadline: model.deadline,
            status: model.status.parse().unwrap_or(JobStatus::Open),
            applications_count: model.applications_count,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from domain Job to SeaORM ActiveModel.
impl From<cinecraft_core::domain::Job> for ActiveModel {
    fn from(job: cinecraft_core::domain::Job) -> Self {
        Self {
            id: Set(job.id),
            posted_by: Set(job.posted_by),
            title: Set(job.title),
            description: Set(job.description),
            craft_required: Set(job.craft_required),
            additional_crafts: Set(job.additional_crafts),
            experience_level: Set(job.experience_level),
            job_type: Set(job.job_type),
            location: Set(job.location),
            remote_allowed: Set(job.remote_allowed),
            budget_min: Set(job.budget_min),
            budget_max: Set(job.budget_max),
            currency: Set(job.currency),
            deadline: Set(job.deadline),
            status: Set(job.status.as_str().to_string()),
            applications_count: Set(job.applications_count),
            created_at: Set(job.created_at.into()),
            updated_at: Set(job.updated_at.into()),
        }
    }
}

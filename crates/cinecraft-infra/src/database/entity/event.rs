//! Event entity for SeaORM. No stored attendee counter; the registration
//! ledger is counted at read time.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub event_type: String,
    pub date: Date,
    pub time: Time,
    pub location: Option<String>,
    pub is_virtual: bool,
    pub max_attendees: Option<i32>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price: Option<f64>,
    pub craft_focus: Vec<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OrganizerId",
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

/// Conversion from SeaORM Model to domain Event.
impl From<Model> for cinecraft_core::domain::Event {
    fn from(model: Model) -> Self {
        Self {
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
        }
    }
}

/// Conversion from domain Event to SeaORM ActiveModel.
impl From<cinecraft_core::domain::Event> for ActiveModel {
    fn from(event: cinecraft_core::domain::Event) -> Self {
        Self {
            id: Set(event.id),
            organizer_id: Set(event.organizer_id),
            title: Set(event.title),
            description: Set(event.description),
            event_type: Set(event.event_type),
            date: Set(event.date),
            time: Set(event.time),
            location: Set(event.location),
            is_virtual: Set(event.is_virtual),
            max_attendees: Set(event.max_attendees),
            price: Set(event.price),
            craft_focus: Set(event.craft_focus),
            created_at: Set(event.created_at.into()),
        }
    }
}

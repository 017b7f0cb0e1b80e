//! Post entity for SeaORM.
//!
//! Media attachments are stored as two parallel arrays (`media_urls`,
//! `media_types`) and zipped into `MediaRef` pairs at the domain boundary.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use cinecraft_core::domain::MediaRef;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub media_urls: Vec<String>,
    pub media_types: Vec<String>,
    pub project_title: Option<String>,
    pub craft_tags: Vec<String>,
    pub location: Option<String>,
    pub collaboration_open: bool,
    pub visibility: String,
    pub likes_count: i32,
    pub comments_count: i32,
    pub shares_count: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
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

/// Conversion from SeaORM Model to domain Post.
impl From<Model> for cinecraft_core::domain::Post {
    fn from(model: Model) -> Self {
        let media = model
            .media_urls
            .into_iter()
            .zip(model.media_types)
            .map(|(url, media_type)| MediaRef { url, media_type })
            .collect();
        Self {
            id: model.id,
            user_id: model.user_id,
            content: model.content,
            media,
            project_title: model.project_title,
            craft_tags: model.craft_tags,
            location: model.location,
            collaboration_open: model.collaboration_open,
            visibility: model.visibility.parse().unwrap_or_default(),
            likes_count: model.likes_count,
            comments_count: model.comments_count,
            shares_count: model.shares_count,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from domain Post to SeaORM ActiveModel.
impl From<cinecraft_core::domain::Post> for ActiveModel {
    fn from(post: cinecraft_core::domain::Post) -> Self {
        let (media_urls, media_types) = post
            .media
            .into_iter()
            .map(|m| (m.url, m.media_type))
            .unzip();
        Self {
            id: Set(post.id),
            user_id: Set(post.user_id),
            content: Set(post.content),
            media_urls: Set(media_urls),
            media_types: Set(media_types),
            project_title: Set(post.project_title),
            craft_tags: Set(post.craft_tags),
            location: Set(post.location),
            collaboration_open: Set(post.collaboration_open),
            visibility: Set(post.visibility.as_str().to_string()),
            likes_count: Set(post.likes_count),
            comments_count: Set(post.comments_count),
            shares_count: Set(post.shares_count),
            created_at: Set(post.created_at.into()),
        }
    }
}

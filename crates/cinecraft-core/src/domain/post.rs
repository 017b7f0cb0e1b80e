use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who can see a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Followers,
    Private,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Followers => "followers",
            Visibility::Private => "private",
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Public
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "followers" => Ok(Visibility::Followers),
            "private" => Ok(Visibility::Private),
            other => Err(format!("unknown visibility '{other}'")),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A media attachment: a stored URL plus its kind (`image` or `video`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
    pub media_type: String,
}

/// Post entity - a feed entry authored by a user.
///
/// `likes_count` is a materialized aggregate of the like ledger; only the
/// participation ledger mutates it.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub media: Vec<MediaRef>,
    pub project_title: Option<String>,
    pub craft_tags: Vec<String>,
    pub location: Option<String>,
    pub collaboration_open: bool,
    pub visibility: Visibility,
    pub likes_count: i32,
    pub comments_count: i32,
    pub shares_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new public post with zeroed counters.
    pub fn new(user_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content,
            media: Vec::new(),
            project_title: None,
            craft_tags: Vec::new(),
            location: None,
            collaboration_open: false,
            visibility: Visibility::Public,
            likes_count: 0,
            comments_count: 0,
            shares_count: 0,
            created_at: Utc::now(),
        }
    }
}

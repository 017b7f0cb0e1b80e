use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User entity - a film-industry professional's account and profile.
///
/// Carries the password hash, so it never derives `Serialize`; the wire
/// projection is [`views::UserProfile`](super::views::UserProfile).
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub username: String,
    pub primary_craft: String,
    pub experience_level: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub portfolio_url: Option<String>,
    pub avatar_url: Option<String>,
    pub verified: bool,
    pub is_profile_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(
        email: String,
        password_hash: String,
        name: String,
        username: String,
        primary_craft: String,
        experience_level: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            username,
            primary_craft,
            experience_level,
            bio: None,
            location: None,
            skills: Vec::new(),
            portfolio_url: None,
            avatar_url: None,
            verified: false,
            is_profile_complete: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full-form profile update. Absent optional fields clear the stored value;
/// the profile editor submits the whole form every time.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub portfolio_url: Option<String>,
    pub primary_craft: Option<String>,
    pub experience_level: Option<String>,
    pub skills: Vec<String>,
    pub is_profile_complete: bool,
}

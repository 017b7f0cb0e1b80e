//! Creation-time validation for the aggregate roots.
//!
//! Validators run before storage is touched and collect every failed field,
//! so a response carries the full list instead of the first hit.

use chrono::Utc;

use crate::domain::{Collaboration, Event, Job, Post};
use crate::error::FieldError;

pub const MAX_MEDIA_PER_POST: usize = 4;
pub const MAX_ADDITIONAL_CRAFTS: usize = 5;
pub const MIN_NEEDED_CRAFTS: usize = 1;
pub const MAX_NEEDED_CRAFTS: usize = 10;
pub const MIN_PASSWORD_LEN: usize = 8;

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "is required"));
    }
}

/// Validate signup input.
pub fn signup(
    email: &str,
    password: &str,
    name: &str,
    username: &str,
    primary_craft: &str,
    experience_level: &str,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "is required"));
    } else if !email.contains('@') {
        errors.push(FieldError::new("email", "must be a valid email address"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            format!("must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    require(&mut errors, "name", name);
    require(&mut errors, "username", username);
    require(&mut errors, "primary_craft", primary_craft);
    require(&mut errors, "experience_level", experience_level);
    errors
}

/// Validate a post before insertion.
pub fn new_post(post: &Post) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "content", &post.content);
    if post.media.len() > MAX_MEDIA_PER_POST {
        errors.push(FieldError::new(
            "media",
            format!("at most {MAX_MEDIA_PER_POST} attachments allowed"),
        ));
    }
    for media in &post.media {
        if media.media_type != "image" && media.media_type != "video" {
            errors.push(FieldError::new("media", format!("unknown media type '{}'", media.media_type)));
        }
    }
    errors
}

/// Validate a job posting before insertion.
pub fn new_job(job: &Job) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "title", &job.title);
    require(&mut errors, "description", &job.description);
    require(&mut errors, "craft_required", &job.craft_required);
    require(&mut errors, "experience_level", &job.experience_level);
    require(&mut errors, "job_type", &job.job_type);
    if job.additional_crafts.len() > MAX_ADDITIONAL_CRAFTS {
        errors.push(FieldError::new(
            "additional_crafts",
            format!("at most {MAX_ADDITIONAL_CRAFTS} entries allowed"),
        ));
    }
    if job.additional_crafts.contains(&job.craft_required) {
        errors.push(FieldError::new(
            "additional_crafts",
            "must not repeat craft_required",
        ));
    }
    if let (Some(min), Some(max)) = (job.budget_min, job.budget_max)
        && min > max
    {
        errors.push(FieldError::new("budget_min", "must not exceed budget_max"));
    }
    if let Some(deadline) = job.deadline
        && deadline < Utc::now().date_naive()
    {
        errors.push(FieldError::new("deadline", "must not be in the past"));
    }
    errors
}

/// Validate a collaboration before insertion.
pub fn new_collaboration(collab: &Collaboration) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "title", &collab.title);
    require(&mut errors, "description", &collab.description);
    if collab.needed_crafts.len() < MIN_NEEDED_CRAFTS {
        errors.push(FieldError::new("needed_crafts", "must not be empty"));
    } else if collab.needed_crafts.len() > MAX_NEEDED_CRAFTS {
        errors.push(FieldError::new(
            "needed_crafts",
            format!("at most {MAX_NEEDED_CRAFTS} entries allowed"),
        ));
    }
    if let Some(max) = collab.max_collaborators
        && max < 1
    {
        errors.push(FieldError::new("max_collaborators", "must be at least 1"));
    }
    errors
}

/// Validate an event before insertion.
pub fn new_event(event: &Event) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "title", &event.title);
    require(&mut errors, "description", &event.description);
    require(&mut errors, "event_type", &event.event_type);
    if let Some(max) = event.max_attendees
        && max < 1
    {
        errors.push(FieldError::new("max_attendees", "must be at least 1"));
    }
    if let Some(price) = event.price
        && price < 0.0
    {
        errors.push(FieldError::new("price", "must not be negative"));
    }
    errors
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::domain::MediaRef;

    #[test]
    fn signup_collects_every_missing_field() {
        let errors = signup("", "short", "", "lena", "Director", "");
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["email", "password", "name", "experience_level"]);
    }

    #[test]
    fn signup_rejects_mailless_email() {
        let errors = signup("not-an-email", "longenough", "Lena", "lena", "Director", "Senior");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn signup_accepts_complete_input() {
        let errors = signup("lena@example.com", "longenough", "Lena", "lena", "Director", "Senior");
        assert!(errors.is_empty());
    }

    #[test]
    fn post_rejects_too_many_attachments() {
        let mut post = Post::new(Uuid::new_v4(), "cut day 12".to_string());
        post.media = (0..5)
            .map(|i| MediaRef {
                url: format!("/m/{i}"),
                media_type: "image".to_string(),
            })
            .collect();
        let errors = new_post(&post);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "media");
    }

    #[test]
    fn post_rejects_unknown_media_type() {
        let mut post = Post::new(Uuid::new_v4(), "reel".to_string());
        post.media.push(MediaRef {
            url: "/m/0".to_string(),
            media_type: "gif".to_string(),
        });
        assert_eq!(new_post(&post).len(), 1);
    }

    fn job_fixture() -> Job {
        Job::new(
            Uuid::new_v4(),
            "Colorist needed".to_string(),
            "Feature film grade".to_string(),
            "Colorist".to_string(),
            "Senior".to_string(),
            "Contract".to_string(),
        )
    }

    #[test]
    fn job_rejects_inverted_budget() {
        let mut job = job_fixture();
        job.budget_min = Some(5000);
        job.budget_max = Some(1000);
        let errors = new_job(&job);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "budget_min");
    }

    #[test]
    fn job_accepts_half_open_budget() {
        let mut job = job_fixture();
        job.budget_max = Some(1500);
        assert!(new_job(&job).is_empty());
    }

    #[test]
    fn job_rejects_craft_required_in_additional() {
        let mut job = job_fixture();
        job.additional_crafts = vec!["Editor".to_string(), "Colorist".to_string()];
        let errors = new_job(&job);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "additional_crafts");
    }

    #[test]
    fn job_rejects_past_deadline() {
        let mut job = job_fixture();
        job.deadline = Some(Utc::now().date_naive() - Duration::days(1));
        assert_eq!(new_job(&job).len(), 1);
    }

    #[test]
    fn collaboration_needs_at_least_one_craft() {
        let collab = Collaboration::new(
            Uuid::new_v4(),
            "Short film".to_string(),
            "Weekend shoot".to_string(),
            Vec::new(),
        );
        let errors = new_collaboration(&collab);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "needed_crafts");
    }

    #[test]
    fn collaboration_caps_needed_crafts() {
        let collab = Collaboration::new(
            Uuid::new_v4(),
            "Anthology".to_string(),
            "Ten segments".to_string(),
            (0..11).map(|i| format!("Craft {i}")).collect(),
        );
        assert_eq!(new_collaboration(&collab).len(), 1);
    }

    #[test]
    fn event_requires_core_fields() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let time = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
        let event = Event::new(Uuid::new_v4(), String::new(), String::new(), String::new(), date, time);
        let fields: Vec<&str> = new_event(&event).iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "description", "event_type"]);
    }
}

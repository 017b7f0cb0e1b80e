use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

/// Event entity - a screening, workshop, meetup, or similar.
///
/// Events carry no stored attendee counter; the registration ledger is
/// counted at read time.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub is_virtual: bool,
    /// `None` means unlimited capacity.
    pub max_attendees: Option<i32>,
    pub price: Option<f64>,
    pub craft_focus: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        organizer_id: Uuid,
        title: String,
        description: String,
        event_type: String,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            organizer_id,
            title,
            description,
            event_type,
            date,
            time,
            location: None,
            is_virtual: false,
            max_attendees: None,
            price: None,
            craft_focus: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

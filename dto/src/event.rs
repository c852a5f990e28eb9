use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Event {
    id: i32,
    title: String,
    description: String,
    location: String,
    starts_at: NaiveDateTime,
    image_url: Option<String>,
    registration_open: bool,
    created_at: NaiveDateTime,
}

impl Event {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        title: String,
        description: String,
        location: String,
        starts_at: NaiveDateTime,
        image_url: Option<String>,
        registration_open: bool,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            title,
            description,
            location,
            starts_at,
            image_url,
            registration_open,
            created_at,
        }
    }

    /// An event accepts registrations only while it is open and hasn't started yet.
    pub fn accepts_registrations(&self, now: NaiveDateTime) -> bool {
        self.registration_open && self.starts_at > now
    }
}

/// Every field an admin may set on an event, creation and update alike.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct EventInput {
    title: String,
    description: String,
    location: String,
    starts_at: NaiveDateTime,
    image_url: Option<String>,
    registration_open: bool,
}

impl EventInput {
    pub fn new(
        title: String,
        description: String,
        location: String,
        starts_at: NaiveDateTime,
        image_url: Option<String>,
        registration_open: bool,
    ) -> Self {
        Self {
            title,
            description,
            location,
            starts_at,
            image_url,
            registration_open,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Utc};

    pub fn upcoming_event_input() -> EventInput {
        EventInput::new(
            "Welcome party".to_owned(),
            "Meet the club.".to_owned(),
            "Main hall".to_owned(),
            in_days(30),
            Some("https://images.example.com/party.png".to_owned()),
            true,
        )
    }

    pub fn past_event_input() -> EventInput {
        EventInput::new(
            "Spring workshop".to_owned(),
            "Hands-on session.".to_owned(),
            "Room 101".to_owned(),
            in_days(-30),
            None,
            true,
        )
    }

    pub fn closed_event_input() -> EventInput {
        EventInput {
            title: "Closed meetup".to_owned(),
            registration_open: false,
            ..upcoming_event_input()
        }
    }

    /// Pinned to 18:00:00 so round-trips through the store compare equal.
    pub fn in_days(days: i64) -> NaiveDateTime {
        let date: NaiveDate = (Utc::now().naive_utc() + Duration::days(days)).date();
        date.and_hms_opt(18, 0, 0).unwrap()
    }

    fn event(starts_at: NaiveDateTime, registration_open: bool) -> Event {
        Event::new(
            1,
            "Event".to_owned(),
            "".to_owned(),
            "".to_owned(),
            starts_at,
            None,
            registration_open,
            NaiveDateTime::default(),
        )
    }

    #[test]
    fn should_accept_registrations_when_open_and_upcoming() {
        assert!(event(in_days(1), true).accepts_registrations(Utc::now().naive_utc()));
    }

    #[test]
    fn should_refuse_registrations_when_closed() {
        assert!(!event(in_days(1), false).accepts_registrations(Utc::now().naive_utc()));
    }

    #[test]
    fn should_refuse_registrations_when_started() {
        assert!(!event(in_days(-1), true).accepts_registrations(Utc::now().naive_utc()));
    }
}

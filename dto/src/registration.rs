use crate::group_link::GroupLink;
use crate::student::Student;
use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Registration {
    id: i32,
    student_id: i32,
    event_id: i32,
    created_at: NaiveDateTime,
}

impl Registration {
    pub fn new(id: i32, student_id: i32, event_id: i32, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            student_id,
            event_id,
            created_at,
        }
    }
}

/// What the student receives once registered: the registration itself
/// and the group links of the event, which are not public otherwise.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct RegistrationConfirmation {
    registration: Registration,
    identifier: String,
    group_links: Vec<GroupLink>,
}

impl RegistrationConfirmation {
    pub fn new(registration: Registration, identifier: String, group_links: Vec<GroupLink>) -> Self {
        Self {
            registration,
            identifier,
            group_links,
        }
    }
}

/// A row of the registrations list an admin sees for a given event.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct RegisteredStudent {
    registration_id: i32,
    registered_at: NaiveDateTime,
    student: Student,
}

impl RegisteredStudent {
    pub fn new(registration_id: i32, registered_at: NaiveDateTime, student: Student) -> Self {
        Self {
            registration_id,
            registered_at,
            student,
        }
    }
}

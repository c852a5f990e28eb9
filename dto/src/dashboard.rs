use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Counters displayed on top of the admin dashboard.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Default)]
pub struct DashboardStatistics {
    students_total: i64,
    students_pending: i64,
    students_approved: i64,
    events_total: i64,
    events_upcoming: i64,
    registrations_total: i64,
    testimonials_pending: i64,
}

impl DashboardStatistics {
    pub fn new(
        students_total: i64,
        students_pending: i64,
        students_approved: i64,
        events_total: i64,
        events_upcoming: i64,
        registrations_total: i64,
        testimonials_pending: i64,
    ) -> Self {
        Self {
            students_total,
            students_pending,
            students_approved,
            events_total,
            events_upcoming,
            registrations_total,
            testimonials_pending,
        }
    }
}

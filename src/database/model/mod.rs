use crate::database::error::DatabaseError;
use chrono::NaiveDateTime;

pub(crate) mod committee_member;
pub(crate) mod event;
pub(crate) mod group_link;
pub(crate) mod registration;
pub(crate) mod student;
pub(crate) mod testimonial;

/// Dates are stored as text. Keeping them at second precision with a fixed width
/// lets SQLite compare them lexicographically.
pub(crate) const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn format_date_time(date_time: &NaiveDateTime) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

pub(crate) fn parse_date_time(value: &str) -> Result<NaiveDateTime, DatabaseError> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).map_err(DatabaseError::from)
}

pub(crate) fn now() -> String {
    format_date_time(&chrono::Utc::now().naive_utc())
}

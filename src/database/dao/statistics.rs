use super::Result;
use crate::database::dao::{event, registration, student, testimonial};
use diesel::SqliteConnection;
use dto::dashboard::DashboardStatistics;
use dto::student_status::StudentStatus;

pub fn compute(connection: &mut SqliteConnection) -> Result<DashboardStatistics> {
    Ok(DashboardStatistics::new(
        student::count_all(connection)?,
        student::count_by_status(connection, StudentStatus::Pending)?,
        student::count_by_status(connection, StudentStatus::Approved)?,
        event::count_all(connection)?,
        event::count_upcoming(connection)?,
        registration::count_all(connection)?,
        testimonial::count_pending(connection)?,
    ))
}

use crate::web::error::ApiError;
use dto::student_status::UnknownStudentStatus;
use rocket::Request;
use rocket::http::Status;

pub(crate) mod admin_controller;
pub(crate) mod committee_controller;
pub(crate) mod event_controller;
pub(crate) mod group_link_controller;
pub(crate) mod registration_controller;
pub(crate) mod server;
pub(crate) mod student_controller;
pub(crate) mod testimonial_controller;

impl From<UnknownStudentStatus> for ApiError {
    fn from(error: UnknownStudentStatus) -> Self {
        ApiError::new(Status::BadRequest, &error.to_string())
    }
}

/// Answer every API failure with a JSON body, including the ones Rocket raises itself
/// (malformed payloads, missing admin session, unknown routes).
#[catch(default)]
pub fn api_catcher(status: Status, _request: &Request) -> ApiError {
    let message = status.reason().unwrap_or("Unknown error");
    ApiError::new(status, message)
}

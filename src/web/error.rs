use crate::admin::error::AdminError;
use crate::database::error::DatabaseError;
use crate::registration::error::RegistrationError;
use crate::student::error::StudentError;
use crate::tools::validation::ValidationError;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::json;
use rocket::Request;
use std::fmt::Debug;

/// What an API endpoint answers when a request can't be served:
/// a status and a `{"error": "..."}` body.
/// Server-side failures are logged and never leak their details to the caller.
#[derive(Debug, PartialEq)]
pub struct ApiError {
    status: Status,
    message: String,
}

impl ApiError {
    pub fn new(status: Status, message: &str) -> Self {
        Self {
            status,
            message: message.to_owned(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new(Status::NotFound, message)
    }

    pub fn internal<E: Debug>(error: E) -> Self {
        error!("{error:#?}");
        Self::new(Status::InternalServerError, "An internal error has occurred.")
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, json!({ "error": self.message })).respond_to(request)
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        debug!("Rejecting invalid payload [error: {error}]");
        Self::new(Status::BadRequest, &error.to_string())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::NotFound => Self::not_found(&error.to_string()),
            error => Self::internal(error),
        }
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(error: r2d2::Error) -> Self {
        Self::internal(error)
    }
}

impl From<StudentError> for ApiError {
    fn from(error: StudentError) -> Self {
        match error {
            StudentError::InvalidApplication(error) => error.into(),
            StudentError::EmailAlreadyRegistered | StudentError::IdentifierConflict(_) => {
                warn!("{error}");
                Self::new(Status::Conflict, &error.to_string())
            }
            StudentError::UnknownStudent => Self::not_found(&error.to_string()),
            StudentError::Database(error) => error.into(),
            error @ (StudentError::IdentifierAllocationExhausted(_) | StudentError::Export(_)) => {
                Self::internal(error)
            }
        }
    }
}

impl From<RegistrationError> for ApiError {
    fn from(error: RegistrationError) -> Self {
        let status = match error {
            RegistrationError::Database(error) => return error.into(),
            RegistrationError::UnknownEvent | RegistrationError::UnknownStudent => Status::NotFound,
            RegistrationError::RegistrationClosed => Status::BadRequest,
            RegistrationError::StudentNotApproved => Status::Forbidden,
            RegistrationError::AlreadyRegistered => Status::Conflict,
        };

        Self::new(status, &error.to_string())
    }
}

impl From<AdminError> for ApiError {
    fn from(error: AdminError) -> Self {
        warn!("Admin login refused [reason: {error}]");
        Self::new(Status::Unauthorized, "Wrong credentials.")
    }
}

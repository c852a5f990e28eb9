use crate::admin::error::AdminError;
use crate::database::error::DatabaseError;
use crate::registration::error::RegistrationError;
use crate::student::error::StudentError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("An error has occurred with the database.")]
    Database(#[from] DatabaseError),
    #[error("An error has occurred while handling a student.")]
    Student(#[from] StudentError),
    #[error("An error has occurred while registering to an event.")]
    Registration(#[from] RegistrationError),
    #[error("An error has occurred while authenticating an admin.")]
    Admin(#[from] AdminError),
}

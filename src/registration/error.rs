use crate::database::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RegistrationError {
    #[error("This event doesn't exist.")]
    UnknownEvent,
    #[error("Registrations for this event are closed.")]
    RegistrationClosed,
    #[error("No student matches the provided details.")]
    UnknownStudent,
    #[error("Only approved members can register for events.")]
    StudentNotApproved,
    #[error("This student is already registered for this event.")]
    AlreadyRegistered,
    #[error("An error has occurred with the database.")]
    Database(#[from] DatabaseError),
}

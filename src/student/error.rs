use crate::database::error::DatabaseError;
use crate::tools::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StudentError {
    #[error(transparent)]
    InvalidApplication(#[from] ValidationError),
    #[error("This email address is already registered.")]
    EmailAlreadyRegistered,
    #[error("No free identifier has been found [attempts: {0}]")]
    IdentifierAllocationExhausted(u32),
    #[error("The identifier has been taken by another application in the meantime [identifier: {0}]")]
    IdentifierConflict(String),
    #[error("No student matches the provided details.")]
    UnknownStudent,
    #[error("The students can't be exported [reason: {0}]")]
    Export(String),
    #[error("An error has occurred with the database.")]
    Database(#[from] DatabaseError),
}

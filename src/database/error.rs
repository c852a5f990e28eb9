use crate::database::error::DatabaseError::{
    ForeignKeyViolation, MalformedValue, NotFound, UnderlyingDatabase, UniqueViolation,
};
use diesel::result::DatabaseErrorKind;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DatabaseError {
    #[error("The --database-url argument is missing.")]
    MissingDatabaseUrl,
    #[error("The connection to the database failed.")]
    ConnectionFailed,
    #[error("The requested record doesn't exist.")]
    NotFound,
    #[error("A uniqueness constraint has been violated [constraint: {0}]")]
    UniqueViolation(String),
    #[error("A foreign key constraint has been violated [constraint: {0}]")]
    ForeignKeyViolation(String),
    #[error("A stored value can't be read [value: {0}]")]
    MalformedValue(String),
    #[error("An error occurred within the database.")]
    UnderlyingDatabase(String),
}

impl DatabaseError {
    /// Whether this error is a uniqueness violation on the given `table.column`.
    pub fn is_unique_violation_on(&self, column: &str) -> bool {
        matches!(self, UniqueViolation(constraint) if constraint.contains(column))
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for DatabaseError {
    fn from(value: Box<dyn Error + Send + Sync + 'static>) -> Self {
        UnderlyingDatabase(value.to_string())
    }
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => NotFound,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                UniqueViolation(info.message().to_owned())
            }
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                ForeignKeyViolation(info.message().to_owned())
            }
            error => UnderlyingDatabase(error.to_string()),
        }
    }
}

impl From<chrono::ParseError> for DatabaseError {
    fn from(value: chrono::ParseError) -> Self {
        MalformedValue(value.to_string())
    }
}

impl From<dto::student_status::UnknownStudentStatus> for DatabaseError {
    fn from(value: dto::student_status::UnknownStudentStatus) -> Self {
        MalformedValue(value.to_string())
    }
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AdminError {
    #[error("No admin account has been configured.")]
    NotConfigured,
    #[error("The credentials don't match the admin account.")]
    WrongCredentials,
}

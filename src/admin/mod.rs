use crate::admin::config::AdminConfig;
use crate::admin::credentials::AdminCredentials;
use crate::admin::error::AdminError;
use crate::admin::error::AdminError::{NotConfigured, WrongCredentials};

pub(crate) mod config;
pub(crate) mod credentials;
pub(crate) mod error;

/// Check the given credentials against the configured admin account.
pub fn authenticate(config: &AdminConfig, credentials: &AdminCredentials) -> Result<(), AdminError> {
    let expected_credentials = config.credentials().as_ref().ok_or(NotConfigured)?;
    if expected_credentials.login() == credentials.login().trim()
        && constant_time_eq(
            expected_credentials.password().as_bytes(),
            credentials.password().as_bytes(),
        )
    {
        Ok(())
    } else {
        Err(WrongCredentials)
    }
}

/// Runs in a time depending on the lengths only.
fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .fold(0, |difference, (left, right)| difference | (left ^ right))
            == 0
}

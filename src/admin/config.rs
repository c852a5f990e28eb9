use crate::admin::credentials::AdminCredentials;
use crate::tools::env_args::retrieve_arg_value;
use derive_getters::Getters;

const LOGIN_ARG: &str = "--admin-login";
const PASSWORD_ARG: &str = "--admin-password";

/// The single admin account. Without it, nobody can log in as admin.
#[derive(Debug, Getters, Default, Clone, PartialEq)]
pub struct AdminConfig {
    credentials: Option<AdminCredentials>,
}

impl AdminConfig {
    pub fn new(credentials: Option<AdminCredentials>) -> Self {
        Self { credentials }
    }
}

pub fn build_admin_config() -> AdminConfig {
    let login = retrieve_arg_value([LOGIN_ARG]).filter(|login| !login.trim().is_empty());
    let password = retrieve_arg_value([PASSWORD_ARG]).filter(|password| !password.is_empty());

    match (login, password) {
        (Some(login), Some(password)) => {
            AdminConfig::new(Some(AdminCredentials::new(login.trim().to_owned(), password)))
        }
        _ => {
            warn!("No admin account configured, admin endpoints won't be reachable");
            AdminConfig::default()
        }
    }
}

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

#[derive(Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct AdminCredentials {
    login: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(login: String, password: String) -> Self {
        Self { login, password }
    }
}

impl Debug for AdminCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Admin Credentials {{login={}, password=MASKED}}",
            self.login
        )
    }
}

/// An admin who logged in. Admin endpoints require one as a request guard.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct AdminSession {
    login: String,
}

impl AdminSession {
    pub fn new(login: String) -> Self {
        Self { login }
    }
}

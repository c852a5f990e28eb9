use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ().-]{6,20}$").expect("phone regex is valid"));
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("URL regex is valid"));

pub const SHORT_TEXT_MAX_LENGTH: usize = 100;
pub const LONG_TEXT_MAX_LENGTH: usize = 5000;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    field: &'static str,
    reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: &str) -> Self {
        Self {
            field,
            reason: reason.to_owned(),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }
}

/// Implemented by every payload a client can send to create or update a record.
/// Fields are checked one after the other and the first invalid one is reported.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub fn require_text(field: &'static str, value: &str, max_length: usize) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::new(field, "must not be empty"))
    } else if value.chars().count() > max_length {
        Err(ValidationError::new(
            field,
            &format!("must not exceed {max_length} characters"),
        ))
    } else {
        Ok(())
    }
}

pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max_length: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(value) if value.chars().count() > max_length => Err(ValidationError::new(
            field,
            &format!("must not exceed {max_length} characters"),
        )),
        _ => Ok(()),
    }
}

pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new(field, "is not a valid email address"))
    }
}

pub fn optional_email(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match non_blank(value) {
        Some(value) => require_email(field, value),
        None => Ok(()),
    }
}

pub fn optional_phone(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match non_blank(value) {
        Some(value) if !PHONE_REGEX.is_match(value.trim()) => {
            Err(ValidationError::new(field, "is not a valid phone number"))
        }
        _ => Ok(()),
    }
}

pub fn require_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if URL_REGEX.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new(field, "is not a valid URL"))
    }
}

pub fn optional_url(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match non_blank(value) {
        Some(value) => require_url(field, value),
        None => Ok(()),
    }
}

/// Forms send empty strings for fields left blank: treat them as missing.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

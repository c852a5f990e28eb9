use crate::tools::env_args::{retrieve_arg_value, retrieve_parsed_arg_value};
use derive_getters::Getters;

const PREFIX_ARG: &str = "--student-id-prefix";
const PADDING_ARG: &str = "--student-id-padding";
const MAX_ATTEMPTS_ARG: &str = "--student-id-max-attempts";

const DEFAULT_PREFIX: &str = "STU";
const DEFAULT_PADDING: usize = 3;
const DEFAULT_MAX_ATTEMPTS: u32 = 10;
const MAX_PADDING: usize = 18;

/// How student identifiers look like (`<prefix>-<zero padded sequence>`)
/// and how hard the allocator tries before giving up.
#[derive(Debug, Getters, Clone, PartialEq)]
pub struct IdentifierConfig {
    prefix: String,
    padding: usize,
    max_attempts: u32,
}

impl IdentifierConfig {
    pub fn new(prefix: String, padding: usize, max_attempts: u32) -> Self {
        Self {
            prefix,
            padding,
            max_attempts,
        }
    }
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX.to_owned(), DEFAULT_PADDING, DEFAULT_MAX_ATTEMPTS)
    }
}

/// Build the config from the app args, falling back to defaults for missing or invalid values.
pub fn build_identifier_config() -> IdentifierConfig {
    let prefix = retrieve_arg_value([PREFIX_ARG])
        .map(|prefix| prefix.trim().to_owned())
        .filter(|prefix| !prefix.is_empty())
        .unwrap_or_else(|| DEFAULT_PREFIX.to_owned());
    let padding = retrieve_parsed_arg_value(PADDING_ARG)
        .filter(|padding| *padding <= MAX_PADDING)
        .unwrap_or(DEFAULT_PADDING);
    let max_attempts = retrieve_parsed_arg_value(MAX_ATTEMPTS_ARG)
        .filter(|max_attempts| *max_attempts > 0)
        .unwrap_or(DEFAULT_MAX_ATTEMPTS);

    IdentifierConfig::new(prefix, padding, max_attempts)
}

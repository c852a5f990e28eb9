pub(crate) mod application;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod export;
pub(crate) mod identifier;

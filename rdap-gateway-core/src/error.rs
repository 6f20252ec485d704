//! Error taxonomy for the routing core, grounded in the shape of
//! `icann-rdap-common::iana::BootstrapRegistryError` and
//! `icann-rdap-srv::error::RdapServerError`, but scoped to what this crate
//! actually raises.

use thiserror::Error;

/// Errors raised by [`crate::authority::AuthorityStore`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthorityStoreError {
    #[error("server URI set matches more than one authority")]
    AmbiguousAuthority,
    #[error("server URI `{0}` is already claimed by a different authority")]
    ServerConflict(String),
}

/// Errors raised by [`crate::directory::Directory`] read operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("no authority covers the queried resource")]
    ResourceNotFound,
    #[error("request input failed syntactic validation: {0}")]
    MalformedRequest(String),
}

/// Errors raised by [`crate::scraper::BootstrapScraper`] during a refresh cycle.
///
/// Any variant here aborts the whole cycle; the live generation is left
/// untouched and the scheduler logs the failure.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("bootstrap document from {uri} has unsupported or missing version: {found:?}")]
    BootstrapVersion { uri: String, found: Option<String> },
    #[error("bootstrap document from {uri} is malformed: {reason}")]
    BootstrapFormat { uri: String, reason: String },
    #[error("request to {uri} failed: {source}")]
    Network {
        uri: String,
        #[source]
        source: reqwest::Error,
    },
    #[error(transparent)]
    AuthorityStore(#[from] AuthorityStoreError),
}

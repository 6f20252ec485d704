//! Gateway-level error type, grounded on the shape of
//! `icann-rdap-srv::error::RdapServerError`: a flat `thiserror` enum over
//! everything a handler or `main()` can fail with. Storage-specific variants
//! (`SqlDb`, `EmptyIndexData`, `NonJsonFile`, `NonRdapJsonFile`) are dropped
//! since this gateway has no object store of its own; a variant wrapping
//! [`DirectoryError`] and one for outbound-forwarding failures replace them.

use std::num::ParseIntError;

use rdap_gateway_core::error::{DirectoryError, ScraperError};
use thiserror::Error;

/// Errors from the RDAP gateway server.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("forwarding request to upstream authority failed: {0}")]
    Forward(#[from] reqwest::Error),
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    EnvVar(#[from] std::env::VarError),
    #[error(transparent)]
    IntEnvVar(#[from] ParseIntError),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("bootstrap refresh failed: {0}")]
    Scraper(#[from] ScraperError),
}

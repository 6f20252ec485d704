//! Bootstrap configuration, grounded on
//! `icann-rdap-client::http::reqwest::ReqwestClientConfig`'s
//! builder-with-defaults shape. Reading these from the environment is the
//! caller's job (`rdap-gateway-srv::config`, which owns `envmnt`/`dotenv`);
//! this crate only defines the defaults and the struct itself.

use std::collections::HashSet;
use std::time::Duration;

/// Configuration for [`crate::scraper::BootstrapScraper`] and
/// [`crate::scheduler::ScraperScheduler`].
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Base URI IANA bootstrap documents are fetched relative to.
    pub base_uri: String,
    /// Refresh period.
    pub interval: Duration,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Bootstrap document versions this scraper accepts.
    pub supported_versions: HashSet<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            base_uri: "https://data.iana.org/rdap/".to_string(),
            interval: Duration::from_secs(86400),
            request_timeout: Duration::from_secs(30),
            supported_versions: HashSet::from(["1.0".to_string()]),
        }
    }
}

#[buildstructor::buildstructor]
impl BootstrapConfig {
    #[builder]
    pub fn new(
        base_uri: Option<String>,
        interval_seconds: Option<u64>,
        request_timeout_seconds: Option<u64>,
        supported_versions: Option<HashSet<String>>,
    ) -> Self {
        let default = Self::default();
        Self {
            base_uri: base_uri.unwrap_or(default.base_uri),
            interval: interval_seconds
                .map(Duration::from_secs)
                .unwrap_or(default.interval),
            request_timeout: request_timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(default.request_timeout),
            supported_versions: supported_versions.unwrap_or(default.supported_versions),
        }
    }
}

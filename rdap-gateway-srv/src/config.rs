//! Environment-driven configuration, grounded on the `envmnt`/`dotenv`
//! pattern in `icann-rdap-srv`'s `bin/rdap-srv.rs` `main()` and the
//! `buildstructor`-builder shape of `icann-rdap-srv::config::ListenConfig`.
//! The teacher reads its config values directly in `main()` rather than
//! collecting them into one struct; here they're gathered into
//! [`GatewayConfig`] so the binary and its tests can construct one without
//! touching the process environment.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use buildstructor::Builder;
use rdap_gateway_core::BootstrapConfig;

/// RDAP server listening configuration.
#[derive(Debug, Builder)]
pub struct ListenConfig {
    /// If specified, determines the IP address of the interface to bind to.
    /// If unspecified, the server binds all interfaces.
    pub ip_addr: Option<String>,

    /// If specified, determines the port number the server will bind to.
    /// If unspecified, the OS picks an ephemeral port.
    pub port: Option<u32>,
}

/// Everything the gateway needs beyond the listening socket: bootstrap
/// refresh settings, the outbound forwarding timeout, and the optional
/// static-authorities overlay.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bootstrap: BootstrapConfig,
    pub forward_timeout: Duration,
    pub static_authorities_file: Option<PathBuf>,
}

const LISTEN_ADDR: &str = "RDAP_GATEWAY_LISTEN_ADDR";
const LISTEN_PORT: &str = "RDAP_GATEWAY_LISTEN_PORT";
pub const LOG: &str = "RDAP_GATEWAY_LOG";
const REQUEST_TIMEOUT_SECS: &str = "RDAP_GATEWAY_REQUEST_TIMEOUT_SECS";
const STATIC_AUTHORITIES_FILE: &str = "RDAP_GATEWAY_STATIC_AUTHORITIES_FILE";
const BOOTSTRAP_BASE_URI: &str = "RDAP_GATEWAY_BOOTSTRAP_BASE_URI";
const BOOTSTRAP_INTERVAL_SECS: &str = "RDAP_GATEWAY_BOOTSTRAP_INTERVAL_SECONDS";
const BOOTSTRAP_REQUEST_TIMEOUT_SECS: &str = "RDAP_GATEWAY_BOOTSTRAP_REQUEST_TIMEOUT_SECONDS";
const BOOTSTRAP_SUPPORTED_VERSIONS: &str = "RDAP_GATEWAY_BOOTSTRAP_SUPPORTED_VERSIONS";

/// Default `tracing_subscriber::EnvFilter` directive if [`LOG`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

impl ListenConfig {
    /// Reads listen address/port from the environment.
    pub fn from_env() -> Self {
        Self::builder()
            .ip_addr(envmnt::get_or(LISTEN_ADDR, "127.0.0.1"))
            .port(envmnt::get_u32(LISTEN_PORT, 3000))
            .build()
    }
}

impl GatewayConfig {
    /// Reads the full gateway configuration from the environment, applying
    /// the defaults `spec.md` §6 names plus the additional keys
    /// `SPEC_FULL.md` §6 adds for the HTTP surface.
    pub fn from_env() -> Self {
        let supported_versions = envmnt::get_or(BOOTSTRAP_SUPPORTED_VERSIONS, "1.0")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<HashSet<_>>();
        let bootstrap = BootstrapConfig::builder()
            .base_uri(envmnt::get_or(
                BOOTSTRAP_BASE_URI,
                "https://data.iana.org/rdap/",
            ))
            .interval_seconds(envmnt::get_u64(BOOTSTRAP_INTERVAL_SECS, 86400))
            .request_timeout_seconds(envmnt::get_u64(BOOTSTRAP_REQUEST_TIMEOUT_SECS, 30))
            .supported_versions(supported_versions)
            .build();

        let static_authorities_file = envmnt::get_or(STATIC_AUTHORITIES_FILE, "");
        let static_authorities_file =
            (!static_authorities_file.is_empty()).then(|| PathBuf::from(static_authorities_file));

        Self {
            bootstrap,
            forward_timeout: Duration::from_secs(envmnt::get_u64(REQUEST_TIMEOUT_SECS, 10)),
            static_authorities_file,
        }
    }
}

/// Logs the resolved configuration values at startup, mirroring the
/// teacher's `debug_config_vars()` in `bin/rdap-srv.rs`.
pub fn debug_config_vars() {
    tracing::debug!("{LISTEN_ADDR} = {}", envmnt::get_or(LISTEN_ADDR, "127.0.0.1"));
    tracing::debug!("{LISTEN_PORT} = {}", envmnt::get_u32(LISTEN_PORT, 3000));
    tracing::debug!("{LOG} = {}", envmnt::get_or(LOG, DEFAULT_LOG_FILTER));
    tracing::debug!(
        "{REQUEST_TIMEOUT_SECS} = {}",
        envmnt::get_u64(REQUEST_TIMEOUT_SECS, 10)
    );
    tracing::debug!(
        "{STATIC_AUTHORITIES_FILE} = {}",
        envmnt::get_or(STATIC_AUTHORITIES_FILE, "<unset>")
    );
    tracing::debug!(
        "{BOOTSTRAP_BASE_URI} = {}",
        envmnt::get_or(BOOTSTRAP_BASE_URI, "https://data.iana.org/rdap/")
    );
    tracing::debug!(
        "{BOOTSTRAP_INTERVAL_SECS} = {}",
        envmnt::get_u64(BOOTSTRAP_INTERVAL_SECS, 86400)
    );
}

//! Fetches IANA bootstrap documents and commits them into the routing core.
//!
//! Parsing is grounded on `icann-rdap-common::iana::RdapBootstrapRegistry`'s
//! `{version, publication, description, services: Vec<Vec<Vec<String>>>}`
//! shape and on `icann-rdap-srv::bootstrap`'s per-registry-type handling
//! (`make_dns_bootstrap`, `make_asn_bootstrap`, `make_ip_bootstrap`), but
//! instead of writing one template file per service, each service is
//! resolved to an `Authority` and folded straight into a staging
//! generation builder. The HTTP client setup is grounded on
//! `icann-rdap-client::http::reqwest::create_reqwest_client`.

use ipnet::{Ipv4Net, Ipv6Net};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::authority::{canonicalize_uri, AuthorityStore};
use crate::config::BootstrapConfig;
use crate::error::ScraperError;
use crate::resource_store::ResourceStore;

/// Wire shape of one IANA bootstrap document (RFC 7484).
#[derive(Debug, Deserialize)]
struct BootstrapDocument {
    version: Option<String>,
    #[allow(dead_code)]
    publication: Option<String>,
    #[allow(dead_code)]
    description: Option<String>,
    services: Vec<Vec<Vec<String>>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Asn,
    Dns,
    Ipv4,
    Ipv6,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Endpoint::Asn => "asn.json",
            Endpoint::Dns => "dns.json",
            Endpoint::Ipv4 => "ipv4.json",
            Endpoint::Ipv6 => "ipv6.json",
        }
    }
}

/// Fetches, validates, and installs IANA bootstrap data.
pub struct BootstrapScraper {
    client: Client,
    config: BootstrapConfig,
}

impl BootstrapScraper {
    pub fn new(config: BootstrapConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("rdap-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    /// Runs one full refresh cycle. On success the live [`ResourceStore`]
    /// generation is replaced; on any failure it is left untouched and the
    /// error is returned for the scheduler to log. `static_overlay`, if
    /// given, is folded in after the scraped documents so operator entries
    /// take precedence over anything IANA advertises for the same resource.
    pub async fn run_cycle(
        &self,
        authorities: &AuthorityStore,
        resource_store: &ResourceStore,
        static_overlay: Option<&crate::static_authorities::StaticAuthorities>,
    ) -> Result<(), ScraperError> {
        let (asn_doc, dns_doc, ipv4_doc, ipv6_doc) = tokio::try_join!(
            self.fetch(Endpoint::Asn),
            self.fetch(Endpoint::Dns),
            self.fetch(Endpoint::Ipv4),
            self.fetch(Endpoint::Ipv6),
        )?;

        let mut builder = resource_store.stage();

        for (tlds, uris) in dns_doc.services.into_iter().filter_map(split_service) {
            let authority = self.resolve_authority(authorities, &uris)?;
            for tld in tlds {
                builder.domain_map_mut().insert(&tld, authority);
            }
        }

        for (ranges, uris) in asn_doc.services.into_iter().filter_map(split_service) {
            let authority = self.resolve_authority(authorities, &uris)?;
            for range in ranges {
                let (low, high) = parse_asn_range(&range)
                    .ok_or_else(|| ScraperError::BootstrapFormat {
                        uri: self.url(Endpoint::Asn),
                        reason: format!("invalid ASN range `{range}`"),
                    })?;
                builder.asn_map_mut().insert(low, high, authority);
            }
        }

        for (cidrs, uris) in ipv4_doc.services.into_iter().filter_map(split_service) {
            let authority = self.resolve_authority(authorities, &uris)?;
            for cidr in cidrs {
                let net: Ipv4Net = cidr.parse().map_err(|_| ScraperError::BootstrapFormat {
                    uri: self.url(Endpoint::Ipv4),
                    reason: format!("invalid IPv4 CIDR `{cidr}`"),
                })?;
                builder.ip_table_mut().insert_v4(net, authority);
            }
        }

        for (cidrs, uris) in ipv6_doc.services.into_iter().filter_map(split_service) {
            let authority = self.resolve_authority(authorities, &uris)?;
            for cidr in cidrs {
                let net: Ipv6Net = cidr.parse().map_err(|_| ScraperError::BootstrapFormat {
                    uri: self.url(Endpoint::Ipv6),
                    reason: format!("invalid IPv6 CIDR `{cidr}`"),
                })?;
                builder.ip_table_mut().insert_v6(net, authority);
            }
        }

        if let Some(overlay) = static_overlay {
            overlay.merge_into(&mut builder, authorities)?;
        }

        resource_store.commit(builder);
        debug!("bootstrap refresh cycle committed");
        Ok(())
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}/{}",
            self.config.base_uri.trim_end_matches('/'),
            endpoint.path()
        )
    }

    async fn fetch(&self, endpoint: Endpoint) -> Result<BootstrapDocument, ScraperError> {
        let url = self.url(endpoint);
        let response = self
            .client
            .get(url.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ScraperError::Network {
                uri: url.clone(),
                source,
            })?;
        let response = response.error_for_status().map_err(|source| ScraperError::Network {
            uri: url.clone(),
            source,
        })?;
        let text = response
            .text()
            .await
            .map_err(|source| ScraperError::Network {
                uri: url.clone(),
                source,
            })?;
        let document: BootstrapDocument =
            serde_json::from_str(&text).map_err(|e| ScraperError::BootstrapFormat {
                uri: url.clone(),
                reason: e.to_string(),
            })?;
        match &document.version {
            Some(version) if self.config.supported_versions.contains(version) => Ok(document),
            found => Err(ScraperError::BootstrapVersion {
                uri: url,
                found: found.clone(),
            }),
        }
    }

    fn resolve_authority(
        &self,
        authorities: &AuthorityStore,
        server_uris: &[String],
    ) -> Result<crate::authority::AuthorityId, ScraperError> {
        let canonical: Vec<String> = server_uris
            .iter()
            .filter_map(|uri| canonicalize_uri(uri).ok())
            .collect();
        if canonical.is_empty() {
            warn!("bootstrap service advertised no usable server URIs");
        }
        match authorities.find_by_server_uris(&canonical)? {
            Some(existing) => Ok(existing.id),
            None => {
                let authority = authorities.create_anonymous();
                authorities.add_servers(authority.id, &canonical)?;
                Ok(authority.id)
            }
        }
    }
}

/// Splits one `[resources, serverUris]` bootstrap service entry. Returns
/// `None` for malformed entries missing either half, matching the teacher's
/// `service.first()`/`service.last()` access pattern in
/// `icann-rdap-common::iana`.
fn split_service(service: Vec<Vec<String>>) -> Option<(Vec<String>, Vec<String>)> {
    if service.len() < 2 {
        return None;
    }
    let uris = service.last()?.clone();
    let resources = service.first()?.clone();
    Some((resources, uris))
}

fn parse_asn_range(range: &str) -> Option<(u32, u32)> {
    let mut parts = range.splitn(2, '-');
    let low: u32 = parts.next()?.parse().ok()?;
    let high: u32 = parts.next().map(str::parse).transpose().ok()?.unwrap_or(low);
    if low > high {
        return None;
    }
    Some((low, high))
}

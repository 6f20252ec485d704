//! Loads an operator-supplied overlay of authorities and resource mappings.
//!
//! `spec.md` §1 mentions "optional operator-configured authorities" without
//! detailing a format; this reuses the IANA bootstrap wire shape
//! (`[[resources...], [serverUris...]]` per service, see
//! [`crate::scraper::BootstrapScraper`]) so an operator describes an
//! override the same way IANA describes a real one, keyed by name instead
//! of discovered anonymously — grounded on
//! `icann-rdap-srv::storage::mem::config`'s file-based test data loading,
//! generalised from "load a fixture directory" to "load one overlay file".

use std::path::Path;

use ipnet::{Ipv4Net, Ipv6Net};
use serde::Deserialize;

use crate::authority::AuthorityStore;
use crate::error::ScraperError;
use crate::resource_store::GenerationBuilder;

/// One named authority plus the resources it should be the authority for.
#[derive(Debug, Deserialize)]
pub struct StaticAuthority {
    pub name: String,
    #[serde(default)]
    pub server_uris: Vec<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub asn_ranges: Vec<String>,
    #[serde(default)]
    pub ipv4_prefixes: Vec<String>,
    #[serde(default)]
    pub ipv6_prefixes: Vec<String>,
}

/// Top-level shape of `RDAP_GATEWAY_STATIC_AUTHORITIES_FILE`.
#[derive(Debug, Deserialize)]
pub struct StaticAuthorities {
    #[serde(default)]
    pub authorities: Vec<StaticAuthority>,
}

impl StaticAuthorities {
    /// Reads and parses the overlay file at `path`.
    pub fn load(path: &Path) -> Result<Self, ScraperError> {
        let text = std::fs::read_to_string(path).map_err(|e| ScraperError::BootstrapFormat {
            uri: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| ScraperError::BootstrapFormat {
            uri: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Registers every listed authority and folds its resources into
    /// `builder`. Called after the scraper has populated `builder` from the
    /// IANA bootstrap documents, so a static entry for a resource the
    /// scraper already mapped simply overwrites it — operator overrides win.
    pub fn merge_into(
        &self,
        builder: &mut GenerationBuilder,
        authorities: &AuthorityStore,
    ) -> Result<(), ScraperError> {
        for entry in &self.authorities {
            let authority = authorities.find_or_create_named(&entry.name);
            let canonical: Vec<String> = entry
                .server_uris
                .iter()
                .filter_map(|uri| crate::authority::canonicalize_uri(uri).ok())
                .collect();
            if !canonical.is_empty() {
                authorities.add_servers(authority.id, &canonical)?;
            }

            for domain in &entry.domains {
                builder.domain_map_mut().insert(domain, authority.id);
            }

            for range in &entry.asn_ranges {
                let (low, high) = parse_asn_range(range).ok_or_else(|| ScraperError::BootstrapFormat {
                    uri: entry.name.clone(),
                    reason: format!("invalid ASN range `{range}`"),
                })?;
                builder.asn_map_mut().insert(low, high, authority.id);
            }

            for cidr in &entry.ipv4_prefixes {
                let net: Ipv4Net = cidr.parse().map_err(|_| ScraperError::BootstrapFormat {
                    uri: entry.name.clone(),
                    reason: format!("invalid IPv4 CIDR `{cidr}`"),
                })?;
                builder.ip_table_mut().insert_v4(net, authority.id);
            }

            for cidr in &entry.ipv6_prefixes {
                let net: Ipv6Net = cidr.parse().map_err(|_| ScraperError::BootstrapFormat {
                    uri: entry.name.clone(),
                    reason: format!("invalid IPv6 CIDR `{cidr}`"),
                })?;
                builder.ip_table_mut().insert_v6(net, authority.id);
            }
        }
        Ok(())
    }
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

//! Read-side query API used by request filters.
//!
//! The resource-kind vocabulary (autnum / ip / domain / entity / nameserver)
//! mirrors `icann-rdap-client::query::qtype::QueryType`, trimmed to the
//! kinds this gateway routes rather than the full client-side search
//! surface (entity/domain/nameserver *search* queries have no routing
//! counterpart: a search has no single resource to find an authority for).

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use ipnet::{Ipv4Net, Ipv6Net};

use crate::authority::{Authority, AuthorityId, AuthorityStore};
use crate::error::DirectoryError;
use crate::resource_store::ResourceStore;

/// Read-side facade wired at startup with its backing store and authority
/// registry; no global state, per `spec.md` §9's dependency-injection note.
pub struct Directory {
    store: Arc<ResourceStore>,
    authorities: Arc<AuthorityStore>,
}

impl Directory {
    pub fn new(store: Arc<ResourceStore>, authorities: Arc<AuthorityStore>) -> Self {
        Self { store, authorities }
    }

    /// Parses `asn` (bare digits, already stripped of any `AS` prefix by the
    /// caller) and delegates to the ASN range map.
    pub fn autnum_authority(&self, asn: u32) -> Result<Authority, DirectoryError> {
        let snapshot = self.store.snapshot();
        let id = snapshot.asn_map.lookup(asn);
        self.authority_for(id)
    }

    /// Delegates an already-parsed IPv4/IPv6 address to the longest-prefix
    /// table.
    pub fn ip_authority_addr(&self, addr: IpAddr) -> Result<Authority, DirectoryError> {
        let snapshot = self.store.snapshot();
        let id = match addr {
            IpAddr::V4(v4) => snapshot.ip_table.lookup_v4_addr(v4),
            IpAddr::V6(v6) => snapshot.ip_table.lookup_v6_addr(v6),
        };
        self.authority_for(id)
    }

    /// Delegates an already-parsed CIDR prefix to the longest-prefix table.
    pub fn ip_authority_prefix(&self, prefix: IpPrefix) -> Result<Authority, DirectoryError> {
        let snapshot = self.store.snapshot();
        let id = match prefix {
            IpPrefix::V4(net) => snapshot.ip_table.lookup_v4_prefix(&net),
            IpPrefix::V6(net) => snapshot.ip_table.lookup_v6_prefix(&net),
        };
        self.authority_for(id)
    }

    /// Delegates to the domain suffix map.
    pub fn domain_authority(&self, name: &str) -> Result<Authority, DirectoryError> {
        let snapshot = self.store.snapshot();
        let id = snapshot.domain_map.lookup(name);
        self.authority_for(id)
    }

    /// Entity handles carry a suffix (after the final `-`) naming the
    /// issuing registrar's IANA object tag; resolved as a named authority
    /// rather than through one of the three routing maps.
    pub fn entity_authority(&self, handle: &str) -> Result<Authority, DirectoryError> {
        let tag = handle
            .rsplit('-')
            .next()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| DirectoryError::MalformedRequest(handle.to_string()))?;
        self.authorities
            .find_by_name(&tag.to_ascii_uppercase())
            .ok_or(DirectoryError::ResourceNotFound)
    }

    /// Nameservers resolve via the domain suffix of their own fully
    /// qualified name.
    pub fn nameserver_authority(&self, fqdn: &str) -> Result<Authority, DirectoryError> {
        self.domain_authority(fqdn)
    }

    fn authority_for(&self, id: Option<AuthorityId>) -> Result<Authority, DirectoryError> {
        let id = id.ok_or(DirectoryError::ResourceNotFound)?;
        self.authorities
            .find_by_id(id)
            .ok_or(DirectoryError::ResourceNotFound)
    }
}

/// A parsed CIDR prefix of either address family, as delegated by the HTTP
/// layer after it has already split a `/ip/{addr}/{len}` path.
#[derive(Debug, Clone, Copy)]
pub enum IpPrefix {
    V4(Ipv4Net),
    V6(Ipv6Net),
}

/// Parses an ASN query value, tolerating a leading `AS`/`as` the way
/// `icann-rdap-common::iana::BootstrapRegistry::get_asn_bootstrap_urls` does.
pub fn parse_asn(value: &str) -> Result<u32, DirectoryError> {
    value
        .trim_start_matches(['a', 'A', 's', 'S'])
        .parse::<u32>()
        .map_err(|_| DirectoryError::MalformedRequest(value.to_string()))
}

/// Parses a bare IPv4/IPv6 address.
pub fn parse_ip_addr(value: &str) -> Result<IpAddr, DirectoryError> {
    value
        .parse::<IpAddr>()
        .map_err(|_| DirectoryError::MalformedRequest(value.to_string()))
}

/// Parses a CIDR prefix, picking the address family from the syntax.
pub fn parse_ip_prefix(value: &str) -> Result<IpPrefix, DirectoryError> {
    if let Ok(net) = value.parse::<Ipv4Net>() {
        return Ok(IpPrefix::V4(net));
    }
    if let Ok(net) = value.parse::<Ipv6Net>() {
        return Ok(IpPrefix::V6(net));
    }
    Err(DirectoryError::MalformedRequest(value.to_string()))
}

/// Splits a bare address and a prefix length into a normalised [`IpPrefix`],
/// for the `/ip/{addr}/{length}` path form.
pub fn parse_ip_addr_and_length(addr: &str, length: &str) -> Result<IpPrefix, DirectoryError> {
    let length: u8 = length
        .parse()
        .map_err(|_| DirectoryError::MalformedRequest(length.to_string()))?;
    match addr.parse::<Ipv4Addr>() {
        Ok(v4) => {
            let net = Ipv4Net::new(v4, length)
                .map_err(|_| DirectoryError::MalformedRequest(addr.to_string()))?;
            Ok(IpPrefix::V4(net))
        }
        Err(_) => {
            let v6: Ipv6Addr = addr
                .parse()
                .map_err(|_| DirectoryError::MalformedRequest(addr.to_string()))?;
            let net = Ipv6Net::new(v6, length)
                .map_err(|_| DirectoryError::MalformedRequest(addr.to_string()))?;
            Ok(IpPrefix::V6(net))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("AS64512", 64512)]
    #[case("as64512", 64512)]
    #[case("64512", 64512)]
    fn GIVEN_asn_text_WHEN_parse_asn_THEN_numeric(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(parse_asn(input).unwrap(), expected);
    }

    #[test]
    fn GIVEN_garbage_WHEN_parse_asn_THEN_malformed_request() {
        assert!(matches!(
            parse_asn("not-an-asn"),
            Err(DirectoryError::MalformedRequest(_))
        ));
    }

    #[test]
    fn GIVEN_v4_addr_and_length_WHEN_parse_THEN_v4_prefix() {
        let parsed = parse_ip_addr_and_length("192.0.2.5", "24").unwrap();
        assert!(matches!(parsed, IpPrefix::V4(_)));
    }
}

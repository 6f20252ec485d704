//! Longest-prefix IP routing, grounded directly on
//! `icann-rdap-common::iana::{get_ipv4_bootstrap_urls, get_ipv6_bootstrap_urls}`,
//! which already builds a `prefix_trie::PrefixMap<IpvNNet, _>` per lookup and
//! calls `get_lpm`. Here the map is long-lived and keyed to an
//! [`AuthorityId`] instead of a freshly built `Vec<String>`.

use ipnet::{Ipv4Net, Ipv6Net};
use prefix_trie::PrefixMap;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::authority::AuthorityId;

/// Two independent longest-prefix tries, one per address family.
#[derive(Debug, Clone)]
pub struct IpRoutingTable {
    v4: PrefixMap<Ipv4Net, AuthorityId>,
    v6: PrefixMap<Ipv6Net, AuthorityId>,
}

impl Default for IpRoutingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl IpRoutingTable {
    pub fn new() -> Self {
        Self {
            v4: PrefixMap::new(),
            v6: PrefixMap::new(),
        }
    }

    /// Places `authority` at the node for `prefix`, overwriting whatever was
    /// there. Per `spec.md` §4.2, an overwrite is expected IANA-data
    /// behaviour during a refresh, not an error.
    pub fn insert_v4(&mut self, prefix: Ipv4Net, authority: AuthorityId) {
        self.v4.insert(prefix, authority);
    }

    pub fn insert_v6(&mut self, prefix: Ipv6Net, authority: AuthorityId) {
        self.v6.insert(prefix, authority);
    }

    /// Longest-prefix match for a single address.
    pub fn lookup_v4_addr(&self, addr: Ipv4Addr) -> Option<AuthorityId> {
        let host = Ipv4Net::new(addr, 32).expect("/32 is always valid").trunc();
        self.v4.get_lpm(&host).map(|(_, a)| *a)
    }

    pub fn lookup_v6_addr(&self, addr: Ipv6Addr) -> Option<AuthorityId> {
        let host = Ipv6Net::new(addr, 128)
            .expect("/128 is always valid")
            .trunc();
        self.v6.get_lpm(&host).map(|(_, a)| *a)
    }

    /// Longest-prefix match bounded by `prefix`'s own length: used when the
    /// query itself is a CIDR block rather than a single host.
    pub fn lookup_v4_prefix(&self, prefix: &Ipv4Net) -> Option<AuthorityId> {
        self.v4.get_lpm(prefix).map(|(_, a)| *a)
    }

    pub fn lookup_v6_prefix(&self, prefix: &Ipv6Net) -> Option<AuthorityId> {
        self.v6.get_lpm(prefix).map(|(_, a)| *a)
    }
}

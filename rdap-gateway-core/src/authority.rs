//! The canonical registry of RDAP-serving authorities.
//!
//! Grounded on `icann-rdap-common::iana::get_preferred_url` for the idea of
//! treating a service's server list as a set to be canonicalised and
//! deduplicated, generalised here into a full store that owns `Authority`
//! identity the way `icann-rdap-srv::storage::mem::ops::Mem` owns its
//! objects (internal mutex, read via cloned snapshots).

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use url::Url;

use crate::error::AuthorityStoreError;

/// Opaque handle to an [`Authority`] held by the [`AuthorityStore`].
///
/// Maps in the routing core store this instead of a full [`Authority`], so
/// an authority's lifetime is bounded by the store rather than by however
/// many maps reference it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorityId(u64);

/// An RDAP-serving organisation: a name (possibly synthesised) plus the set
/// of base server URIs it advertises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    pub id: AuthorityId,
    pub name: String,
    pub server_uris: BTreeSet<String>,
    pub aliases: Vec<String>,
}

/// Canonicalises a server URI for comparison: lowercases scheme and host,
/// strips a default port, and leaves the path (including any trailing
/// slash) untouched.
pub fn canonicalize_uri(uri: &str) -> Result<String, url::ParseError> {
    let mut parsed = Url::parse(uri)?;
    let scheme = parsed.scheme().to_ascii_lowercase();
    parsed.set_scheme(&scheme).ok();
    if let Some(host) = parsed.host_str() {
        let host = host.to_ascii_lowercase();
        parsed.set_host(Some(&host))?;
    }
    let default_port = match scheme.as_str() {
        "https" => Some(443),
        "http" => Some(80),
        _ => None,
    };
    if parsed.port() == default_port {
        parsed.set_port(None).ok();
    }
    Ok(parsed.to_string())
}

#[derive(Default)]
struct Inner {
    by_id: HashMap<AuthorityId, Authority>,
    by_uri: HashMap<String, AuthorityId>,
    by_name: HashMap<String, AuthorityId>,
    next_id: u64,
    next_anonymous: u64,
}

/// The single source of truth for URI-to-authority ownership.
///
/// Reads and writes are both serialised behind an internal mutex: the store
/// is mutated only by the scraper during a refresh cycle (at most one
/// cycle in flight per scraper, per `spec.md` §4.8), so contention is
/// negligible and a plain mutex is the simplest correct tool, matching
/// `icann-rdap-srv::storage::mem::ops::Mem`'s use of a lock around its
/// object maps.
pub struct AuthorityStore {
    inner: Mutex<Inner>,
}

impl Default for AuthorityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorityStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn find_by_id(&self, id: AuthorityId) -> Option<Authority> {
        let inner = self.inner.lock().expect("authority store mutex poisoned");
        inner.by_id.get(&id).cloned()
    }

    pub fn find_by_name(&self, name: &str) -> Option<Authority> {
        let inner = self.inner.lock().expect("authority store mutex poisoned");
        inner
            .by_name
            .get(name)
            .and_then(|id| inner.by_id.get(id))
            .cloned()
    }

    /// Returns the authority owning any of `uris`, if one exists. Fails with
    /// [`AuthorityStoreError::AmbiguousAuthority`] if the canonicalised URIs
    /// are split across more than one authority.
    pub fn find_by_server_uris(
        &self,
        uris: &[String],
    ) -> Result<Option<Authority>, AuthorityStoreError> {
        let inner = self.inner.lock().expect("authority store mutex poisoned");
        let mut found: Option<AuthorityId> = None;
        for uri in uris {
            if let Some(id) = inner.by_uri.get(uri) {
                match found {
                    None => found = Some(*id),
                    Some(existing) if existing == *id => {}
                    Some(_) => return Err(AuthorityStoreError::AmbiguousAuthority),
                }
            }
        }
        Ok(found.and_then(|id| inner.by_id.get(&id)).cloned())
    }

    /// Mints an authority with a fresh synthetic name and an empty server
    /// set. Callers normally follow this with [`Self::add_servers`].
    pub fn create_anonymous(&self) -> Authority {
        let mut inner = self.inner.lock().expect("authority store mutex poisoned");
        inner.next_id += 1;
        let id = AuthorityId(inner.next_id);
        inner.next_anonymous += 1;
        let name = format!("anonymous-{}", inner.next_anonymous);
        let authority = Authority {
            id,
            name: name.clone(),
            server_uris: BTreeSet::new(),
            aliases: Vec::new(),
        };
        inner.by_id.insert(id, authority.clone());
        inner.by_name.insert(name, id);
        authority
    }

    /// Registers a name, minting an authority if one doesn't already exist
    /// under it. Used by operator-configured static authorities.
    pub fn find_or_create_named(&self, name: &str) -> Authority {
        if let Some(existing) = self.find_by_name(name) {
            return existing;
        }
        let mut inner = self.inner.lock().expect("authority store mutex poisoned");
        inner.next_id += 1;
        let id = AuthorityId(inner.next_id);
        let authority = Authority {
            id,
            name: name.to_string(),
            server_uris: BTreeSet::new(),
            aliases: Vec::new(),
        };
        inner.by_id.insert(id, authority.clone());
        inner.by_name.insert(name.to_string(), id);
        authority
    }

    /// Extends an authority's server set with already-canonicalised `uris`.
    /// Fails with [`AuthorityStoreError::ServerConflict`] if any URI is
    /// already claimed by a different authority.
    pub fn add_servers(
        &self,
        authority: AuthorityId,
        uris: &[String],
    ) -> Result<Authority, AuthorityStoreError> {
        let mut inner = self.inner.lock().expect("authority store mutex poisoned");
        for uri in uris {
            if let Some(owner) = inner.by_uri.get(uri) {
                if *owner != authority {
                    return Err(AuthorityStoreError::ServerConflict(uri.clone()));
                }
            }
        }
        for uri in uris {
            inner.by_uri.insert(uri.clone(), authority);
        }
        let entry = inner
            .by_id
            .get_mut(&authority)
            .expect("authority id minted by this store");
        entry.server_uris.extend(uris.iter().cloned());
        Ok(entry.clone())
    }
}

//! Forwards a resolved request to one of an [`Authority`]'s RDAP servers and
//! relays the response verbatim — the minimal "actual outbound forwarding"
//! `spec.md` §1 calls out as a surrounding-code concern rather than part of
//! the core. Server-URI preference (prefer `https://`) is grounded on
//! `icann-rdap-common::iana::get_preferred_url`; the request itself reuses
//! the `AppState::forward_client` built the way
//! `icann-rdap-client::http::reqwest::create_reqwest_client` builds its
//! client.

use axum::body::Body;
use axum::response::{IntoResponse, Response};
use rdap_gateway_core::Authority;
use reqwest::Client;

use crate::error::GatewayError;

/// Picks the authority's preferred server URI: the first `https://` one, or
/// the first URI at all if none use TLS.
fn preferred_server_uri(authority: &Authority) -> Option<&str> {
    authority
        .server_uris
        .iter()
        .find(|uri| uri.starts_with("https://"))
        .or_else(|| authority.server_uris.iter().next())
        .map(String::as_str)
}

/// Issues `GET {serverUri}{rdapPath}` against the authority's preferred
/// server and relays status, content-type, and body back to the client
/// unchanged.
pub(crate) async fn forward(
    client: &Client,
    authority: &Authority,
    rdap_path: &str,
) -> Result<Response, GatewayError> {
    let base = preferred_server_uri(authority).ok_or_else(|| {
        GatewayError::Config(format!("authority {} has no server uris", authority.name))
    })?;
    let url = format!("{}{}", base.trim_end_matches('/'), rdap_path);

    tracing::debug!(url, "forwarding to upstream authority");

    let upstream = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/rdap+json")
        .send()
        .await
        .map_err(GatewayError::Forward)?;

    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .cloned();
    let body = upstream.bytes().await.map_err(GatewayError::Forward)?;

    let mut response = Response::builder().status(status);
    if let Some(content_type) = content_type {
        response = response.header(http::header::CONTENT_TYPE, content_type);
    }
    Ok(response
        .body(Body::from(body))
        .expect("status/headers copied from a valid upstream response")
        .into_response())
}

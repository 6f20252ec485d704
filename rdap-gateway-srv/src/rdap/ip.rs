//! Routes an IP query, grounded on
//! `icann-rdap-srv::rdap::ip::network_by_netid`. RFC 7482 splits a prefix
//! query into two path segments (`/ip/{addr}/{length}`) rather than one
//! segment containing a literal `/`, so this gateway routes the bare-address
//! and prefix forms separately instead of the teacher's single
//! slash-sniffing handler.

use axum::extract::{Path, State};
use axum::response::Response;

use rdap_gateway_core::directory::{parse_ip_addr, parse_ip_addr_and_length};

use crate::error::GatewayError;
use crate::rdap::forward::forward;
use crate::server::DynAppState;

/// Resolves a bare IP address query.
#[axum_macros::debug_handler]
#[tracing::instrument(level = "debug")]
pub(crate) async fn ip_by_addr(
    Path(addr): Path<String>,
    state: State<DynAppState>,
) -> Result<Response, GatewayError> {
    let parsed = parse_ip_addr(&addr)?;
    let authority = state.directory.ip_authority_addr(parsed)?;
    forward(&state.forward_client, &authority, &format!("/ip/{addr}")).await
}

/// Resolves an IP prefix query (`/ip/{addr}/{length}`).
#[axum_macros::debug_handler]
#[tracing::instrument(level = "debug")]
pub(crate) async fn ip_by_prefix(
    Path((addr, length)): Path<(String, String)>,
    state: State<DynAppState>,
) -> Result<Response, GatewayError> {
    let prefix = parse_ip_addr_and_length(&addr, &length)?;
    let authority = state.directory.ip_authority_prefix(prefix)?;
    forward(
        &state.forward_client,
        &authority,
        &format!("/ip/{addr}/{length}"),
    )
    .await
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use rdap_gateway_core::{AuthorityStore, Directory, ResourceStore};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::server::AppState;

    #[tokio::test]
    async fn GIVEN_malformed_address_WHEN_ip_by_addr_THEN_malformed() {
        let authorities = AuthorityStore::new();
        let store = ResourceStore::new();
        let directory = Arc::new(Directory::new(Arc::new(store), Arc::new(authorities)));
        let state = AppState::new(directory, Duration::from_secs(5)).expect("client should build");

        let error = ip_by_addr(Path("not-an-address".to_string()), State(Arc::new(state)))
            .await
            .expect_err("malformed address should be rejected");

        assert!(matches!(
            error,
            GatewayError::Directory(rdap_gateway_core::error::DirectoryError::MalformedRequest(_))
        ));
    }

    #[tokio::test]
    async fn GIVEN_address_in_known_prefix_WHEN_ip_by_addr_THEN_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ip/10.1.2.3"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let authorities = AuthorityStore::new();
        let authority = authorities.create_anonymous();
        authorities
            .add_servers(authority.id, &[format!("{}/", server.uri())])
            .expect("uri should not conflict");

        let store = ResourceStore::new();
        let mut builder = store.stage();
        builder
            .ip_table_mut()
            .insert_v4("10.0.0.0/8".parse().unwrap(), authority.id);
        store.commit(builder);

        let directory = Arc::new(Directory::new(Arc::new(store), Arc::new(authorities)));
        let state = AppState::new(directory, Duration::from_secs(5)).expect("client should build");

        let response = ip_by_addr(Path("10.1.2.3".to_string()), State(Arc::new(state)))
            .await
            .expect("handler should succeed");
        assert_eq!(response.status(), http::StatusCode::OK);
    }

    #[tokio::test]
    async fn GIVEN_prefix_in_known_range_WHEN_ip_by_prefix_THEN_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ip/10.1.0.0/24"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let authorities = AuthorityStore::new();
        let authority = authorities.create_anonymous();
        authorities
            .add_servers(authority.id, &[format!("{}/", server.uri())])
            .expect("uri should not conflict");

        let store = ResourceStore::new();
        let mut builder = store.stage();
        builder
            .ip_table_mut()
            .insert_v4("10.0.0.0/8".parse().unwrap(), authority.id);
        store.commit(builder);

        let directory = Arc::new(Directory::new(Arc::new(store), Arc::new(authorities)));
        let state = AppState::new(directory, Duration::from_secs(5)).expect("client should build");

        let response = ip_by_prefix(
            Path(("10.1.0.0".to_string(), "24".to_string())),
            State(Arc::new(state)),
        )
        .await
        .expect("handler should succeed");
        assert_eq!(response.status(), http::StatusCode::OK);
    }
}

//! Routes an autnum query, grounded on
//! `icann-rdap-srv::rdap::autnum::autnum_by_num`. The teacher fetches a
//! local autnum object from storage; this gateway has none, so it resolves
//! the responsible authority and forwards instead.

use axum::extract::{Path, State};
use axum::response::Response;

use rdap_gateway_core::directory::parse_asn;

use crate::error::GatewayError;
use crate::rdap::forward::forward;
use crate::server::DynAppState;

/// Resolves an autnum query and forwards it to the responsible authority.
#[axum_macros::debug_handler]
#[tracing::instrument(level = "debug")]
pub(crate) async fn autnum_by_num(
    Path(as_num): Path<String>,
    state: State<DynAppState>,
) -> Result<Response, GatewayError> {
    let asn = parse_asn(&as_num)?;
    let authority = state.directory.autnum_authority(asn)?;
    forward(&state.forward_client, &authority, &format!("/autnum/{as_num}")).await
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
    async fn GIVEN_non_numeric_asn_WHEN_autnum_by_num_THEN_malformed() {
        let authorities = AuthorityStore::new();
        let store = ResourceStore::new();
        let directory = Arc::new(Directory::new(Arc::new(store), Arc::new(authorities)));
        let state = AppState::new(directory, Duration::from_secs(5)).expect("client should build");

        let error = autnum_by_num(Path("not-a-number".to_string()), State(Arc::new(state)))
            .await
            .expect_err("non-numeric ASN should be rejected");

        assert!(matches!(
            error,
            GatewayError::Directory(rdap_gateway_core::error::DirectoryError::MalformedRequest(_))
        ));
    }

    #[tokio::test]
    async fn GIVEN_asn_in_range_WHEN_autnum_by_num_THEN_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/autnum/64512"))
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
        builder.asn_map_mut().insert(64512, 64513, authority.id);
        store.commit(builder);

        let directory = Arc::new(Directory::new(Arc::new(store), Arc::new(authorities)));
        let state = AppState::new(directory, Duration::from_secs(5)).expect("client should build");

        let response = autnum_by_num(Path("64512".to_string()), State(Arc::new(state)))
            .await
            .expect("handler should succeed");
        assert_eq!(response.status(), http::StatusCode::OK);
    }
}

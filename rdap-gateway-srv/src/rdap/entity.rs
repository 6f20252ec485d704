//! Routes an entity query, grounded on
//! `icann-rdap-srv::rdap::entity::entity_by_handle`.

use axum::extract::{Path, State};
use axum::response::Response;

use crate::error::GatewayError;
use crate::rdap::forward::forward;
use crate::server::DynAppState;

/// Resolves an entity query and forwards it to the issuing authority.
#[axum_macros::debug_handler]
#[tracing::instrument(level = "debug")]
pub(crate) async fn entity_by_handle(
    Path(handle): Path<String>,
    state: State<DynAppState>,
) -> Result<Response, GatewayError> {
    let authority = state.directory.entity_authority(&handle)?;
    forward(&state.forward_client, &authority, &format!("/entity/{handle}")).await
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
    async fn GIVEN_unregistered_handle_WHEN_entity_by_handle_THEN_resource_not_found() {
        let authorities = AuthorityStore::new();
        let store = ResourceStore::new();
        let directory = Arc::new(Directory::new(Arc::new(store), Arc::new(authorities)));
        let state = AppState::new(directory, Duration::from_secs(5)).expect("client should build");

        let error = entity_by_handle(Path("ACME-1".to_string()), State(Arc::new(state)))
            .await
            .expect_err("empty directory should fail");

        assert!(matches!(
            error,
            GatewayError::Directory(rdap_gateway_core::error::DirectoryError::ResourceNotFound)
        ));
    }

    #[tokio::test]
    async fn GIVEN_registered_handle_WHEN_entity_by_handle_THEN_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/entity/5372808215-ERL"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let authorities = AuthorityStore::new();
        // entity_authority resolves by the IANA object tag after the final
        // `-`, looked up as an authority name, so the authority backing the
        // handle's registrar must be registered under that tag.
        let authority = authorities.find_or_create_named("ERL");
        authorities
            .add_servers(authority.id, &[format!("{}/", server.uri())])
            .expect("uri should not conflict");

        let store = ResourceStore::new();
        let directory = Arc::new(Directory::new(Arc::new(store), Arc::new(authorities)));
        let state = AppState::new(directory, Duration::from_secs(5)).expect("client should build");

        let response = entity_by_handle(Path("5372808215-ERL".to_string()), State(Arc::new(state)))
            .await
            .expect("handler should succeed");
        assert_eq!(response.status(), http::StatusCode::OK);
    }
}

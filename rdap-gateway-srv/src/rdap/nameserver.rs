//! Routes a nameserver query, grounded on
//! `icann-rdap-srv::rdap::nameserver::nameserver_by_name`, keeping its
//! "fewer than two dots is malformed" validation — a fully qualified
//! nameserver name always has at least a second- and top-level label.

use axum::extract::{Path, State};
use axum::response::Response;
use rdap_gateway_core::error::DirectoryError;

use crate::error::GatewayError;
use crate::rdap::forward::forward;
use crate::server::DynAppState;

/// Resolves a nameserver query and forwards it to the responsible authority.
#[axum_macros::debug_handler]
#[tracing::instrument(level = "debug")]
pub(crate) async fn nameserver_by_name(
    Path(ns_name): Path<String>,
    state: State<DynAppState>,
) -> Result<Response, GatewayError> {
    let dot_count = ns_name.chars().filter(|c| *c == '.').count();
    if dot_count < 2 {
        return Err(GatewayError::Directory(DirectoryError::MalformedRequest(
            ns_name,
        )));
    }

    let authority = state.directory.nameserver_authority(&ns_name)?;
    forward(
        &state.forward_client,
        &authority,
        &format!("/nameserver/{ns_name}"),
    )
    .await
}

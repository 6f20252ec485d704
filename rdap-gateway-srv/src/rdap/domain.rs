//! Routes a domain query, grounded on
//! `icann-rdap-srv::rdap::domain::domain_by_name`, keeping its name
//! canonicalisation (trailing dot, whitespace, casing — addresses the same
//! issues the teacher's comment cites) since `Directory::domain_authority`
//! expects an already-canonical ASCII name per `spec.md` §4.4.

use axum::extract::{Path, State};
use axum::response::Response;

use crate::error::GatewayError;
use crate::rdap::forward::forward;
use crate::server::DynAppState;

/// Resolves a domain query and forwards it to the responsible authority.
///
/// `domain_name` may be A-label or U-label per RFC 9082.
#[axum_macros::debug_handler]
#[tracing::instrument(level = "debug")]
pub(crate) async fn domain_by_name(
    Path(domain_name): Path<String>,
    state: State<DynAppState>,
) -> Result<Response, GatewayError> {
    let canonical = domain_name
        .trim_end_matches('.')
        .trim()
        .to_ascii_lowercase();

    let authority = state.directory.domain_authority(&canonical)?;
    forward(
        &state.forward_client,
        &authority,
        &format!("/domain/{canonical}"),
    )
    .await
}

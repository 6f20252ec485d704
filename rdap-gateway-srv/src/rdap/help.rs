//! Serves `/rdap/help`, grounded on
//! `icann-rdap-srv::rdap::srvhelp::srvhelp`. The teacher's version asks its
//! object store for an operator-authored help object (falling back to a
//! host-specific one); this gateway has no object store, so it renders a
//! minimal, self-describing RFC 9083 response instead — a notice naming the
//! query kinds it routes.

use axum::response::{IntoResponse, Response};
use axum::Json;
use rdap_gateway_common::response::{Common, Notice, NoticeOrRemark};

use crate::rdap::response::RDAP_HEADERS;

/// Gets server help.
#[axum_macros::debug_handler]
#[tracing::instrument(level = "debug")]
pub(crate) async fn srvhelp() -> Response {
    let common = Common::level0()
        .notices(vec![Notice(
            NoticeOrRemark::builder()
                .title("rdap-gateway".to_string())
                .description(vec![
                    "this server routes RDAP queries to the authority responsible for the \
                     queried resource and does not serve object data directly"
                        .to_string(),
                    "supported query kinds: domain, ip, autnum, nameserver, entity".to_string(),
                ])
                .build(),
        )])
        .build();
    (RDAP_HEADERS, Json(common)).into_response()
}

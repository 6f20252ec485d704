//! Maps RDAP paths to handlers, grounded on
//! `icann-rdap-srv::rdap::router::rdap_router`. Search endpoints
//! (`/domains`, `/nameservers`, `/entities`) are dropped: a search has no
//! single authority to resolve to, and this gateway's `Directory` exposes
//! only single-resource lookups (see `rdap-gateway-core::directory`'s module
//! doc).

use axum::{routing::get, Router};

use crate::server::AppState;

use super::{autnum, domain, entity, help, ip, nameserver};

pub fn rdap_router() -> Router<std::sync::Arc<AppState>> {
    Router::new()
        .route("/domain/:domain", get(domain::domain_by_name))
        .route("/ip/:addr", get(ip::ip_by_addr))
        .route("/ip/:addr/:length", get(ip::ip_by_prefix))
        .route("/autnum/:asnumber", get(autnum::autnum_by_num))
        .route("/nameserver/:name", get(nameserver::nameserver_by_name))
        .route("/entity/:handle", get(entity::entity_by_handle))
        .route("/help", get(help::srvhelp))
}

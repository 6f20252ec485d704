//! Entrypoint, grounded on `icann-rdap-srv`'s `bin/rdap-srv.rs` `main()`:
//! load `.env`, install a tracing subscriber filtered by `RDAP_GATEWAY_LOG`,
//! log the resolved config, then bind and serve. The teacher's `main()`
//! picks a storage backend from `ServiceConfig`; this gateway always wires
//! the same three pieces (an `AuthorityStore`, a `ResourceStore`, and the
//! `Directory` over them), runs one bootstrap cycle before accepting
//! traffic so the first request isn't served against an empty directory,
//! and spawns a `ScraperScheduler` to keep them fresh afterward.

use std::sync::Arc;

use rdap_gateway_core::{
    AuthorityStore, BootstrapScraper, Directory, ResourceStore, ScraperScheduler, StaticAuthorities,
};
use rdap_gateway_srv::config::{debug_config_vars, GatewayConfig, ListenConfig, LOG};
use rdap_gateway_srv::error::GatewayError;
use rdap_gateway_srv::server::{AppState, Listener};
use tracing_subscriber::{
    fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), GatewayError> {
    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env(LOG))
        .init();

    debug_config_vars();

    let listen_config = ListenConfig::from_env();
    let gateway_config = GatewayConfig::from_env();

    let static_overlay = gateway_config
        .static_authorities_file
        .as_deref()
        .map(StaticAuthorities::load)
        .transpose()?
        .map(Arc::new);
    if let Some(path) = &gateway_config.static_authorities_file {
        tracing::info!(path = %path.display(), "loaded static authorities overlay");
    }

    let authorities = Arc::new(AuthorityStore::new());
    let resource_store = Arc::new(ResourceStore::new());
    let scraper = Arc::new(BootstrapScraper::new(gateway_config.bootstrap.clone())?);

    tracing::info!("running initial bootstrap refresh before accepting traffic");
    if let Err(e) = scraper
        .run_cycle(&authorities, &resource_store, static_overlay.as_deref())
        .await
    {
        tracing::warn!(error = %e, "initial bootstrap refresh failed, starting with an empty directory");
    }

    let mut scheduler = ScraperScheduler::new(
        Arc::clone(&scraper),
        Arc::clone(&authorities),
        Arc::clone(&resource_store),
        gateway_config.bootstrap.interval,
    );
    if let Some(overlay) = static_overlay {
        scheduler = scheduler.with_static_overlay(overlay);
    }
    let _shutdown = scheduler.spawn();

    let directory = Arc::new(Directory::new(resource_store, authorities));
    let state = AppState::new(directory, gateway_config.forward_timeout)?;

    let listener = Listener::listen(&listen_config)?;
    listener.start_server(state).await?;
    Ok(())
}

//! HTTP listener bootstrap, grounded on `icann-rdap-srv::server::Listener`.
//! The teacher's `AppState<T>`/`StoreState` indirection exists to support two
//! interchangeable storage backends (`Mem`, `Pg`); this gateway has exactly
//! one kind of state — a [`Directory`] plus a `reqwest::Client` for
//! forwarding — so that trait/generic layer collapses into one concrete
//! `AppState`.

use std::{
    net::{SocketAddr, TcpListener},
    sync::Arc,
    time::Duration,
};

use axum::{error_handling::HandleErrorLayer, Router};
use http::{Method, StatusCode};
use reqwest::Client;
use tower::{BoxError, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use rdap_gateway_core::Directory;

use crate::{config::ListenConfig, error::GatewayError, rdap::router::rdap_router};

/// Holds information on the server listening.
pub struct Listener {
    pub local_addr: SocketAddr,
    tcp_listener: TcpListener,
}

impl Listener {
    pub fn listen(config: &ListenConfig) -> Result<Self, GatewayError> {
        tracing::info!("rdap-gateway version {}", env!("CARGO_PKG_VERSION"));

        #[cfg(debug_assertions)]
        tracing::warn!("server is running in development mode");

        let binding = format!(
            "{}:{}",
            config.ip_addr.as_ref().unwrap_or(&"[::]".to_string()),
            config.port.as_ref().unwrap_or(&0)
        );

        tracing::debug!("tcp binding to {}", binding);

        let listener = TcpListener::bind(binding)?;
        let local_addr = listener.local_addr()?;
        Ok(Self {
            local_addr,
            tcp_listener: listener,
        })
    }

    pub async fn start_server(self, state: AppState) -> Result<(), GatewayError> {
        let app = app_router(state);

        tracing::debug!("listening on {}", self.local_addr);
        axum::Server::from_tcp(self.tcp_listener)
            .map_err(std::io::Error::from)?
            .serve(app.into_make_service_with_connect_info::<SocketAddr>())
            .await
            .map_err(std::io::Error::from)?;
        Ok(())
    }
}

fn app_router(state: AppState) -> Router {
    let state = Arc::new(state);
    Router::new()
        .nest("/rdap", rdap_router())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|error: BoxError| async move {
                    if error.is::<tower::timeout::error::Elapsed>() {
                        Ok(StatusCode::REQUEST_TIMEOUT)
                    } else {
                        Err((
                            StatusCode::INTERNAL_SERVER_ERROR,
                            format!("unhandled internal error: {error}"),
                        ))
                    }
                }))
                .timeout(Duration::from_secs(10))
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(vec![Method::GET])
                        .allow_headers(Any),
                )
                .into_inner(),
        )
        .with_state(state)
}

pub(crate) type DynAppState = Arc<AppState>;

/// Everything an RDAP handler needs: the read-side [`Directory`] and a
/// client for forwarding the resolved request to the upstream authority.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory>,
    pub forward_client: Client,
}

impl AppState {
    pub fn new(
        directory: Arc<Directory>,
        forward_timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let forward_client = Client::builder()
            .timeout(forward_timeout)
            .user_agent(concat!("rdap-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GatewayError::Forward)?;
        Ok(Self {
            directory,
            forward_client,
        })
    }
}

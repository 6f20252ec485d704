//! Drives a [`BootstrapScraper`] on a fixed interval.
//!
//! Grounded on `icann-rdap-srv::bootstrap::loop_bootstrap`'s
//! `loop { sleep(...).await; process_bootstrap(...).await?; }` shape, plus
//! the at-most-one-in-flight guarantee and cancellation support `spec.md`
//! §4.8 adds on top of it (the teacher's loop has neither: it always awaits
//! its own previous iteration and never observes a shutdown signal).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{error, warn};

use crate::authority::AuthorityStore;
use crate::error::ScraperError;
use crate::resource_store::ResourceStore;
use crate::scraper::BootstrapScraper;
use crate::static_authorities::StaticAuthorities;

/// Handle used to request a graceful shutdown of a running
/// [`ScraperScheduler::run`] loop.
#[derive(Clone)]
pub struct ShutdownHandle {
    tx: watch::Sender<bool>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        let _ = self.tx.send(true);
    }
}

/// Ticks a scraper on a fixed interval, skipping a tick if the previous
/// cycle is still running and aborting an in-flight cycle on shutdown.
pub struct ScraperScheduler {
    scraper: Arc<BootstrapScraper>,
    authorities: Arc<AuthorityStore>,
    resource_store: Arc<ResourceStore>,
    interval: Duration,
    static_overlay: Option<Arc<StaticAuthorities>>,
}

impl ScraperScheduler {
    pub fn new(
        scraper: Arc<BootstrapScraper>,
        authorities: Arc<AuthorityStore>,
        resource_store: Arc<ResourceStore>,
        interval: Duration,
    ) -> Self {
        Self {
            scraper,
            authorities,
            resource_store,
            interval,
            static_overlay: None,
        }
    }

    /// Attaches an operator-supplied overlay to fold into every future
    /// refresh cycle this scheduler drives.
    pub fn with_static_overlay(mut self, overlay: Arc<StaticAuthorities>) -> Self {
        self.static_overlay = Some(overlay);
        self
    }

    /// Runs the scheduler loop until shut down. Returns a handle the caller
    /// can use to request cancellation.
    pub fn spawn(self) -> ShutdownHandle {
        let (tx, rx) = watch::channel(false);
        tokio::spawn(self.run(rx));
        ShutdownHandle { tx }
    }

    async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = interval(self.interval);
        let mut current: Option<JoinHandle<Result<(), ScraperError>>> = None;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match &current {
                        Some(handle) if !handle.is_finished() => {
                            warn!("bootstrap refresh tick skipped: previous cycle still running");
                        }
                        _ => {
                            if let Some(handle) = current.take() {
                                if let Ok(Err(e)) = handle.await {
                                    error!(error = %e, "bootstrap refresh cycle failed, retrying next tick");
                                }
                            }
                            let scraper = Arc::clone(&self.scraper);
                            let authorities = Arc::clone(&self.authorities);
                            let resource_store = Arc::clone(&self.resource_store);
                            let static_overlay = self.static_overlay.clone();
                            current = Some(tokio::spawn(async move {
                                scraper
                                    .run_cycle(&authorities, &resource_store, static_overlay.as_deref())
                                    .await
                            }));
                        }
                    }
                }
                _ = shutdown.changed() => {
                    if let Some(handle) = current.take() {
                        handle.abort();
                    }
                    break;
                }
            }
        }
    }
}

//! Periodic remote reconciliation.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::QuoteService;

/// Runs one sync immediately, then one per `interval` until `shutdown` fires.
///
/// Ticks never overlap: a slow pass delays the next one instead of bursting.
pub fn spawn_sync_scheduler(
    service: Arc<QuoteService>,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(interval_secs = interval.as_secs(), "Remote sync scheduler started");

        loop {
            tokio::select! {
                () = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    match service.sync().await {
                        Ok(_) => {},
                        Err(e) if e.is_transient() => {
                            tracing::warn!(error = %e, "Scheduled sync failed, retrying next tick");
                        },
                        Err(e) => tracing::error!(error = %e, "Scheduled sync failed"),
                    }
                }
            }
        }

        tracing::info!("Remote sync scheduler stopped");
    })
}

//! Background removal of expired links.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, error};

use crate::domain::clock::Clock;
use crate::domain::repositories::LinkRepository;

/// Runs the expiry sweep on a fixed period, forever.
///
/// Each tick removes every record whose expiry has passed in a single
/// store pass. A failed sweep is logged and the timer keeps running; the
/// loop only ends when the task is dropped at shutdown.
///
/// Reads that observe an expired record remove it themselves (lazy expiry),
/// so the sweep is a backstop that bounds how long dead records and their
/// click logs occupy memory.
pub async fn run_expiry_sweeper<R: LinkRepository>(
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    period: Duration,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // The first tick of a tokio interval fires immediately; consume it so
    // the first real sweep happens one full period after startup.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        match repository.sweep_expired(clock.now()).await {
            Ok(0) => {}
            Ok(removed) => debug!(removed, "expiry sweep removed stale links"),
            Err(e) => error!("expiry sweep failed: {e}"),
        }
    }
}

//! Expired Entry Sweep
//!
//! Background task that periodically drops expired lookup cache entries.
//! Expiry is still enforced lazily on every access; the sweep only keeps
//! `size` from counting entries nobody has asked for since they expired.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{Clock, LookupCache};

/// Spawns a background task that periodically purges expired entries.
///
/// The task sleeps for `cleanup_interval_secs` between sweeps. Each sweep
/// takes the cache lock once and leaves the hit/miss counters untouched.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = LookupCache::new(CacheConfig::default());
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V, C>(
    cache: LookupCache<V, C>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + 'static,
    C: Clock + Clone,
{
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired();

            if removed > 0 {
                info!("Cache cleanup: removed {} expired entries", removed);
            } else {
                debug!("Cache cleanup: no expired entries found");
            }
        }
    })
}

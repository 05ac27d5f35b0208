//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries. The
//! cache does no scheduling of its own; this task is its only proactive
//! eviction driver. Lazy eviction on reads keeps the cache correct even
//! if this task never runs.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a background task that sweeps the cache at a fixed interval.
///
/// Returns the task's JoinHandle so shutdown can abort it.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(MemoryCache::new());
/// let handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(cache: Arc<MemoryCache<V>>, interval: Duration) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "starting TTL cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired();
            if removed > 0 {
                info!(removed, "TTL cleanup evicted expired entries");
            } else {
                debug!("TTL cleanup found no expired entries");
            }
        }
    })
}

//! Cache Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Weak;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheShared;

/// Spawns the reaper for a cache on the given runtime.
///
/// The first pass runs at `start`, then once per `interval`. Each pass removes every entry at least `interval` old.
///
/// The task only holds a weak reference to the cache, so it exits at the
/// next tick once every `Cache` handle is gone. It can also be aborted
/// through the returned handle.
///
/// # Example
/// ```ignore
/// let handle = spawn_reaper_task(&Handle::current(), Arc::downgrade(&shared), start, interval);
/// // Later:
/// handle.abort();
/// ```
pub(crate) fn spawn_reaper_task(
    runtime: &Handle,
    cache: Weak<CacheShared>,
    start: Instant,
    interval: Duration,
) -> JoinHandle<()> {
    let _guard = runtime.enter();
    let mut ticker = time::interval_at(start, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    runtime.spawn(async move {
        info!("Starting cache reaper with interval of {:?}", interval);

        loop {
            ticker.tick().await;

            let Some(cache) = cache.upgrade() else {
                debug!("Cache dropped, stopping reaper");
                break;
            };
            let removed = cache.reap(Instant::now());

            if removed > 0 {
                info!("Cache reap: removed {} stale entries", removed);
            } else {
                debug!("Cache reap: no stale entries found");
            }
        }
    })
}

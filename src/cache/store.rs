//! Cache Store Module
//!
//! The expiring cache: a HashMap behind one exclusive lock, swept by a
//! background reaper task that removes entries older than the interval.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant};
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_reaper_task;

// == Cache State ==
/// Everything guarded by the cache lock.
#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

// == Shared Cache ==
/// State shared between every `Cache` handle and the reaper task.
///
/// The reaper only holds a `Weak` reference, so dropping the last handle
/// drops this value, which aborts the reaper.
#[derive(Debug)]
pub(crate) struct CacheShared {
    state: Mutex<CacheState>,
    interval: Duration,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl CacheShared {
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // Every critical section leaves the map consistent, so a panic
        // elsewhere never invalidates it.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    // == Reap ==
    /// Removes every entry whose age at `now` is at least the interval.
    ///
    /// Returns the number of entries removed.
    pub(crate) fn reap(&self, now: Instant) -> usize {
        let interval = self.interval;
        let mut state = self.lock();

        let before = state.entries.len();
        state.entries.retain(|_, entry| !entry.is_stale(now, interval));
        let removed = before - state.entries.len();

        state.stats.record_reaped(removed);
        removed
    }

    fn abort_reaper(&self) {
        let handle = self
            .reaper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}

impl Drop for CacheShared {
    fn drop(&mut self) {
        self.abort_reaper();
    }
}

// == Cache ==
/// Process-local key/value store whose entries expire a fixed interval
/// after their last write.
///
/// Expiry is enforced only by the reaper: `get` returns whatever is still
/// resident, even if it is older than the interval but has not been swept
/// yet. Cloning yields another handle to the same store.
#[derive(Debug, Clone)]
pub struct Cache {
    shared: Arc<CacheShared>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper task.
    ///
    /// # Errors
    /// * `InvalidConfiguration` if `interval` is zero, or so large that the
    ///   first reap would fall past the end of the clock
    /// * `NoRuntime` if called outside of a tokio runtime
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidConfiguration(
                "cache interval must be greater than zero".to_string(),
            ));
        }
        let runtime = Handle::try_current().map_err(|_| PokedexError::NoRuntime)?;
        let first_reap = Instant::now().checked_add(interval).ok_or_else(|| {
            PokedexError::InvalidConfiguration(format!(
                "cache interval {:?} is too large",
                interval
            ))
        })?;

        let shared = Arc::new(CacheShared {
            state: Mutex::new(CacheState::default()),
            interval,
            reaper: Mutex::new(None),
        });

        let handle = spawn_reaper_task(&runtime, Arc::downgrade(&shared), first_reap, interval);
        *shared.reaper.lock().unwrap_or_else(PoisonError::into_inner) = Some(handle);

        Ok(Self { shared })
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, resetting its age.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let entry = CacheEntry::new(value.into());

        let mut state = self.shared.lock();
        debug!(key = %key, bytes = entry.value.len(), "cache add");
        state.entries.insert(key, entry);
    }

    // == Get ==
    /// Returns the resident payload for `key`, if any.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let mut state = self.shared.lock();
        let value = state.entries.get(key).map(|entry| entry.value.clone());

        match value {
            Some(_) => {
                state.stats.record_hit();
                debug!(key, "cache hit");
            }
            None => {
                state.stats.record_miss();
                debug!(key, "cache miss");
            }
        }
        value
    }

    // == Shutdown ==
    /// Stops the reaper task. Idempotent.
    ///
    /// Entries stop expiring afterwards; `add` and `get` keep working.
    pub fn shutdown(&self) {
        self.shared.abort_reaper();
    }

    /// Returns true while the reaper task is alive.
    pub fn is_reaper_running(&self) -> bool {
        self.shared
            .reaper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// The expiry interval, which is also the reap period.
    pub fn interval(&self) -> Duration {
        self.shared.interval()
    }

    // == Stats ==
    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> CacheStats {
        let state = self.shared.lock();
        let mut stats = state.stats.clone();
        stats.set_total_entries(state.entries.len());
        stats
    }

    /// Number of resident entries, including stale ones not yet reaped.
    pub fn len(&self) -> usize {
        self.shared.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.lock().entries.is_empty()
    }
}

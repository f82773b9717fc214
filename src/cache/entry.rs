//! Cache Entry Module
//!
//! Defines a single cached payload stamped with its write time.

use bytes::Bytes;
use tokio::time::{Duration, Instant};

// == Cache Entry ==
/// A stored payload and the instant it was written.
///
/// Entries are never mutated; re-adding a key replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Bytes,
    /// Write timestamp, taken from the tokio clock
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(value: Bytes) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed between the write and `now`. Saturates at zero.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry has lived for at least `interval`.
    ///
    /// Boundary condition: an entry whose age equals the interval is stale.
    pub fn is_stale(&self, now: Instant, interval: Duration) -> bool {
        self.age(now) >= interval
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_creation() {
        let entry = CacheEntry::new(Bytes::from_static(b"testdata"));

        assert_eq!(entry.value, Bytes::from_static(b"testdata"));
        assert_eq!(entry.age(Instant::now()), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_age_tracks_clock() {
        let entry = CacheEntry::new(Bytes::from_static(b"testdata"));

        tokio::time::advance(Duration::from_millis(250)).await;

        assert_eq!(entry.age(Instant::now()), Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_boundary_condition() {
        let interval = Duration::from_millis(5);
        let entry = CacheEntry::new(Bytes::from_static(b"testdata"));

        tokio::time::advance(Duration::from_millis(4)).await;
        assert!(!entry.is_stale(Instant::now(), interval));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(entry.is_stale(Instant::now(), interval), "Entry should be stale at boundary");
    }

    #[tokio::test(start_paused = true)]
    async fn test_age_before_creation_is_zero() {
        let earlier = Instant::now();
        tokio::time::advance(Duration::from_millis(10)).await;
        let entry = CacheEntry::new(Bytes::new());

        assert_eq!(entry.age(earlier), Duration::ZERO);
    }
}

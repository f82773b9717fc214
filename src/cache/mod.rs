//! Cache Module
//!
//! Provides an in-memory byte cache whose entries expire a fixed interval
//! after they were written.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::Cache;

pub(crate) use store::CacheShared;

// == Public Constants ==
/// Interval used by the command-line client when none is configured
pub const DEFAULT_INTERVAL_SECS: u64 = 5;

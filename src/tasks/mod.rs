//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: removes entries older than the cache interval on every tick

mod reaper;

pub(crate) use reaper::spawn_reaper_task;

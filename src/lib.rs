//! Pokedex - A REPL client for the PokeAPI
//!
//! Browses location areas, explores them, and catches pokemon, memoizing
//! every response body in a time-expiring cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;

//! API Module
//!
//! HTTP client for the PokeAPI REST endpoints, reading through the
//! expiring cache.
//!
//! # Endpoints
//! - `GET /location-area` - Paginated list of location areas
//! - `GET /location-area/{name}` - Pokemon encounters in one area
//! - `GET /pokemon/{name}` - Details of one pokemon

pub mod client;

pub use client::PokeApiClient;

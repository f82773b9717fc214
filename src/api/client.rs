//! PokeAPI Client
//!
//! Issues GET requests, caching successful response bodies by URL.

use bytes::Bytes;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for the PokeAPI that consults the cache before the network.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    /// Creates a client with the timeout and root URL from `config`.
    pub fn from_config(config: &Config, cache: Cache) -> Result<Self> {
        let http = Client::builder().timeout(config.http_timeout()).build()?;
        Ok(Self::with_client(http, config.api_url.clone(), cache))
    }

    /// Creates a client around an existing HTTP client.
    pub fn with_client(http: Client, base_url: impl Into<String>, cache: Cache) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == Fetch ==
    /// Returns the body for `url`, from the cache when resident.
    ///
    /// On a miss the URL is fetched and, if the status is a success, the body
    /// is added to the cache. Error responses are never cached.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url) {
            return Ok(body);
        }

        debug!(url, "fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone());
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Endpoint ==
    /// Appends `segments` to the base URL's path, percent-encoding each one
    /// so user input can never add or climb path levels.
    fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let invalid = |reason: String| {
            PokedexError::InvalidConfiguration(format!(
                "invalid API URL {}: {}",
                self.base_url, reason
            ))
        };

        let mut url = Url::parse(&self.base_url).map_err(|err| invalid(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }

    /// URL of the first location area page.
    pub fn location_areas_url(&self) -> Result<String> {
        self.endpoint(&["location-area"])
    }

    pub fn location_area_url(&self, name: &str) -> Result<String> {
        self.endpoint(&["location-area", name])
    }

    pub fn pokemon_url(&self, name: &str) -> Result<String> {
        self.endpoint(&["pokemon", name])
    }

    /// Fetches a page of location areas; `None` means the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        match page_url {
            Some(url) => self.fetch_json(url).await,
            None => self.fetch_json(&self.location_areas_url()?).await,
        }
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch_json(&self.location_area_url(name)?).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch_json(&self.pokemon_url(name)?).await
    }
}

//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the cache and the API client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache or client constructed with unusable parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Cache constructed outside of a tokio runtime
    #[error("No tokio runtime available to run the cache reaper")]
    NoRuntime,

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    /// Response body was not the JSON we expected
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = PokedexError::Status {
            status: 404,
            url: "https://pokeapi.co/api/v2/pokemon/missingno".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request to https://pokeapi.co/api/v2/pokemon/missingno failed with status 404"
        );
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: PokedexError = serde_err.into();
        assert!(matches!(err, PokedexError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to decode response"));
    }
}

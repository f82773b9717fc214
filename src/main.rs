//! Pokedex - A REPL client for the PokeAPI
//!
//! Browses location areas, explores them, and catches pokemon, memoizing
//! every response body in a time-expiring cache.

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Cache, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the cache, which starts its reaper task
/// 4. Run the REPL on stdin/stdout until `exit` or EOF
/// 5. Stop the reaper and log final cache statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_url={}, cache_interval={}s, http_timeout={}s",
        config.api_url, config.cache_interval, config.http_timeout
    );

    let cache = Cache::new(config.cache_interval()).context("failed to create cache")?;
    let client =
        PokeApiClient::from_config(&config, cache).context("failed to build HTTP client")?;
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let (stats, result) = repl::run_session(&mut session, stdin, &mut stdout).await;
    info!(
        "Cache statistics: hits={}, misses={}, reaped={}, resident={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.reaped,
        stats.total_entries,
        stats.hit_rate()
    );

    result.context("REPL stopped on an I/O error")
}

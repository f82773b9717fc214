//! REPL Module
//!
//! Reads lines, splits them into words and dispatches to the command table.

mod commands;
mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::cache::CacheStats;
use crate::error::Result;

pub use commands::Command;
pub use session::{is_caught, Flow, Session, CATCH_ROLL_CEILING};

/// Printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

// == Clean Input ==
/// Lower-cases `text` and splits it on whitespace, dropping empty words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

// == Run ==
/// Runs the read-eval-print loop until `exit` or end of input.
///
/// Command failures are reported on `out` and the loop keeps going; only
/// errors reading `input` or writing `out` end it early. Input bytes that are
/// not valid UTF-8 are replaced rather than rejected.
pub async fn run<R, W>(session: &mut Session, mut input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            writeln!(out)?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let words = clean_input(&line);
        let Some((name, rest)) = words.split_first() else {
            continue;
        };
        let Some(command) = Command::from_name(name) else {
            writeln!(out, "Unknown command. Type 'help' for available commands.")?;
            continue;
        };

        match session
            .execute(command, rest.first().map(String::as_str), out)
            .await
        {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                warn!(command = command.name(), error = %err, "command failed");
                writeln!(out, "Error: {}", err)?;
            }
        }
    }

    Ok(())
}

// == Run Session ==
/// Runs the loop, then stops the cache reaper however the loop ended.
///
/// Returns the final cache statistics along with the loop's result so the
/// caller can report both.
pub async fn run_session<R, W>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> (CacheStats, Result<()>)
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let result = run(session, input, out).await;

    let cache = session.client().cache();
    cache.shutdown();
    (cache.stats(), result)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use reqwest::Client;

    use super::*;
    use crate::api::PokeApiClient;
    use crate::cache::Cache;

    #[test]
    fn test_clean_input() {
        let cases = [
            ("  hello  world  ", vec!["hello", "world"]),
            ("HELLO WORLD", vec!["hello", "world"]),
            ("Catch\tPikachu\n", vec!["catch", "pikachu"]),
            ("   ", vec![]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input: {:?}", input);
        }
    }

    proptest! {
        #[test]
        fn prop_clean_input_words_are_trimmed_lowercase(text in "[a-zA-Z \t]{0,40}") {
            let words = clean_input(&text);

            prop_assert_eq!(words.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase());
            for word in &words {
                prop_assert!(!word.is_empty());
                prop_assert!(!word.contains(char::is_whitespace));
                prop_assert_eq!(word, &word.to_lowercase());
            }
        }
    }

    async fn run_script(script: &str) -> String {
        let cache = Cache::new(Duration::from_secs(60)).unwrap();
        let client = PokeApiClient::with_client(Client::new(), "http://127.0.0.1:9/api/v2", cache);
        let mut session = Session::with_rng(client, StdRng::seed_from_u64(1));
        let mut out = Vec::new();

        run(&mut session, script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let out = run_script("fly\n").await;
        assert_eq!(
            out,
            "Pokedex > Unknown command. Type 'help' for available commands.\nPokedex > \n"
        );
    }

    #[tokio::test]
    async fn test_blank_line_reprompts() {
        let out = run_script("\n   \nexit\n").await;
        assert_eq!(out, "Pokedex > Pokedex > Pokedex > Closing the Pokedex... Goodbye!\n");
    }

    #[tokio::test]
    async fn test_exit_stops_reading() {
        let out = run_script("EXIT\nhelp\n").await;
        assert!(!out.contains("Welcome to the Pokedex!"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_keeps_loop_running() {
        let cache = Cache::new(Duration::from_secs(60)).unwrap();
        let client = PokeApiClient::with_client(Client::new(), "http://127.0.0.1:9/api/v2", cache);
        let mut session = Session::with_rng(client, StdRng::seed_from_u64(1));
        let mut out = Vec::new();

        run(&mut session, &b"caf\xe9\nhelp\n"[..], &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Pokedex > Unknown command. Type 'help' for available commands.\n"));
        assert!(out.contains("Welcome to the Pokedex!"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_session_stops_reaper_on_io_error() {
        let cache = Cache::new(Duration::from_secs(60)).unwrap();
        let client = PokeApiClient::with_client(Client::new(), "http://127.0.0.1:9/api/v2", cache.clone());
        let mut session = Session::with_rng(client, StdRng::seed_from_u64(1));
        cache.add("https://example.com", "testdata");

        let (stats, result) = run_session(&mut session, &b"help\n"[..], &mut BrokenPipe).await;

        assert!(matches!(result, Err(crate::error::PokedexError::Io(_))));
        assert!(!cache.is_reaper_running());
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test]
    async fn test_run_session_stops_reaper_on_exit() {
        let cache = Cache::new(Duration::from_secs(60)).unwrap();
        let client = PokeApiClient::with_client(Client::new(), "http://127.0.0.1:9/api/v2", cache.clone());
        let mut session = Session::with_rng(client, StdRng::seed_from_u64(1));
        let mut out = Vec::new();

        let (_, result) = run_session(&mut session, &b"exit\n"[..], &mut out).await;

        assert!(result.is_ok());
        assert!(!cache.is_reaper_running());
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        let out = run_script("exit").await;
        assert_eq!(out, "Pokedex > Closing the Pokedex... Goodbye!\n");
    }

    #[tokio::test]
    async fn test_command_error_keeps_loop_running() {
        let out = run_script("explore pastoria-city-area\nexit\n").await;

        assert!(!out.contains("Exploring pastoria-city-area..."));
        assert!(out.contains("Error: HTTP request failed"));
        assert!(out.ends_with("Closing the Pokedex... Goodbye!\n"));
    }
}

//! REPL Session
//!
//! Per-process state (pagination cursors, caught pokemon) and the handler
//! for each command.

use std::collections::HashMap;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::api::PokeApiClient;
use crate::error::Result;
use crate::models::Pokemon;
use crate::repl::Command;

/// Catch rolls are drawn uniformly from `0..CATCH_ROLL_CEILING`.
pub const CATCH_ROLL_CEILING: u32 = 346;

/// Whether the REPL should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A roll strictly above the pokemon's base experience catches it.
pub fn is_caught(roll: u32, base_experience: u32) -> bool {
    roll > base_experience
}

// == Session ==
pub struct Session {
    client: PokeApiClient,
    next: Option<String>,
    previous: Option<String>,
    caught: HashMap<String, Pokemon>,
    rng: StdRng,
}

impl Session {
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_os_rng())
    }

    /// Creates a session with a fixed RNG, for reproducible catches.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            caught: HashMap::new(),
            rng,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous_page(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn caught(&self) -> &HashMap<String, Pokemon> {
        &self.caught
    }

    // == Execute ==
    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        arg: Option<&str>,
        out: &mut W,
    ) -> Result<Flow> {
        if let (Some(usage), None) = (command.usage(), arg) {
            writeln!(out, "{}", usage)?;
            return Ok(Flow::Continue);
        }
        let arg = arg.unwrap_or_default();

        match command {
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Help => self.help(out)?,
            Command::Map => {
                let page_url = self.next.clone();
                self.show_page(page_url.as_deref(), out).await?;
            }
            Command::MapBack => match self.previous.clone() {
                Some(page_url) => self.show_page(Some(&page_url), out).await?,
                None => writeln!(out, "you're on the first page")?,
            },
            Command::Explore => self.explore(arg, out).await?,
            Command::Catch => self.catch(arg, out).await?,
            Command::Inspect => self.inspect(arg, out)?,
            Command::Pokedex => self.pokedex(out)?,
        }
        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "Welcome to the Pokedex!\nUsage:\n\n")?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        Ok(())
    }

    async fn show_page<W: Write>(&mut self, page_url: Option<&str>, out: &mut W) -> Result<()> {
        let page = self.client.location_areas(page_url).await?;

        self.next = page.next;
        self.previous = page.previous;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area_name: &str, out: &mut W) -> Result<()> {
        let area = self.client.location_area(area_name).await?;

        writeln!(out, "Exploring {}...", area_name)?;
        for name in area.pokemon_names() {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self.client.pokemon(name).await?;
        writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

        let roll = self.rng.random_range(0..CATCH_ROLL_CEILING);
        if is_caught(roll, pokemon.base_experience) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            info!(pokemon = %pokemon.name, roll, "caught");
            self.caught.insert(pokemon.name.clone(), pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(pokemon) = self.caught.get(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  -{}", kind.kind.name)?;
        }
        Ok(())
    }

    fn pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.caught.is_empty() {
            writeln!(out, "Your Pokedex is empty.")?;
            return Ok(());
        }

        let mut names: Vec<&str> = self.caught.keys().map(String::as_str).collect();
        names.sort_unstable();
        writeln!(out, "Your Pokedex:")?;
        for name in names {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}

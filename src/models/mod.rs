//! Response models for the PokeAPI
//!
//! Only the fields the client prints are decoded; everything else in the
//! JSON bodies is ignored.

pub mod location;
pub mod pokemon;

use serde::Deserialize;

pub use location::{LocationArea, LocationAreaPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

/// A `{ name, url }` reference, the API's standard link to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

//! Pokemon model
//!
//! `GET /pokemon/{name}`, reduced to what `catch` and `inspect` need.

use serde::{Deserialize, Deserializer};

use super::NamedResource;

#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Null for some alternate forms in the API
    #[serde(default, deserialize_with = "null_as_zero")]
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "name": "pikachu",
        "base_experience": 112,
        "height": 4,
        "weight": 60,
        "order": 35,
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": ""}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": ""}}
        ]
    }"#;

    #[test]
    fn test_pokemon_deserialize() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, 112);
        assert_eq!(pokemon.height, 4);
        assert_eq!(pokemon.weight, 60);
        assert_eq!(pokemon.stats[1].stat.name, "attack");
        assert_eq!(pokemon.stats[1].base_stat, 55);
        assert_eq!(pokemon.types[0].kind.name, "electric");
    }

    #[test]
    fn test_null_base_experience() {
        let json = r#"{"name": "pikachu-gmax", "base_experience": null, "height": 210, "weight": 10000}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.base_experience, 0);
        assert!(pokemon.stats.is_empty());
        assert!(pokemon.types.is_empty());
    }
}

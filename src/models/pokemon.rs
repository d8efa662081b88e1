//! Pokemon payload returned by the lookup service and stored in the cache.

use serde::{Deserialize, Serialize};

/// Lookup result projected to the fields the tournament API uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Type names in slot order, e.g. `["grass", "poison"]`
    pub types: Vec<String>,
    pub height: u32,
    pub weight: u32,
}

/// Raw PokeAPI `/pokemon/{name}` body. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct PokeApiPokemon {
    pub id: u32,
    pub name: String,
    pub types: Vec<PokeApiTypeSlot>,
    pub height: u32,
    pub weight: u32,
}

#[derive(Debug, Deserialize)]
pub struct PokeApiTypeSlot {
    #[serde(rename = "type")]
    pub kind: PokeApiNamed,
}

#[derive(Debug, Deserialize)]
pub struct PokeApiNamed {
    pub name: String,
}

impl From<PokeApiPokemon> for Pokemon {
    fn from(raw: PokeApiPokemon) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            types: raw.types.into_iter().map(|slot| slot.kind.name).collect(),
            height: raw.height,
            weight: raw.weight,
        }
    }
}

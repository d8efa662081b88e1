//! Tournament Registry
//!
//! In-memory store of tournaments and their registered players. Nothing is
//! persisted across restarts.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::Pokemon;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Pokemon facts recorded on a player at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonData {
    pub id: u32,
    pub types: Vec<String>,
    pub height: u32,
    pub weight: u32,
}

impl From<&Pokemon> for PokemonData {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id,
            types: pokemon.types.clone(),
            height: pokemon.height,
            weight: pokemon.weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub tournament_id: Uuid,
    pub pokemon_data: PokemonData,
}

#[derive(Debug, Default)]
struct RegistryInner {
    tournaments: HashMap<Uuid, Tournament>,
    /// Players per tournament, in registration order
    players: HashMap<Uuid, Vec<Player>>,
}

// == Registry ==
/// Shared handle to the tournament store. Clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    inner: Arc<RwLock<RegistryInner>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tournament. The name must be non-empty.
    pub fn create_tournament(&self, name: &str) -> Result<Tournament> {
        if name.is_empty() {
            return Err(ApiError::InvalidRequest("Name is required".to_string()));
        }

        let tournament = Tournament {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write();
        inner.players.insert(tournament.id, Vec::new());
        inner.tournaments.insert(tournament.id, tournament.clone());
        Ok(tournament)
    }

    /// Looks up a tournament by its string id. Malformed ids are simply absent.
    pub fn tournament(&self, id: &str) -> Option<Tournament> {
        let id = Uuid::parse_str(id).ok()?;
        self.inner.read().tournaments.get(&id).cloned()
    }

    /// All tournaments, oldest first.
    pub fn tournaments(&self) -> Vec<Tournament> {
        let mut all: Vec<Tournament> = self.inner.read().tournaments.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        all
    }

    /// Registers a player in an existing tournament.
    pub fn add_player(
        &self,
        tournament_id: Uuid,
        name: &str,
        pokemon_data: PokemonData,
    ) -> Result<Player> {
        let mut inner = self.inner.write();
        let Some(players) = inner.players.get_mut(&tournament_id) else {
            return Err(ApiError::NotFound("Tournament not found".to_string()));
        };

        let player = Player {
            id: Uuid::new_v4(),
            name: name.to_string(),
            tournament_id,
            pokemon_data,
        };
        players.push(player.clone());
        Ok(player)
    }

    /// Players of a tournament, or None if the tournament does not exist.
    pub fn players(&self, tournament_id: Uuid) -> Option<Vec<Player>> {
        self.inner.read().players.get(&tournament_id).cloned()
    }
}

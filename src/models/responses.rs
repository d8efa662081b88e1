//! Response DTOs for the tournament API
//!
//! Defines the structure of outgoing HTTP response bodies. Field names are
//! camelCase on the wire.

use serde::Serialize;

use crate::registry::{Player, PokemonData, Tournament};

/// Body for tournament endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResponse {
    pub id: String,
    pub name: String,
    /// RFC 3339 creation time
    pub created_at: String,
}

impl From<&Tournament> for TournamentResponse {
    fn from(tournament: &Tournament) -> Self {
        Self {
            id: tournament.id.to_string(),
            name: tournament.name.clone(),
            created_at: tournament.created_at.to_rfc3339(),
        }
    }
}

/// Body returned when a player registers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub tournament_id: String,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.to_string(),
            name: player.name.clone(),
            tournament_id: player.tournament_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PokemonDataResponse {
    pub id: u32,
    pub types: Vec<String>,
    pub height: u32,
    pub weight: u32,
}

impl From<&PokemonData> for PokemonDataResponse {
    fn from(data: &PokemonData) -> Self {
        Self {
            id: data.id,
            types: data.types.clone(),
            height: data.height,
            weight: data.weight,
        }
    }
}

/// Player with the Pokemon facts captured at registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetailResponse {
    pub id: String,
    pub name: String,
    pub tournament_id: String,
    pub pokemon_data: PokemonDataResponse,
}

impl From<&Player> for PlayerDetailResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.to_string(),
            name: player.name.clone(),
            tournament_id: player.tournament_id.to_string(),
            pokemon_data: PokemonDataResponse::from(&player.pokemon_data),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always "OK" while the server answers
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

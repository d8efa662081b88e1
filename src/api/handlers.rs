//! API Handlers
//!
//! HTTP request handlers for tournaments, players, health and cache stats.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::cache::{CacheStats, LookupCache};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::lookup::{CachedLookup, PokemonLookup};
use crate::models::{
    CreatePlayerRequest, CreateTournamentRequest, HealthResponse, PlayerDetailResponse,
    PlayerResponse, Pokemon, TournamentResponse,
};
use crate::registry::{PokemonData, Registry};

/// Application state shared across all handlers.
///
/// Both members are cheap handles over shared storage.
#[derive(Clone)]
pub struct AppState {
    pub registry: Registry,
    pub lookup: CachedLookup,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        registry: Registry,
        cache: LookupCache<Pokemon>,
        source: Arc<dyn PokemonLookup>,
    ) -> Self {
        Self {
            registry,
            lookup: CachedLookup::new(cache, source),
        }
    }

    /// Creates a new AppState from configuration with an empty registry.
    pub fn from_config(config: &Config, source: Arc<dyn PokemonLookup>) -> Self {
        Self::new(
            Registry::new(),
            LookupCache::new(config.cache_config()),
            source,
        )
    }
}

/// Handler for POST /tournaments
pub async fn create_tournament_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<CreateTournamentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TournamentResponse>)> {
    let Json(req) = body.map_err(|_| ApiError::InvalidRequest("Name is required".to_string()))?;
    let name = req.validate().map_err(ApiError::InvalidRequest)?;

    let tournament = state.registry.create_tournament(name)?;
    info!(id = %tournament.id, name = %tournament.name, "tournament created");

    Ok((StatusCode::CREATED, Json(TournamentResponse::from(&tournament))))
}

/// Handler for GET /tournaments
pub async fn list_tournaments_handler(
    State(state): State<AppState>,
) -> Json<Vec<TournamentResponse>> {
    let tournaments = state.registry.tournaments();
    Json(tournaments.iter().map(TournamentResponse::from).collect())
}

/// Handler for GET /tournaments/:id
pub async fn get_tournament_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TournamentResponse>> {
    let tournament = state.registry.tournament(&id).ok_or_else(tournament_not_found)?;
    Ok(Json(TournamentResponse::from(&tournament)))
}

/// Handler for POST /tournaments/:id/players
///
/// Only names the lookup service recognises can register.
pub async fn create_player_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlayerResponse>)> {
    let Json(req) = body.map_err(|_| ApiError::InvalidRequest("Name is required".to_string()))?;
    let name = req.validate().map_err(ApiError::InvalidRequest)?;

    let tournament = state.registry.tournament(&id).ok_or_else(tournament_not_found)?;

    // No lock is held across this await
    let pokemon = state.lookup.lookup(name).await?;

    let player = state
        .registry
        .add_player(tournament.id, name, PokemonData::from(&pokemon))?;
    info!(id = %player.id, name = %player.name, tournament = %tournament.id, "player registered");

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(&player))))
}

/// Handler for GET /tournaments/:id/players
pub async fn list_players_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PlayerDetailResponse>>> {
    let tournament = state.registry.tournament(&id).ok_or_else(tournament_not_found)?;
    let players = state
        .registry
        .players(tournament.id)
        .ok_or_else(tournament_not_found)?;

    Ok(Json(players.iter().map(PlayerDetailResponse::from).collect()))
}

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.lookup.stats())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

fn tournament_not_found() -> ApiError {
    ApiError::NotFound("Tournament not found".to_string())
}

//! Request and Response models for the tournament API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies, plus the
//! Pokemon payload held by the lookup cache.

pub mod pokemon;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use pokemon::{PokeApiPokemon, Pokemon};
pub use requests::{CreatePlayerRequest, CreateTournamentRequest};
pub use responses::{
    HealthResponse, PlayerDetailResponse, PlayerResponse, PokemonDataResponse, TournamentResponse,
};

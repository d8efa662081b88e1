//! Lookup Module
//!
//! Boundary to the external Pokemon lookup service, and the cache-aside
//! wrapper request handlers go through.

mod client;
mod service;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Pokemon;

pub use client::PokeApiClient;
pub use service::CachedLookup;

// == Lookup Error ==
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The service has no Pokemon by that name
    #[error("Pokemon not found: {0}")]
    NotFound(String),

    /// The request failed or the response was unreadable
    #[error("Lookup failed: {0}")]
    Transport(String),
}

// == Lookup Port ==
/// An asynchronous source of Pokemon data.
#[async_trait]
pub trait PokemonLookup: Send + Sync + 'static {
    async fn fetch(&self, name: &str) -> Result<Pokemon, LookupError>;
}

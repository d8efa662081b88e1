//! PokeAPI HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

use super::{LookupError, PokemonLookup};
use crate::models::{PokeApiPokemon, Pokemon};

/// Fetches `GET {base_url}/pokemon/{name}`.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PokeApiClient {
    /// Builds a client with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| LookupError::Transport(format!("invalid base URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::Transport(format!(
                "invalid base URL {base_url}"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// URL for one Pokemon. The name is lowercased and percent-encoded as a
    /// single path segment.
    pub fn pokemon_url(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("pokemon")
                .push(&name.to_lowercase());
        }
        url
    }
}

#[async_trait]
impl PokemonLookup for PokeApiClient {
    async fn fetch(&self, name: &str) -> Result<Pokemon, LookupError> {
        let url = self.pokemon_url(name);
        debug!(%url, "fetching pokemon");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(name, error = %e, "pokemon lookup request failed");
            LookupError::Transport(e.to_string())
        })?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound(name.to_string())),
            status => {
                warn!(name, %status, "pokemon lookup returned an error status");
                return Err(LookupError::Transport(format!("upstream returned {status}")));
            }
        }

        let raw: PokeApiPokemon = response
            .json()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(raw.into())
    }
}

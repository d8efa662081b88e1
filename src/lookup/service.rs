//! Cache-aside lookup: serve from the cache, fall back to the remote
//! service on a miss, and remember successful answers.

use std::sync::Arc;

use tracing::debug;

use super::{LookupError, PokemonLookup};
use crate::cache::{CacheStats, Clock, LookupCache, SystemClock};
use crate::models::Pokemon;

pub struct CachedLookup<C = SystemClock> {
    cache: LookupCache<Pokemon, C>,
    source: Arc<dyn PokemonLookup>,
}

impl<C: Clock + Clone> CachedLookup<C> {
    pub fn new(cache: LookupCache<Pokemon, C>, source: Arc<dyn PokemonLookup>) -> Self {
        Self { cache, source }
    }

    /// Resolves `name`, consulting the cache first.
    ///
    /// The cache lock is released before the remote fetch; failures are
    /// returned without touching the cache.
    pub async fn lookup(&self, name: &str) -> Result<Pokemon, LookupError> {
        if let Some(pokemon) = self.cache.get(name) {
            debug!(name, "pokemon cache hit");
            return Ok(pokemon);
        }

        let pokemon = self.source.fetch(name).await?;
        self.cache.set(name, pokemon.clone());
        Ok(pokemon)
    }

    pub fn cache(&self) -> &LookupCache<Pokemon, C> {
        &self.cache
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl<C: Clone> Clone for CachedLookup<C> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            source: Arc::clone(&self.source),
        }
    }
}

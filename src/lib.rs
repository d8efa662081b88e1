//! Poke Tourney - Pokemon tournament registration API
//!
//! Players register under a Pokemon name, validated against an external
//! lookup service. Lookups go through a bounded in-memory cache with TTL
//! expiration and LRU eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod registry;
pub mod tasks;

pub use api::AppState;
pub use cache::LookupCache;
pub use config::{CacheConfig, Config};
pub use tasks::spawn_cleanup_task;

//! API Routes
//!
//! Configures the Axum router with all tournament API endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, create_player_handler, create_tournament_handler,
    get_tournament_handler, health_handler, list_players_handler, list_tournaments_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /tournaments` - Create a tournament
/// - `GET /tournaments` - List tournaments
/// - `GET /tournaments/:id` - Fetch one tournament
/// - `POST /tournaments/:id/players` - Register a Pokemon player
/// - `GET /tournaments/:id/players` - List players with their Pokemon data
/// - `GET /cache/stats` - Lookup cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/tournaments",
            post(create_tournament_handler).get(list_tournaments_handler),
        )
        .route("/tournaments/:id", get(get_tournament_handler))
        .route(
            "/tournaments/:id/players",
            post(create_player_handler).get(list_players_handler),
        )
        .route("/cache/stats", get(cache_stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

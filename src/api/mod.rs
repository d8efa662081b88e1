//! API Module
//!
//! HTTP handlers and routing for the tournament registration API.
//!
//! # Endpoints
//! - `POST /tournaments`, `GET /tournaments`, `GET /tournaments/:id`
//! - `POST /tournaments/:id/players`, `GET /tournaments/:id/players`
//! - `GET /cache/stats` - Lookup cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

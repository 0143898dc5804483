//! # ship-api
//!
//! HTTP quote API for the curbside-rs shipping engine.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for shipping quotes and method listing
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/quote` | Quote all registered methods |
//! | GET | `/api/v1/methods` | List registered methods |
//! | GET | `/api/v1/methods/:id` | Get method info |
//! | POST | `/api/v1/methods/:id/quote` | Quote a single method |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};

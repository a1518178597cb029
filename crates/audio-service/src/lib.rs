//! Audio Token Service Library
//!
//! Issues short-lived access tokens that let a participant join a room on a
//! LiveKit-compatible media-routing service, and hands out the session
//! identifier embedded in each token's metadata.
//!
//! # Architecture
//!
//! The service follows the Handler -> Service pattern. There is no
//! repository layer: nothing is persisted.
//!
//! ```text
//! routes/mod.rs -> handlers/*.rs -> services/*.rs -> crypto/mod.rs
//! ```
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `crypto` - Access token claims, signing and verification
//! - `errors` - Error types with HTTP status code mapping
//! - `handlers` - HTTP request handlers
//! - `middleware` - HTTP middleware (request metrics)
//! - `models` - Request/response data models
//! - `observability` - Metrics and log-safe field hashing
//! - `routes` - Axum router setup
//! - `services` - Token issuance and the inert session lifecycle

pub mod config;
pub mod crypto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod routes;
pub mod services;

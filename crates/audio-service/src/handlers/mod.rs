//! HTTP request handlers for the Audio Token Service.

pub mod audio;
pub mod health;
pub mod metrics;

pub use audio::{create_token, initialize_session, terminate_session};
pub use health::health_check;
pub use metrics::metrics_handler;

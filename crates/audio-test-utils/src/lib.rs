//! # Audio Test Utilities
//!
//! Shared test utilities for the Audio Token Service.
//!
//! This crate provides:
//! - Server test harness (`TestAudioServer` for E2E tests)
//! - Fixed signing credentials and token decoding helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use audio_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestAudioServer::spawn().await?;
//!     let response = reqwest::get(format!("{}/api/health", server.url())).await?;
//!
//!     assert_eq!(response.status(), 200);
//!     Ok(())
//! }
//! ```

pub mod server_harness;
pub mod tokens;

// Re-export commonly used items
pub use server_harness::*;
pub use tokens::*;

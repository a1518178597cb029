//! Business logic for the Audio Token Service.

pub mod session_service;
pub mod token_service;

pub use token_service::{IssuedToken, TokenIssuer, TOKEN_TTL_SECONDS};

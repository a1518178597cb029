//! Session lifecycle placeholders.
//!
//! There is no session store. Initialization is token issuance without caller
//! metadata; termination acknowledges any id, issued or not, and cannot
//! invalidate a token that was already handed out.

use crate::errors::IssuanceError;
use crate::services::token_service::{IssuedToken, TokenIssuer};

/// Issue a token whose metadata holds only the generated session id.
pub fn initialize(
    issuer: &TokenIssuer,
    identity: &str,
    room: &str,
) -> Result<IssuedToken, IssuanceError> {
    issuer.issue_token(identity, room, None)
}

/// Acknowledge a termination request.
///
/// Returns the message reported back to the caller.
pub fn terminate(session_id: &str) -> String {
    format!("Session {} terminated", session_id)
}

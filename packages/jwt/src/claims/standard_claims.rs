//! Token payload

use super::context::Context;
use serde::{Deserialize, Serialize};

/// Fixed `iss` claim
pub const ISSUER: &str = "chat";

/// Fixed `aud` claim
pub const AUDIENCE: &str = "jitsi";

/// Complete claim set of a meeting token.
///
/// Unset optional claims are omitted from the payload rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Application identifier (AppID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Room name, `*` for every room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    /// Expiry (unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Not before (unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// User and feature claims
    #[serde(default)]
    pub context: Context,
}

impl Claims {
    /// Claims carrying only the fixed issuer and audience
    #[must_use]
    pub fn new() -> Self {
        Self {
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
            sub: None,
            room: None,
            exp: None,
            nbf: None,
            context: Context::default(),
        }
    }

    /// `exp` does not come after `nbf`; such a token is never valid
    #[must_use]
    pub fn has_empty_window(&self) -> bool {
        matches!((self.exp, self.nbf), (Some(exp), Some(nbf)) if exp <= nbf)
    }
}

impl Default for Claims {
    fn default() -> Self {
        Self::new()
    }
}

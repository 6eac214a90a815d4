//! Header and token types

use crate::error::{JwtError, JwtResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

/// Signing algorithm advertised in every issued token
pub const ALGORITHM: &str = "RS256";

/// JWT header structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Signing algorithm, always `RS256`
    pub alg: String,
    /// Token type, always `JWT`
    pub typ: String,
    /// API key identifying the signing key to the verifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

impl Header {
    /// RS256 header without a key id
    #[must_use]
    pub fn rs256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: "JWT".to_string(),
            kid: None,
        }
    }

    /// Set the key id
    #[must_use]
    pub fn with_key_id(mut self, kid: String) -> Self {
        self.kid = Some(kid);
        self
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::rs256()
    }
}

/// Compact serialized token, `header.payload.signature`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtToken(pub String);

impl JwtToken {
    /// Borrow the token string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into the three base64url segments.
    ///
    /// # Errors
    /// Returns `JwtError::Serialization` if the token does not have exactly three segments
    pub fn segments(&self) -> JwtResult<(&str, &str, &str)> {
        let mut parts = self.0.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), Some(signature), None) => {
                Ok((header, payload, signature))
            }
            _ => Err(JwtError::serialization(
                "token must have exactly three segments",
            )),
        }
    }

    /// Decode the header segment. The signature is not checked.
    ///
    /// # Errors
    /// Returns `JwtError::Serialization` if the segment is not base64url JSON
    pub fn decode_header(&self) -> JwtResult<serde_json::Value> {
        let (header, _, _) = self.segments()?;
        decode_segment(header)
    }

    /// Decode the payload segment. The signature is not checked.
    ///
    /// # Errors
    /// Returns `JwtError::Serialization` if the segment is not base64url JSON
    pub fn decode_payload(&self) -> JwtResult<serde_json::Value> {
        let (_, payload, _) = self.segments()?;
        decode_segment(payload)
    }
}

fn decode_segment(segment: &str) -> JwtResult<serde_json::Value> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| JwtError::serialization(&format!("segment is not base64url: {e}")))?;
    Ok(serde_json::from_slice(&bytes)?)
}

impl From<String> for JwtToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<JwtToken> for String {
    fn from(token: JwtToken) -> Self {
        token.0
    }
}

impl AsRef<str> for JwtToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JwtToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

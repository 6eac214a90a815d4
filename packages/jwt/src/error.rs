//! Token issuance error types

use thiserror::Error;

/// Token issuance result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Errors raised while loading keys or issuing tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// PEM armor or base64 body is malformed
    #[error("Invalid key format: {0}")]
    KeyFormat(String),
    /// Decoded bytes are not a PKCS#8 RSA private key
    #[error("Invalid private key: {0}")]
    KeyParse(String),
    /// Key cannot produce an RS256 signature
    #[error("Signing error: {0}")]
    Signing(String),
    /// Builder was used after its token was signed
    #[error("Invalid builder state: {0}")]
    InvalidState(String),
    /// Header or claims could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl JwtError {
    /// Create a key format error
    #[inline]
    #[must_use]
    pub fn key_format(msg: &str) -> Self {
        JwtError::KeyFormat(msg.to_string())
    }

    /// Create a key parse error
    #[inline]
    #[must_use]
    pub fn key_parse(msg: &str) -> Self {
        JwtError::KeyParse(msg.to_string())
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing(msg: &str) -> Self {
        JwtError::Signing(msg.to_string())
    }

    /// Create an invalid state error
    #[inline]
    #[must_use]
    pub fn invalid_state(msg: &str) -> Self {
        JwtError::InvalidState(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }
}

impl From<serde_json::Error> for JwtError {
    fn from(e: serde_json::Error) -> Self {
        JwtError::Serialization(e.to_string())
    }
}

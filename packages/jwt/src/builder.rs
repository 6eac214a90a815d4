//! Fluent builder for meeting tokens
//!
//! Every setter is a plain assignment, so the last call for a given claim
//! wins. [`TokenBuilder::with_defaults`] assigns several claims at once and
//! will overwrite values set before it; start from [`TokenBuilder::defaults`]
//! to have the defaults in place before any explicit setter runs.

use crate::{
    claims::Claims,
    error::{JwtError, JwtResult},
    key::PrivateKey,
    signing::sign_rs256_jwt,
    types::{Header, JwtToken},
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Seconds between issuance and the default `exp`
pub const EXP_TIME_DELAY_SEC: i64 = 7200;

/// Seconds subtracted from issuance for the default `nbf`
pub const NBF_TIME_DELAY_SEC: i64 = 10;

/// Room name granting access to every room
pub const ALL_ROOMS: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    Signed,
    /// Configuration was attempted after signing
    Rejected(&'static str),
}

/// Builder for a single meeting token.
///
/// A builder signs exactly once. Any setter called after a successful
/// [`sign_with`](TokenBuilder::sign_with) is ignored and the next signing
/// attempt fails with [`JwtError::InvalidState`].
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    api_key: Option<String>,
    claims: Claims,
    state: State,
}

impl TokenBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: None,
            claims: Claims::new(),
            state: State::Open,
        }
    }

    /// Create a builder with [`with_defaults`](TokenBuilder::with_defaults) already applied
    #[must_use]
    pub fn defaults() -> Self {
        Self::new().with_defaults()
    }

    fn configure(mut self, operation: &'static str, apply: impl FnOnce(&mut Self)) -> Self {
        match self.state {
            State::Open => apply(&mut self),
            State::Signed => {
                tracing::warn!(operation, "token already signed, configuration rejected");
                self.state = State::Rejected(operation);
            }
            State::Rejected(_) => {}
        }
        self
    }

    /// Set the `kid` header to the JaaS API key
    #[must_use]
    pub fn with_api_key(self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.configure("with_api_key", |b| b.api_key = Some(api_key))
    }

    /// Set the user avatar URL
    #[must_use]
    pub fn with_user_avatar(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.configure("with_user_avatar", |b| b.claims.context.user.avatar = Some(url))
    }

    /// Set the display name shown in the meeting
    #[must_use]
    pub fn with_user_name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.configure("with_user_name", |b| b.claims.context.user.name = Some(name))
    }

    /// Set the user email
    #[must_use]
    pub fn with_user_email(self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.configure("with_user_email", |b| b.claims.context.user.email = Some(email))
    }

    /// Set the unique user identifier
    #[must_use]
    pub fn with_user_id(self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.configure("with_user_id", |b| b.claims.context.user.id = Some(id))
    }

    /// Grant or withhold moderator rights
    #[must_use]
    pub fn with_moderator(self, is_moderator: bool) -> Self {
        self.configure("with_moderator", |b| {
            b.claims.context.user.moderator = Some(is_moderator);
        })
    }

    /// Enable or disable live streaming
    #[must_use]
    pub fn with_live_streaming_enabled(self, enabled: bool) -> Self {
        self.configure("with_live_streaming_enabled", |b| {
            b.claims.context.features.livestreaming = Some(enabled);
        })
    }

    /// Enable or disable recording
    #[must_use]
    pub fn with_recording_enabled(self, enabled: bool) -> Self {
        self.configure("with_recording_enabled", |b| {
            b.claims.context.features.recording = Some(enabled);
        })
    }

    /// Enable or disable outbound calls
    #[must_use]
    pub fn with_outbound_enabled(self, enabled: bool) -> Self {
        self.configure("with_outbound_enabled", |b| {
            b.claims.context.features.outbound_call = Some(enabled);
        })
    }

    /// Enable or disable transcription
    #[must_use]
    pub fn with_transcription_enabled(self, enabled: bool) -> Self {
        self.configure("with_transcription_enabled", |b| {
            b.claims.context.features.transcription = Some(enabled);
        })
    }

    /// Set `exp` (unix seconds)
    #[must_use]
    pub fn with_exp_time(self, exp: i64) -> Self {
        self.configure("with_exp_time", |b| b.claims.exp = Some(exp))
    }

    /// Set `nbf` (unix seconds)
    #[must_use]
    pub fn with_nbf_time(self, nbf: i64) -> Self {
        self.configure("with_nbf_time", |b| b.claims.nbf = Some(nbf))
    }

    /// Set the room, or [`ALL_ROOMS`] for any room
    #[must_use]
    pub fn with_room_name(self, room: impl Into<String>) -> Self {
        let room = room.into();
        self.configure("with_room_name", |b| b.claims.room = Some(room))
    }

    /// Set `sub` to the AppID
    #[must_use]
    pub fn with_app_id(self, app_id: impl Into<String>) -> Self {
        let app_id = app_id.into();
        self.configure("with_app_id", |b| b.claims.sub = Some(app_id))
    }

    /// Set `sub` using the former tenant naming
    #[deprecated(note = "tenants are now AppIDs, use `with_app_id`")]
    #[must_use]
    pub fn with_tenant_name(self, tenant: impl Into<String>) -> Self {
        self.with_app_id(tenant)
    }

    /// Apply the default claims relative to the current time.
    ///
    /// Overwrites `exp`, `nbf`, `room`, the user id, `moderator`,
    /// `livestreaming` and `recording` even when set earlier in the chain.
    #[must_use]
    pub fn with_defaults(self) -> Self {
        self.with_defaults_at(Utc::now())
    }

    /// Apply the default claims relative to `now`
    #[must_use]
    pub fn with_defaults_at(self, now: DateTime<Utc>) -> Self {
        let now = now.timestamp();
        let user_id = Uuid::new_v4().to_string();
        self.configure("with_defaults", |b| {
            b.claims.exp = Some(now + EXP_TIME_DELAY_SEC);
            b.claims.nbf = Some(now - NBF_TIME_DELAY_SEC);
            b.claims.context.features.livestreaming = Some(true);
            b.claims.context.features.recording = Some(true);
            b.claims.context.user.moderator = Some(true);
            b.claims.room = Some(ALL_ROOMS.to_string());
            b.claims.context.user.id = Some(user_id);
        })
    }

    /// Header the token will be signed with
    #[must_use]
    pub fn header(&self) -> Header {
        let header = Header::rs256();
        match &self.api_key {
            Some(kid) => header.with_key_id(kid.clone()),
            None => header,
        }
    }

    /// Claims accumulated so far
    #[must_use]
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Whether this builder has produced its token
    #[must_use]
    pub fn is_signed(&self) -> bool {
        self.state != State::Open
    }

    /// Sign the accumulated claims with RS256.
    ///
    /// No claim is validated; a missing `kid` or an `exp` that does not
    /// follow `nbf` is only logged. A failed signature leaves the builder
    /// open so another key can be tried.
    ///
    /// # Errors
    /// - `JwtError::InvalidState` if the builder already signed a token
    /// - `JwtError::Signing` if the key cannot produce an RS256 signature
    /// - `JwtError::Serialization` if the header or claims fail to encode
    pub fn sign_with(&mut self, private_key: &PrivateKey) -> JwtResult<JwtToken> {
        match self.state {
            State::Open => {}
            State::Signed => {
                return Err(JwtError::invalid_state(
                    "token already signed, create a new builder",
                ));
            }
            State::Rejected(operation) => {
                return Err(JwtError::invalid_state(&format!(
                    "`{operation}` called after the token was signed"
                )));
            }
        }

        let header = self.header();
        if header.kid.is_none() {
            tracing::warn!("signing token without a kid header");
        }
        if self.claims.has_empty_window() {
            tracing::warn!(
                exp = ?self.claims.exp,
                nbf = ?self.claims.nbf,
                "token expires before it becomes valid"
            );
        }

        let token = sign_rs256_jwt(&header, &self.claims, private_key)?;
        self.state = State::Signed;

        tracing::debug!(
            kid = ?header.kid,
            sub = ?self.claims.sub,
            room = ?self.claims.room,
            "signed meeting token"
        );
        Ok(token)
    }
}

impl Default for TokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! One-shot token requests
//!
//! A [`TokenRequest`] describes a whole token as data, for example a JSON
//! file handed to the command line issuer. Defaults are applied before any
//! explicit value, so a request never loses a field to the defaults.

use crate::{
    builder::TokenBuilder,
    error::JwtResult,
    key::PrivateKey,
    types::JwtToken,
};
use serde::{Deserialize, Serialize};

/// Everything needed to issue one meeting token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenRequest {
    /// Apply the default claims first
    pub defaults: bool,
    /// API key, becomes the `kid` header
    pub api_key: Option<String>,
    /// AppID, becomes `sub`
    pub app_id: Option<String>,
    /// Room name or `*`
    pub room: Option<String>,
    /// User identifier
    pub user_id: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Avatar URL
    pub avatar: Option<String>,
    /// Moderator rights
    pub moderator: Option<bool>,
    /// Live streaming
    pub livestreaming: Option<bool>,
    /// Recording
    pub recording: Option<bool>,
    /// Outbound calls
    pub outbound: Option<bool>,
    /// Transcription
    pub transcription: Option<bool>,
    /// Expiry override (unix seconds)
    pub exp: Option<i64>,
    /// Not-before override (unix seconds)
    pub nbf: Option<i64>,
}

impl Default for TokenRequest {
    fn default() -> Self {
        Self {
            defaults: true,
            api_key: None,
            app_id: None,
            room: None,
            user_id: None,
            name: None,
            email: None,
            avatar: None,
            moderator: None,
            livestreaming: None,
            recording: None,
            outbound: None,
            transcription: None,
            exp: None,
            nbf: None,
        }
    }
}

impl TokenRequest {
    /// Parse a request from JSON.
    ///
    /// # Errors
    /// Returns `JwtError::Serialization` on malformed JSON or unknown fields
    pub fn from_json(json: &str) -> JwtResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Turn the request into a builder, defaults first
    #[must_use]
    pub fn into_builder(self) -> TokenBuilder {
        let mut builder = if self.defaults {
            TokenBuilder::defaults()
        } else {
            TokenBuilder::new()
        };

        if let Some(api_key) = self.api_key {
            builder = builder.with_api_key(api_key);
        }
        if let Some(app_id) = self.app_id {
            builder = builder.with_app_id(app_id);
        }
        if let Some(room) = self.room {
            builder = builder.with_room_name(room);
        }
        if let Some(user_id) = self.user_id {
            builder = builder.with_user_id(user_id);
        }
        if let Some(name) = self.name {
            builder = builder.with_user_name(name);
        }
        if let Some(email) = self.email {
            builder = builder.with_user_email(email);
        }
        if let Some(avatar) = self.avatar {
            builder = builder.with_user_avatar(avatar);
        }
        if let Some(moderator) = self.moderator {
            builder = builder.with_moderator(moderator);
        }
        if let Some(enabled) = self.livestreaming {
            builder = builder.with_live_streaming_enabled(enabled);
        }
        if let Some(enabled) = self.recording {
            builder = builder.with_recording_enabled(enabled);
        }
        if let Some(enabled) = self.outbound {
            builder = builder.with_outbound_enabled(enabled);
        }
        if let Some(enabled) = self.transcription {
            builder = builder.with_transcription_enabled(enabled);
        }
        if let Some(exp) = self.exp {
            builder = builder.with_exp_time(exp);
        }
        if let Some(nbf) = self.nbf {
            builder = builder.with_nbf_time(nbf);
        }
        builder
    }

    /// Build and sign in one step.
    ///
    /// # Errors
    /// Same as [`TokenBuilder::sign_with`]
    pub fn issue(self, private_key: &PrivateKey) -> JwtResult<JwtToken> {
        self.into_builder().sign_with(private_key)
    }
}

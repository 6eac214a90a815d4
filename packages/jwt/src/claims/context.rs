//! User and feature claims nested under `context`

use serde::{Deserialize, Serialize};

/// Identity of the meeting participant, `context.user`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    /// Unique user identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Publicly reachable avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Moderator rights in the room
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::claims::flag::serialize",
        deserialize_with = "crate::claims::flag::deserialize"
    )]
    pub moderator: Option<bool>,
}

/// Feature entitlements, `context.features`.
///
/// A feature left unset is omitted from the payload and treated as disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureClaims {
    /// Live streaming
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::claims::flag::serialize",
        deserialize_with = "crate::claims::flag::deserialize"
    )]
    pub livestreaming: Option<bool>,
    /// Recording
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::claims::flag::serialize",
        deserialize_with = "crate::claims::flag::deserialize"
    )]
    pub recording: Option<bool>,
    /// Dial-out from the meeting
    #[serde(
        rename = "outbound-call",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::claims::flag::serialize",
        deserialize_with = "crate::claims::flag::deserialize"
    )]
    pub outbound_call: Option<bool>,
    /// Transcription
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::claims::flag::serialize",
        deserialize_with = "crate::claims::flag::deserialize"
    )]
    pub transcription: Option<bool>,
}

impl FeatureClaims {
    /// Whether live streaming is granted
    #[must_use]
    pub fn livestreaming_enabled(&self) -> bool {
        self.livestreaming.unwrap_or(false)
    }

    /// Whether recording is granted
    #[must_use]
    pub fn recording_enabled(&self) -> bool {
        self.recording.unwrap_or(false)
    }

    /// Whether outbound calls are granted
    #[must_use]
    pub fn outbound_enabled(&self) -> bool {
        self.outbound_call.unwrap_or(false)
    }

    /// Whether transcription is granted
    #[must_use]
    pub fn transcription_enabled(&self) -> bool {
        self.transcription.unwrap_or(false)
    }
}

/// The `context` claim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// User claims
    #[serde(default)]
    pub user: UserClaims,
    /// Feature claims
    #[serde(default)]
    pub features: FeatureClaims,
}

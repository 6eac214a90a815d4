//! Meeting token claims
//!
//! The payload has a handful of top-level registered claims and a nested
//! `context` object grouping user identity and feature entitlements.

pub mod context;
pub(crate) mod flag;
pub mod standard_claims;

pub use context::{Context, FeatureClaims, UserClaims};
pub use standard_claims::{AUDIENCE, Claims, ISSUER};

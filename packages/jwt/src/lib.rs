//! JaaS meeting token issuance
//!
//! Builds the JSON Web Tokens that admit a user to a Jitsi as a Service
//! meeting and signs them with RS256:
//! - [`PrivateKey`] loads the PKCS#8 RSA key from PEM
//! - [`TokenBuilder`] accumulates user and feature claims and signs once
//! - [`TokenRequest`] describes a whole token as data
//!
//! ```no_run
//! use jaas_jwt::{PrivateKey, TokenBuilder};
//!
//! # fn main() -> Result<(), jaas_jwt::JwtError> {
//! let pem = std::fs::read_to_string("rsa-private.pem")
//!     .map_err(|e| jaas_jwt::JwtError::key_format(&e.to_string()))?;
//! let key = PrivateKey::from_pem(&pem)?;
//!
//! let token = TokenBuilder::defaults()
//!     .with_api_key("my api key")
//!     .with_app_id("my AppID")
//!     .with_user_name("someone")
//!     .with_user_email("someone@example.com")
//!     .sign_with(&key)?;
//! println!("{token}");
//! # Ok(())
//! # }
//! ```
//!
//! A builder signs once. Setters called afterwards are ignored and the next
//! signing attempt fails with [`JwtError::InvalidState`]:
//!
//! ```
//! use jaas_jwt::{JwtError, PrivateKey, TokenBuilder};
//!
//! # fn main() -> Result<(), JwtError> {
//! let pem = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/rsa2048.pem"));
//! let key = PrivateKey::from_pem(pem)?;
//!
//! let mut builder = TokenBuilder::defaults();
//! builder.sign_with(&key)?;
//!
//! let mut builder = builder.with_room_name("room1");
//! assert_eq!(builder.claims().room.as_deref(), Some("*"));
//! assert!(matches!(builder.sign_with(&key), Err(JwtError::InvalidState(_))));
//! # Ok(())
//! # }
//! ```

pub(crate) mod algorithms;
pub mod builder;
pub mod claims;
mod error;
pub mod key;
pub mod request;
mod signing;
mod types;

pub use builder::{ALL_ROOMS, EXP_TIME_DELAY_SEC, NBF_TIME_DELAY_SEC, TokenBuilder};
pub use claims::{AUDIENCE, Claims, Context, FeatureClaims, ISSUER, UserClaims};
pub use error::*;
pub use key::PrivateKey;
pub use request::TokenRequest;
pub use types::*;

//! env_logger setup for the issuer binary
//!
//! The library logs through `tracing`, which forwards to the `log` facade
//! when no subscriber is installed, so a single env_logger sees both.

use log::{debug, info};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging setup and helpers for sensitive values
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging once at startup.
    ///
    /// Levels come from `RUST_LOG` and default to `warn`. Output goes to
    /// stderr so the token on stdout stays pipeable.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
                .format_timestamp_micros()
                .init();

            debug!("logging initialized");
        });
    }

    /// Initialize logging for tests
    #[cfg(test)]
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log which key signed a token without revealing it
    pub fn log_key_loaded(path: &str, der: &[u8], bits: usize) {
        info!(
            "Loaded signing key {path} ({bits} bits, fingerprint: {})",
            Self::fingerprint(der)
        );
    }

    /// Short SHA-256 fingerprint, first 12 hex characters
    fn fingerprint(bytes: &[u8]) -> String {
        let hash = Sha256::digest(bytes);
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}

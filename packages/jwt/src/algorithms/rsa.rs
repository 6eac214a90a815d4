//! RSASSA-PKCS1-v1_5 with SHA-256 (RS256)

use crate::error::{JwtError, JwtResult};
use rsa::RsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::traits::PublicKeyParts;

/// Smallest modulus accepted for RS256 (RFC 7518 section 3.3)
pub(crate) const MIN_RSA_BITS: usize = 2048;

/// Sign with RSA-SHA256 (RS256). Deterministic for a given key and message.
#[inline]
pub(crate) fn sign_rs256(message: &[u8], private_key: &RsaPrivateKey) -> JwtResult<Vec<u8>> {
    let bits = private_key.size() * 8;
    if bits < MIN_RSA_BITS {
        return Err(JwtError::signing(&format!(
            "RS256 requires a modulus of at least {MIN_RSA_BITS} bits, got {bits}"
        )));
    }

    let signing_key = SigningKey::<Sha256>::new(private_key.clone());
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::signing(&format!("RSA signing failed: {e}")))?;
    Ok(signature.to_vec())
}

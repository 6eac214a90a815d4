//! Compact JWS serialization

use crate::{
    algorithms::rsa::sign_rs256,
    claims::Claims,
    error::JwtResult,
    key::PrivateKey,
    types::{Header, JwtToken},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encode header and claims and sign them with RS256
pub(crate) fn sign_rs256_jwt(
    header: &Header,
    claims: &Claims,
    private_key: &PrivateKey,
) -> JwtResult<JwtToken> {
    let header_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(header)?);
    let claims_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);

    let mut signing_input = String::with_capacity(header_b64.len() + 1 + claims_b64.len());
    signing_input.push_str(&header_b64);
    signing_input.push('.');
    signing_input.push_str(&claims_b64);

    let signature = sign_rs256(signing_input.as_bytes(), private_key.as_rsa())?;
    let signature_b64 = URL_SAFE_NO_PAD.encode(&signature);

    let mut jwt = signing_input;
    jwt.reserve(1 + signature_b64.len());
    jwt.push('.');
    jwt.push_str(&signature_b64);

    Ok(JwtToken(jwt))
}

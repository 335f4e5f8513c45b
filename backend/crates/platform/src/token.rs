//! Signed Token Codec
//!
//! Compact `payload.signature` tokens. Both segments are URL-safe Base64
//! without padding; the signature is HMAC-SHA256 over the encoded payload
//! segment. The payload is opaque bytes here, callers decide its format.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Error when signing or verifying a token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token is not in payload.signature form")]
    Malformed,
    #[error("Token segment is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("Token signature mismatch")]
    BadSignature,
    #[error("Invalid signing key")]
    InvalidKey,
}

fn mac_for(secret: &[u8], encoded_payload: &str) -> Result<HmacSha256, TokenError> {
    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| TokenError::InvalidKey)?;
    mac.update(encoded_payload.as_bytes());
    Ok(mac)
}

/// Sign a payload and return the token string
pub fn sign(secret: &[u8], payload: &[u8]) -> Result<String, TokenError> {
    let encoded = URL_SAFE_NO_PAD.encode(payload);
    let signature = mac_for(secret, &encoded)?.finalize().into_bytes();

    Ok(format!("{}.{}", encoded, URL_SAFE_NO_PAD.encode(signature)))
}

/// Verify a token and return its payload bytes
///
/// The signature is checked (in constant time) before the payload is decoded.
pub fn verify(secret: &[u8], token: &str) -> Result<Vec<u8>, TokenError> {
    let (encoded, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;
    if encoded.is_empty() || signature_b64.is_empty() || signature_b64.contains('.') {
        return Err(TokenError::Malformed);
    }

    let signature = URL_SAFE_NO_PAD.decode(signature_b64)?;
    mac_for(secret, encoded)?
        .verify_slice(&signature)
        .map_err(|_| TokenError::BadSignature)?;

    Ok(URL_SAFE_NO_PAD.decode(encoded)?)
}

/*
[INPUT]:  Base64-encoded API secret and message bytes
[OUTPUT]: Base64-encoded HMAC-SHA256 signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or key format
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{CoinbaseError, Result};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer keyed by the decoded API secret
#[derive(Clone)]
pub struct HmacSigner {
    mac: HmacSha256,
}

impl HmacSigner {
    /// Create a signer from a base64-encoded secret.
    ///
    /// Fails with [`CoinbaseError::InvalidSecret`] when the secret is not
    /// valid standard-alphabet base64.
    pub fn from_base64_secret(secret: &str) -> Result<Self> {
        let key = BASE64.decode(secret.trim())?;
        Self::from_key_bytes(&key)
    }

    /// Create a signer from raw key bytes.
    ///
    /// HMAC accepts keys of any length (long keys are hashed, short ones
    /// padded), so this does not fail in practice; the `Result` mirrors
    /// `Mac::new_from_slice`.
    pub fn from_key_bytes(key: &[u8]) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(key)
            .map_err(|e| CoinbaseError::Config(format!("Invalid HMAC key: {e}")))?;
        Ok(Self { mac })
    }

    /// Sign a message and return the raw digest
    pub fn sign_bytes(&self, message: &[u8]) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }

    /// Sign a message and return the base64-encoded digest
    pub fn sign(&self, message: &str) -> String {
        BASE64.encode(self.sign_bytes(message.as_bytes()))
    }

    /// Verify a base64 signature against a message
    pub fn verify(&self, message: &str, signature: &str) -> bool {
        let Ok(expected) = BASE64.decode(signature) else {
            return false;
        };
        let mut mac = self.mac.clone();
        mac.update(message.as_bytes());
        mac.verify_slice(&expected).is_ok()
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner").finish_non_exhaustive()
    }
}

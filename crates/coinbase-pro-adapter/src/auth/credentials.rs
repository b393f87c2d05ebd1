/*
[INPUT]:  API key, base64 secret, and passphrase from the caller
[OUTPUT]: Credentials value with redacted Debug output
[POS]:    Auth layer - credential container passed at client construction
[UPDATE]: When credential fields or masking rules change
*/

use std::fmt;

/// Credentials for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    /// Base64-encoded API secret
    pub secret: String,
    pub passphrase: String,
}

impl Credentials {
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
            passphrase: passphrase.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &mask(&self.key))
            .field("secret", &"***")
            .field("passphrase", &"***")
            .finish()
    }
}

/// Keep the first four characters of a key, mask the rest
fn mask(value: &str) -> String {
    let visible: String = value.chars().take(4).collect();
    if value.chars().count() <= 4 {
        "***".to_string()
    } else {
        format!("{visible}***")
    }
}

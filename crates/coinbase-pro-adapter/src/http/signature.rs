/*
[INPUT]:  Request method, path, body, timestamp, and credentials
[OUTPUT]: Signed request headers (CB-ACCESS-* and User-Agent)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use crate::auth::{Credentials, HmacSigner};
use crate::http::{CoinbaseError, Result};

pub const CB_ACCESS_KEY: &str = "CB-ACCESS-KEY";
pub const CB_ACCESS_SIGN: &str = "CB-ACCESS-SIGN";
pub const CB_ACCESS_TIMESTAMP: &str = "CB-ACCESS-TIMESTAMP";
pub const CB_ACCESS_PASSPHRASE: &str = "CB-ACCESS-PASSPHRASE";

/// Signs requests with the account's key, secret, and passphrase
#[derive(Debug, Clone)]
pub struct RequestSigner {
    key: String,
    passphrase: String,
    signer: HmacSigner,
}

impl RequestSigner {
    /// Create a request signer, decoding the base64 secret up front
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Ok(Self {
            key: credentials.key.clone(),
            passphrase: credentials.passphrase.clone(),
            signer: HmacSigner::from_base64_secret(&credentials.secret)?,
        })
    }

    /// Current Unix time in seconds, as sent in CB-ACCESS-TIMESTAMP
    pub fn timestamp() -> String {
        chrono::Utc::now().timestamp().to_string()
    }

    /// Sign a request using the Coinbase Pro CB-ACCESS-SIGN scheme
    ///
    /// Format: "{timestamp}{method}{request_path}{body}"
    /// Returns base64-encoded signature
    pub fn sign_request(&self, timestamp: &str, method: &str, request_path: &str, body: &str) -> String {
        let message = format!("{timestamp}{method}{request_path}{body}");
        self.signer.sign(&message)
    }

    /// Build the four authentication headers plus User-Agent
    pub fn headers(
        &self,
        timestamp: &str,
        method: &str,
        request_path: &str,
        body: &str,
        user_agent: &str,
    ) -> Result<HeaderMap> {
        let signature = self.sign_request(timestamp, method, request_path, body);

        let mut headers = HeaderMap::with_capacity(5);
        headers.insert(HeaderName::from_static("cb-access-key"), header_value(CB_ACCESS_KEY, &self.key)?);
        headers.insert(HeaderName::from_static("cb-access-sign"), header_value(CB_ACCESS_SIGN, &signature)?);
        headers.insert(
            HeaderName::from_static("cb-access-timestamp"),
            header_value(CB_ACCESS_TIMESTAMP, timestamp)?,
        );
        headers.insert(
            HeaderName::from_static("cb-access-passphrase"),
            header_value(CB_ACCESS_PASSPHRASE, &self.passphrase)?,
        );
        headers.insert(USER_AGENT, header_value("User-Agent", user_agent)?);
        Ok(headers)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| CoinbaseError::Validation(format!("{name} is not a valid header value")))
}

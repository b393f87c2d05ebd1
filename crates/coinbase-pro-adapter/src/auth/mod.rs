/*
[INPUT]:  API key, base64 secret, and passphrase
[OUTPUT]: HMAC signatures and redacted credential values
[POS]:    Auth layer - handles Coinbase Pro API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::HmacSigner;

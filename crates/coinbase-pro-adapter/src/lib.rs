/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Coinbase Pro adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, HmacSigner};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    CoinbaseClient,
    CoinbaseError,
    DEFAULT_USER_AGENT,
    ErrorKind,
    HttpRequest,
    HttpResponse,
    HttpTransport,
    MockTransport,
    ReqwestTransport,
    RequestSigner,
    Result,
};

// Re-export all types
pub use types::*;

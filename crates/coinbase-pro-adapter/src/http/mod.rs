/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod accounts;
pub mod client;
pub mod error;
pub mod signature;
pub mod transport;

pub use error::{CoinbaseError, ErrorKind, Result};
pub use signature::RequestSigner;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, MockTransport, ReqwestTransport};

pub use client::{ClientConfig, CoinbaseClient, DEFAULT_USER_AGENT};

/*
[INPUT]:  Client configuration (base URLs, timeouts, user agent) and credentials
[OUTPUT]: Signed requests dispatched through a transport, decoded JSON results
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::Credentials;
use crate::http::signature::RequestSigner;
use crate::http::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::http::{CoinbaseError, Result};

/// Base URLs for Coinbase Pro
pub const REST_BASE_URL: &str = "https://api.pro.coinbase.com";
pub const WS_BASE_URL: &str = "wss://ws-feed.pro.coinbase.com";
pub const SANDBOX_REST_BASE_URL: &str = "https://api-public.sandbox.pro.coinbase.com";
pub const SANDBOX_WS_BASE_URL: &str = "wss://ws-feed-public.sandbox.pro.coinbase.com";

/// User-Agent attached to every request
pub const DEFAULT_USER_AGENT: &str = concat!("coinbase-pro-adapter/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub rest_base_url: String,
    pub ws_base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rest_base_url: REST_BASE_URL.to_string(),
            ws_base_url: WS_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at the public sandbox
    pub fn sandbox() -> Self {
        Self::default().with_base_urls(SANDBOX_REST_BASE_URL, SANDBOX_WS_BASE_URL)
    }

    pub fn with_base_urls(mut self, rest_base_url: &str, ws_base_url: &str) -> Self {
        self.rest_base_url = rest_base_url.to_string();
        self.ws_base_url = ws_base_url.to_string();
        self
    }
}

/// Main HTTP client for the Coinbase Pro REST API
#[derive(Debug, Clone)]
pub struct CoinbaseClient {
    transport: Arc<dyn HttpTransport>,
    rest_base_url: Url,
    ws_base_url: Url,
    signer: RequestSigner,
    user_agent: String,
}

impl CoinbaseClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, credentials, Arc::new(transport))
    }

    /// Create a client that sends through the given transport
    pub fn with_transport(
        config: ClientConfig,
        credentials: Credentials,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        if config.user_agent.trim().is_empty() {
            return Err(CoinbaseError::Config("user agent must not be empty".to_string()));
        }

        Ok(Self {
            transport,
            rest_base_url: base_url(&config.rest_base_url)?,
            ws_base_url: Url::parse(&config.ws_base_url)?,
            signer: RequestSigner::new(&credentials)?,
            user_agent: config.user_agent,
        })
    }

    pub fn rest_base_url(&self) -> &Url {
        &self.rest_base_url
    }

    /// WebSocket feed URL; not used by REST calls
    pub fn ws_base_url(&self) -> &Url {
        &self.ws_base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Build full URL for REST endpoints, relative to the base path
    fn rest_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.rest_base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Sign and send a GET, decoding the JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self.send_signed(Method::GET, endpoint, "").await?;
        decode_json(&response)
    }

    /// Sign and send a GET whose body is a JSON array; `null` reads as empty
    pub(crate) async fn get_json_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>> {
        let items: Option<Vec<T>> = self.get_json(endpoint).await?;
        Ok(items.unwrap_or_default())
    }

    /// Sign a request with a fresh timestamp and dispatch it once
    async fn send_signed(&self, method: Method, endpoint: &str, body: &str) -> Result<HttpResponse> {
        let url = self.rest_url(endpoint)?;
        let path = request_path(&url);
        let timestamp = RequestSigner::timestamp();
        let headers = self
            .signer
            .headers(&timestamp, method.as_str(), &path, body, &self.user_agent)?;

        debug!(method = %method, path = %path, "sending request");
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body: body.to_string(),
            })
            .await?;
        debug!(status = response.status.as_u16(), bytes = response.body.len(), "received response");

        if !response.status.is_success() {
            warn!(status = response.status.as_u16(), path = %path, "request rejected");
            return Err(CoinbaseError::api_error(
                response.status,
                String::from_utf8_lossy(&response.body),
            ));
        }

        Ok(response)
    }
}

/// Parse a base URL whose path always ends in `/`, so joins append to it
fn base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Path plus query string, as covered by the signature
fn request_path(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

fn decode_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    serde_json::from_slice(&response.body).map_err(|e| {
        warn!(error = %e, "failed to decode response body");
        CoinbaseError::Decoding(e)
    })
}

/*
[INPUT]:  Fully-formed requests (method, URL, headers, body)
[OUTPUT]: Raw responses (status, headers, body bytes) or transport errors
[POS]:    HTTP layer - swappable "send one request" capability
[UPDATE]: When adding transport implementations or request fields
*/

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use reqwest::{Client, Method, StatusCode, Url};

use crate::http::{ClientConfig, CoinbaseError, Result};

/// A prepared HTTP request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: String,
}

/// A raw HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Send one request, receive one response
///
/// Implementations must not retry: one call is one round trip.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Production transport backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Redirects are never followed: a 3xx is returned as-is so signed
    /// headers stay on the configured host.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, headers, body })
    }
}

/// Test double that records requests and replays a canned response
#[derive(Debug)]
pub struct MockTransport {
    status: StatusCode,
    body: String,
    failure: Option<String>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    /// Answer every request with 200 and the given body
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    /// Answer every request with the given status and body
    pub fn with_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request as if the network were unreachable
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: String::new(),
            failure: Some(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// All requests received so far, in order
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        if let Some(message) = &self.failure {
            return Err(CoinbaseError::Transport(message.clone()));
        }

        Ok(HttpResponse {
            status: self.status,
            headers: HeaderMap::new(),
            body: self.body.clone().into_bytes(),
        })
    }
}

/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for coinbase-pro-adapter tests

use coinbase_pro_adapter::{ClientConfig, CoinbaseClient, Credentials};
use wiremock::MockServer;

pub const KEY: &str = "super_secret_key_123_abc";
pub const SECRET: &str = "MTIzYWJjU3VwZXJTZWNyZXRTZWNyZXQ=";
pub const PASSPHRASE: &str = "1q2w3e4r";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(KEY, SECRET, PASSPHRASE)
}

/// Client pointed at the mock server over real HTTP
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> CoinbaseClient {
    let config = ClientConfig::default().with_base_urls(&server.uri(), "wss://test.ws-feed.pro.coinbase.com");
    CoinbaseClient::with_config(config, test_credentials()).expect("client init")
}

/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use std::time::Duration;

use common::{KEY, PASSPHRASE, SECRET, client_for, setup_mock_server, test_credentials};
use coinbase_pro_adapter::{
    Account, ActivityType, ClientConfig, CoinbaseClient, CoinbaseError, DEFAULT_USER_AGENT, ErrorKind,
    HmacSigner, ListAccount,
};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(CoinbaseClient::new(test_credentials()));
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::sandbox();
    let client = assert_ok!(CoinbaseClient::with_config(config, test_credentials()));
    assert_eq!(client.user_agent(), DEFAULT_USER_AGENT);
}

#[test]
fn test_malformed_secret_rejected_before_network() {
    let mut credentials = test_credentials();
    credentials.secret = "this is not base64!".to_string();

    let err = assert_err!(CoinbaseClient::new(credentials));
    assert!(matches!(err, CoinbaseError::InvalidSecret(_)));
    assert_eq!(err.kind(), ErrorKind::Decoding);
}

#[tokio::test]
async fn test_list_accounts_over_http() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .and(header("CB-ACCESS-KEY", KEY))
        .and(header("CB-ACCESS-PASSPHRASE", PASSPHRASE))
        .and(header("User-Agent", DEFAULT_USER_AGENT))
        .and(header_exists("CB-ACCESS-SIGN"))
        .and(header_exists("CB-ACCESS-TIMESTAMP"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"id":"f1f2404a-7de7-4cf6-81f9-5cb0256c8cea","currency":"BTC","balance":"10.01","available":"15.449977","hold":"wat"}]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let accounts = assert_ok!(client_for(&server).list_accounts().await);

    assert_eq!(
        accounts,
        vec![ListAccount {
            id: "f1f2404a-7de7-4cf6-81f9-5cb0256c8cea".to_string(),
            currency: "BTC".to_string(),
            balance: "10.01".to_string(),
            available: "15.449977".to_string(),
            hold: "wat".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_server_can_verify_signature() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts/a1b2c3d4/ledger"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"id":"100","created_at":"2014-11-07T08:19:27.028459Z","amount":"0.001","balance":"239.669","type":"fee","details":{"order_id":"d50ec984-77a8-460a-b958-66f114b0de9b","trade_id":"74","product_id":"BTC-USD"}}]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let history = assert_ok!(client_for(&server).get_account_history("a1b2c3d4").await);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind(), ActivityType::Fee);
    assert_eq!(history[0].details.product_id, "BTC-USD");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    let timestamp = request
        .headers
        .get("cb-access-timestamp")
        .and_then(|value| value.to_str().ok())
        .expect("timestamp header");
    let signature = request
        .headers
        .get("cb-access-sign")
        .and_then(|value| value.to_str().ok())
        .expect("sign header");

    let verifier = assert_ok!(HmacSigner::from_base64_secret(SECRET));
    let message = format!("{timestamp}GET{}", request.url.path());
    assert!(verifier.verify(&message, signature));
}

#[tokio::test]
async fn test_get_account_empty_object() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts/1q2w3e4r"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let account = assert_ok!(client_for(&server).get_account("1q2w3e4r").await);
    assert_eq!(account, Account::default());
}

#[tokio::test]
async fn test_get_account_holds_empty_list() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts/1q2w3e4r/holds"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let holds = assert_ok!(client_for(&server).get_account_holds("1q2w3e4r").await);
    assert!(holds.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"message":"invalid signature"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let err = assert_err!(client_for(&server).list_accounts().await);
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.api_message().as_deref(), Some("invalid signature"));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_invalid_json_is_decoding_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = assert_err!(client_for(&server).list_accounts().await);
    assert!(matches!(err, CoinbaseError::Decoding(_)));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("[]", "application/json")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut config = ClientConfig::default().with_base_urls(&server.uri(), "wss://test.ws");
    config.timeout = Duration::from_millis(200);
    let client = assert_ok!(CoinbaseClient::with_config(config, test_credentials()));

    let err = assert_err!(client.list_accounts().await);
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let config = ClientConfig::default().with_base_urls("http://127.0.0.1:1", "wss://test.ws");
    let client = assert_ok!(CoinbaseClient::with_config(config, test_credentials()));

    let err = assert_err!(client.get_account("a1b2c3d4").await);
    assert!(matches!(err, CoinbaseError::Http(_)));
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/coinbase/accounts/a1b2c3d4/holds"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::default().with_base_urls(&format!("{}/coinbase", server.uri()), "wss://test.ws");
    let client = assert_ok!(CoinbaseClient::with_config(config, test_credentials()));

    let holds = assert_ok!(client.get_account_holds("a1b2c3d4").await);
    assert!(holds.is_empty());

    let requests = server.received_requests().await.expect("recording enabled");
    let request = &requests[0];
    let timestamp = request
        .headers
        .get("cb-access-timestamp")
        .and_then(|value| value.to_str().ok())
        .expect("timestamp header");
    let signature = request
        .headers
        .get("cb-access-sign")
        .and_then(|value| value.to_str().ok())
        .expect("sign header");

    let verifier = assert_ok!(HmacSigner::from_base64_secret(SECRET));
    assert!(verifier.verify(&format!("{timestamp}GET/coinbase/accounts/a1b2c3d4/holds"), signature));
}

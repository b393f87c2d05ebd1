/*
[INPUT]:  Account ids and signed client
[OUTPUT]: Account data (accounts, single account, ledger, holds)
[POS]:    HTTP layer - account endpoints (require CB-ACCESS auth)
[UPDATE]: When adding new account endpoints or changing paths
*/

use crate::http::{CoinbaseClient, CoinbaseError, Result};
use crate::types::{Account, AccountActivity, AccountHold, ListAccount};

impl CoinbaseClient {
    /// List all trading accounts
    ///
    /// GET /accounts
    pub async fn list_accounts(&self) -> Result<Vec<ListAccount>> {
        self.get_json_list("/accounts").await
    }

    /// Get a single account
    ///
    /// GET /accounts/{account_id}
    pub async fn get_account(&self, account_id: &str) -> Result<Account> {
        let account_id = validate_account_id(account_id)?;
        self.get_json(&format!("/accounts/{account_id}")).await
    }

    /// Account activity, newest first as returned by the server
    ///
    /// GET /accounts/{account_id}/ledger
    pub async fn get_account_history(&self, account_id: &str) -> Result<Vec<AccountActivity>> {
        let account_id = validate_account_id(account_id)?;
        self.get_json_list(&format!("/accounts/{account_id}/ledger"))
            .await
    }

    /// Holds placed on an account
    ///
    /// GET /accounts/{account_id}/holds
    pub async fn get_account_holds(&self, account_id: &str) -> Result<Vec<AccountHold>> {
        let account_id = validate_account_id(account_id)?;
        self.get_json_list(&format!("/accounts/{account_id}/holds"))
            .await
    }
}

/// Reject ids that are empty or would change the request path
fn validate_account_id(account_id: &str) -> Result<&str> {
    let trimmed = account_id.trim();
    if trimmed.is_empty() {
        return Err(CoinbaseError::Validation("account id must not be empty".to_string()));
    }
    if trimmed.contains(['/', '?', '#', '%']) || trimmed.chars().any(char::is_whitespace) {
        return Err(CoinbaseError::Validation(format!(
            "account id contains reserved characters: {account_id:?}"
        )));
    }
    Ok(trimmed)
}

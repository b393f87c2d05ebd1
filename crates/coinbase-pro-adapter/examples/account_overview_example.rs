/*
[INPUT]:  API key, base64 secret, and passphrase from the environment
[OUTPUT]: Accounts, ledger entries, and holds printed to stdout
[POS]:    Examples - authenticated account queries against the sandbox
[UPDATE]: When adding new account endpoints
*/

use coinbase_pro_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: list accounts and show activity for the first one
///
/// Requires CBPRO_KEY, CBPRO_SECRET, and CBPRO_PASSPHRASE for the sandbox.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Coinbase Pro Account Example ===\n");

    let (Ok(key), Ok(secret), Ok(passphrase)) = (
        std::env::var("CBPRO_KEY"),
        std::env::var("CBPRO_SECRET"),
        std::env::var("CBPRO_PASSPHRASE"),
    ) else {
        eprintln!("Set CBPRO_KEY, CBPRO_SECRET, and CBPRO_PASSPHRASE");
        return;
    };

    let client = match CoinbaseClient::with_config(
        ClientConfig::sandbox(),
        Credentials::new(key, secret, passphrase),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}\n", client.rest_base_url());

    let accounts = match client.list_accounts().await {
        Ok(accounts) => accounts,
        Err(e) => {
            println!("✗ Error listing accounts ({:?}): {}", e.kind(), e);
            return;
        }
    };
    for account in &accounts {
        println!(
            "  {} {} balance={} available={} hold={}",
            account.id, account.currency, account.balance, account.available, account.hold
        );
    }

    let Some(first) = accounts.first() else {
        println!("\nNo accounts found");
        return;
    };

    println!("\nLedger for {}...", first.id);
    match client.get_account_history(&first.id).await {
        Ok(entries) => {
            for entry in entries {
                println!("  {} {:?} amount={} balance={}", entry.created_at, entry.kind(), entry.amount, entry.balance);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nHolds for {}...", first.id);
    match client.get_account_holds(&first.id).await {
        Ok(holds) => println!("✓ {} hold(s)", holds.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Account example complete");
}

//! Bank account listing example.
//!
//! This example attaches a test bank account to a customer and then walks
//! every bank account of that customer page by page.
//!
//! Run with: STRIPE_SECRET_KEY=sk_test_... cargo run --example list_bank_accounts -- cus_123

use stripe_rs::models::{BankAccountListParams, BankAccountParams, ListParams};
use stripe_rs::StripeClient;

#[tokio::main]
async fn main() -> stripe_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let customer = std::env::args()
        .nth(1)
        .expect("usage: list_bank_accounts <customer id>");

    let client = StripeClient::from_env()?;

    // Attach a test account from a token
    let created = client
        .bank_accounts()
        .create(&BankAccountParams::for_customer(customer.as_str()).with_token("btok_us_verified"))
        .await?;
    println!("Attached {}", created.display());

    let params = BankAccountListParams {
        list: ListParams::new().with_limit(3),
        ..BankAccountListParams::for_customer(customer.as_str())
    };
    let mut accounts = client.bank_accounts().list(&params).await?;

    println!("\nBank accounts of {}:", customer);
    while accounts.advance().await {
        if let Some(account) = accounts.current() {
            println!(
                "  - {} [{}] {:?}",
                account.display(),
                account.bank_name.as_deref().unwrap_or("unknown bank"),
                account.status
            );
        }
    }

    if let Some(err) = accounts.err() {
        eprintln!("Listing stopped early: {err}");
    }

    println!("\nDone!");
    Ok(())
}

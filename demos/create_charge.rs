//! Charge creation example.
//!
//! This example authorizes a test card, captures part of the amount and
//! prints the resulting charge.
//!
//! Run with: STRIPE_SECRET_KEY=sk_test_... cargo run --example create_charge

use stripe_rs::models::{CaptureParams, ChargeParams, Currency, Object, SourceParams};
use stripe_rs::StripeClient;

#[tokio::main]
async fn main() -> stripe_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = StripeClient::from_env()?;
    if !client.is_test_mode() {
        eprintln!("Refusing to run against a live mode key");
        return Ok(());
    }

    // Authorize only
    let mut params = ChargeParams {
        amount: Some(2000),
        currency: Some(Currency::Usd),
        source: Some(SourceParams::token("tok_visa")),
        description: Some("stripe-rs demo charge".to_string()),
        capture: Some(false),
        ..Default::default()
    };
    params.params.add_metadata("order_id", "6735");

    let charge = client.charges().create(&params).await?;
    println!("Authorized {} ({:?}), captured: {}", charge.id(), charge.status, charge.captured);

    if let Some(card) = charge.source.as_ref().and_then(|s| s.as_card()) {
        println!("  Paid with {}", card.display());
    }

    // Capture less than was authorized
    let captured = client
        .charges()
        .capture(
            &charge.id,
            &CaptureParams {
                amount: Some(1500),
                ..Default::default()
            },
        )
        .await?;
    println!(
        "Captured {} {} of {} (refunded {})",
        captured.amount - captured.amount_refunded,
        captured.currency,
        captured.amount,
        captured.amount_refunded
    );

    println!("\nDone!");
    Ok(())
}

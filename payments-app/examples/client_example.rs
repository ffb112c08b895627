//! Client example demonstrating the payment flow against an in-process server.
//!
//! Run with: cargo run -p payments-app --example client_example

use mock_bank::MockBank;
use payments_client::{ClientError, PaymentsClient};
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_repo::build_repo;
use payments_types::PaymentRequest;
use rust_decimal::Decimal;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind an available port and serve from it
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    println!("🚀 Starting server on {addr}...");

    let service = PaymentService::new(build_repo(), MockBank::new());
    let router = HttpServer::new(service).router();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    let client = PaymentsClient::new(format!("http://{addr}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: Full payment flow
    // ─────────────────────────────────────────────────────────────────────────

    // Health check
    let health = client.health().await?;
    println!("✅ Server health: {health}");

    // Process a payment
    let request = PaymentRequest {
        card_number: "1234123412341234".to_string(),
        expiry_year: 2099,
        expiry_month: 12,
        cvv: "987".to_string(),
        amount: Decimal::new(1005, 2).into(),
        currency: "GBP".to_string(),
    };
    let payment = client.process_payment(&request).await?;
    println!(
        "✅ Processed {} {} on card {} (id={}, status={})",
        payment.amount, payment.currency, payment.masked_card_number, payment.id, payment.status
    );

    // Fetch it back
    let fetched = client.get_payment(payment.id.as_str()).await?;
    println!("✅ Fetched payment {} (status={})", fetched.id, fetched.status);

    // Rejected by validation
    let rejected = client
        .process_payment(&PaymentRequest {
            cvv: "12".to_string(),
            ..request
        })
        .await;
    match rejected {
        Err(ClientError::Api { status, message }) => {
            println!("✅ Invalid CVV rejected: {status} {message}")
        }
        other => anyhow::bail!("expected a validation error, got {other:?}"),
    }

    // Unknown payment
    match client.get_payment("does-not-exist").await {
        Err(e) => println!("✅ Unknown payment: {e}"),
        Ok(p) => anyhow::bail!("unexpected payment {}", p.id),
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}

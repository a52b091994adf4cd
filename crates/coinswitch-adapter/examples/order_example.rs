/*
[INPUT]:  Sandbox API key from COINSWITCH_API_KEY
[OUTPUT]: Created order and its status printed to stdout
[POS]:    Examples - order operations
[UPDATE]: When order API changes
*/

use coinswitch_adapter::*;
use rust_decimal::Decimal;

/// Example: create an order and poll its status once
///
/// With a sandbox key the API returns canned orders and no coins move.
#[tokio::main]
async fn main() {
    println!("=== CoinSwitch Order Example ===\n");

    let api_key = std::env::var("COINSWITCH_API_KEY").unwrap_or_default();
    let client = match CoinswitchClient::new(Credentials::new(api_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let request = CreateOrderRequest::new(
        "btc",
        "eth",
        WalletAddress::new("0xcc1bf6b0625bc23895a47f4991fdb7862e34a563"),
    )
    .with_deposit_amount(Decimal::new(3, 2));
    println!("Order request: {:?}", request);

    let order = match client.create_order(&request).await {
        Ok(order) => {
            println!("✓ Order created: {}", order.order_id);
            println!(
                "  Send {} btc to {}",
                order.expected_deposit_coin_amount, order.exchange_address.address
            );
            order
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    match client.get_order_status(&order.order_id).await {
        Ok(status) => println!("✓ Status: {}", status.status),
        Err(e) => println!("✗ Error: {} (code: {:?})", e, e.code()),
    }

    println!("\n✓ Order example complete");
}

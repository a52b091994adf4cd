/*
[INPUT]:  Sandbox API key from COINSWITCH_API_KEY
[OUTPUT]: Coins, pairs and rate quotes printed to stdout
[POS]:    Examples - market discovery and pricing
[UPDATE]: When adding new pricing endpoints
*/

use coinswitch_adapter::*;

/// Example: discover coins and quote a pair
#[tokio::main]
async fn main() {
    println!("=== CoinSwitch Rates Example ===\n");

    let api_key = std::env::var("COINSWITCH_API_KEY").unwrap_or_default();
    let client = match CoinswitchClient::new(Credentials::new(api_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (x-user-ip: {})\n", client.user_ip());

    println!("Listing coins...");
    match client.list_coins().await {
        Ok(coins) => println!("✓ {} coins, first: {:?}", coins.len(), coins.first()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nListing pairs for deposit coin btc...");
    match client.list_exchange_pairs(&PairQuery::deposit("btc")).await {
        Ok(pairs) => println!("✓ {} pairs", pairs.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuoting btc -> eth...");
    match client.get_exchange_rate(&RateRequest::new("btc", "eth")).await {
        Ok(rate) => println!("✓ Rate: {:?}", rate),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Invalid pairs are dropped by the API, not reported
    println!("\nBulk quoting btc -> eth and lol -> btc...");
    let pairs = [TradePair::new("btc", "eth"), TradePair::new("lol", "btc")];
    match client.get_bulk_rates_for_multi_pairs(&pairs).await {
        Ok(rates) => println!("✓ {} of {} pairs quoted", rates.len(), pairs.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Rates example complete");
}

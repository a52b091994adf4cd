/*
[INPUT]:  Parsed sub-command and a configured client
[OUTPUT]: API payload as JSON value
[POS]:    Command layer - maps each sub-command to one SDK call
[UPDATE]: When the SDK gains or changes an operation
*/

use clap::Subcommand;
use coinswitch_adapter::{
    CoinswitchClient, CreateOrderRequest, PairQuery, RateRequest, TradePair, WalletAddress,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List supported coins
    Coins,
    /// List exchange pairs for a deposit and/or destination coin
    Pairs {
        #[arg(long)]
        deposit: Option<String>,
        #[arg(long)]
        destination: Option<String>,
    },
    /// Quote a single pair
    Rate {
        #[arg(long)]
        deposit: String,
        #[arg(long)]
        destination: String,
        /// Amount of deposit coin to quote for
        #[arg(long)]
        amount: Option<Decimal>,
    },
    /// Create an order
    CreateOrder {
        #[arg(long)]
        deposit: String,
        #[arg(long)]
        destination: String,
        #[arg(long)]
        deposit_amount: Option<Decimal>,
        #[arg(long)]
        destination_amount: Option<Decimal>,
        /// Address receiving the destination coin
        #[arg(long)]
        address: String,
        #[arg(long)]
        tag: Option<String>,
        /// Address receiving the deposit coin back on failure
        #[arg(long)]
        refund_address: Option<String>,
        #[arg(long)]
        refund_tag: Option<String>,
        #[arg(long)]
        callback_url: Option<String>,
    },
    /// Show the status of one order
    OrderStatus { order_id: String },
    /// List all orders created with this API key
    Orders,
    /// Bulk quotes for one coin or one pair
    BulkRates {
        #[arg(long)]
        deposit: Option<String>,
        #[arg(long)]
        destination: Option<String>,
    },
    /// Bulk quotes for several pairs, given as DEPOSIT:DESTINATION
    BulkRatesMulti {
        #[arg(required = true, value_parser = parse_pair)]
        pairs: Vec<TradePair>,
    },
}

/// Parse `btc:eth` into a pair
pub fn parse_pair(raw: &str) -> Result<TradePair, String> {
    match raw.split_once(':') {
        Some((deposit, destination)) if !deposit.is_empty() && !destination.is_empty() => {
            Ok(TradePair::new(deposit, destination))
        }
        _ => Err(format!("expected DEPOSIT:DESTINATION, got `{raw}`")),
    }
}

fn wallet(address: String, tag: Option<String>) -> WalletAddress {
    let wallet = WalletAddress::new(address);
    match tag {
        Some(tag) => wallet.with_tag(tag),
        None => wallet,
    }
}

fn to_json<T: Serialize>(value: T) -> coinswitch_adapter::Result<Value> {
    Ok(serde_json::to_value(value)?)
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Coins => "coins",
            Command::Pairs { .. } => "pairs",
            Command::Rate { .. } => "rate",
            Command::CreateOrder { .. } => "create-order",
            Command::OrderStatus { .. } => "order-status",
            Command::Orders => "orders",
            Command::BulkRates { .. } => "bulk-rates",
            Command::BulkRatesMulti { .. } => "bulk-rates-multi",
        }
    }

    /// Run the command against the API
    pub async fn run(self, client: &CoinswitchClient) -> coinswitch_adapter::Result<Value> {
        match self {
            Command::Coins => to_json(client.list_coins().await?),
            Command::Pairs {
                deposit,
                destination,
            } => {
                let query = PairQuery {
                    deposit_coin: deposit,
                    destination_coin: destination,
                };
                to_json(client.list_exchange_pairs(&query).await?)
            }
            Command::Rate {
                deposit,
                destination,
                amount,
            } => {
                let request = RateRequest {
                    deposit_coin: deposit,
                    destination_coin: destination,
                    deposit_coin_amount: amount,
                };
                to_json(client.get_exchange_rate(&request).await?)
            }
            Command::CreateOrder {
                deposit,
                destination,
                deposit_amount,
                destination_amount,
                address,
                tag,
                refund_address,
                refund_tag,
                callback_url,
            } => {
                let request = CreateOrderRequest {
                    deposit_coin: deposit,
                    destination_coin: destination,
                    deposit_coin_amount: deposit_amount,
                    destination_coin_amount: destination_amount,
                    destination_address: wallet(address, tag),
                    refund_address: refund_address.map(|address| wallet(address, refund_tag)),
                    callback_url,
                };
                let order = client.create_order(&request).await?;
                info!(order_id = %order.order_id, "order created");
                to_json(order)
            }
            Command::OrderStatus { order_id } => to_json(client.get_order_status(&order_id).await?),
            Command::Orders => to_json(client.list_all_orders().await?),
            Command::BulkRates {
                deposit,
                destination,
            } => {
                let query = PairQuery {
                    deposit_coin: deposit,
                    destination_coin: destination,
                };
                to_json(client.get_bulk_rates(&query).await?)
            }
            Command::BulkRatesMulti { pairs } => {
                let rates = client.get_bulk_rates_for_multi_pairs(&pairs).await?;
                if rates.len() < pairs.len() {
                    info!(
                        requested = pairs.len(),
                        quoted = rates.len(),
                        "some pairs were not quoted"
                    );
                }
                to_json(rates)
            }
        }
    }
}

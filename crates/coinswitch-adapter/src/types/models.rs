/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::OrderStage;
use super::serde_helpers;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub symbol: String,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub is_fiat: bool,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub parent_code: Option<String>,
    #[serde(default)]
    pub address_additional_data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPair {
    pub deposit_coin: String,
    pub destination_coin: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAddress {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl WalletAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            tag: None,
        }
    }

    /// Attach a memo/destination tag for coins that need one
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub rate: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub miner_fee: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub limit_min_deposit_coin: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub limit_max_deposit_coin: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub limit_min_destination_coin: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub limit_max_destination_coin: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub deposit_coin_amount: Option<Decimal>,
}

/// Rate quote bound to the pair it was computed for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRatePair {
    pub deposit_coin: String,
    pub destination_coin: String,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub rate: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub miner_fee: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub limit_min_deposit_coin: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub limit_max_deposit_coin: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub limit_min_destination_coin: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub limit_max_destination_coin: Decimal,
}

impl BulkRatePair {
    /// True when this quote is for the given deposit/destination pair
    pub fn is_pair(&self, deposit_coin: &str, destination_coin: &str) -> bool {
        self.deposit_coin.eq_ignore_ascii_case(deposit_coin)
            && self.destination_coin.eq_ignore_ascii_case(destination_coin)
    }
}

/// Result of order creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub exchange_address: WalletAddress,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub expected_deposit_coin_amount: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub expected_destination_coin_amount: Decimal,
}

/// Full lifecycle record of one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    pub order_id: String,
    pub exchange_address: WalletAddress,
    pub destination_address: WalletAddress,
    /// Epoch milliseconds
    pub created_at: i64,
    pub status: OrderStage,
    #[serde(default)]
    pub input_transaction_hash: Option<String>,
    #[serde(default)]
    pub output_transaction_hash: Option<String>,
    pub deposit_coin: String,
    pub destination_coin: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub deposit_coin_amount: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub destination_coin_amount: Option<Decimal>,
    #[serde(default)]
    pub valid_till: Option<String>,
    #[serde(default)]
    pub user_reference_id: Option<String>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub expected_destination_coin_amount: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub expected_deposit_coin_amount: Decimal,
}

/// One entry of the order history, an [`OrderStatus`] plus fee and callback data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListItem {
    #[serde(flatten)]
    pub order: OrderStatus,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub client_fee: Option<Decimal>,
    #[serde(default)]
    pub callback_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllOrders {
    pub count: u64,
    pub items: Vec<OrderListItem>,
    pub total_count: u64,
    pub is_prev: bool,
    pub is_next: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_status_json() -> serde_json::Value {
        json!({
            "orderId": "33333333-6c9e-4c53-9a6d-55e089aebd04",
            "exchangeAddress": { "address": "3FZbgi29cpjq2GjdwV8eyHuJJnkLtktZc5", "tag": null },
            "destinationAddress": { "address": "0xcc1bf6b0625bc23895a47f4991fdb7862e34a563" },
            "createdAt": 1_543_912_131_000_i64,
            "status": "confirming",
            "inputTransactionHash": "b6f2f2b2",
            "outputTransactionHash": null,
            "depositCoin": "btc",
            "destinationCoin": "eth",
            "depositCoinAmount": 0.03,
            "destinationCoinAmount": null,
            "validTill": "2018-12-04T08:38:51.000Z",
            "userReferenceId": "ref-1",
            "expectedDepositCoinAmount": 0.03,
            "expectedDestinationCoinAmount": 1.15
        })
    }

    #[test]
    fn order_status_deserializes_nullable_fields() {
        let status: OrderStatus = serde_json::from_value(order_status_json()).unwrap();

        assert_eq!(status.status, OrderStage::Confirming);
        assert_eq!(status.exchange_address.tag, None);
        assert_eq!(status.output_transaction_hash, None);
        assert_eq!(status.deposit_coin_amount, Some(Decimal::new(3, 2)));
        assert_eq!(status.destination_coin_amount, None);
        assert_eq!(status.expected_destination_coin_amount, Decimal::new(115, 2));
    }

    #[test]
    fn order_list_item_flattens_status_fields() {
        let mut value = order_status_json();
        value["clientFee"] = json!(0.002);
        value["callbackUrl"] = json!("https://example.com/callback");

        let item: OrderListItem = serde_json::from_value(value).unwrap();

        assert_eq!(item.order.order_id, "33333333-6c9e-4c53-9a6d-55e089aebd04");
        assert_eq!(item.client_fee, Some(Decimal::new(2, 3)));
        assert_eq!(item.callback_url.as_deref(), Some("https://example.com/callback"));
    }

    #[test]
    fn coin_tolerates_missing_optional_fields() {
        let coin: Coin = serde_json::from_value(json!({
            "symbol": "btc",
            "name": "Bitcoin",
            "isActive": true
        }))
        .unwrap();

        assert!(!coin.is_fiat);
        assert_eq!(coin.parent_code, None);
    }

    #[test]
    fn wallet_address_omits_missing_tag() {
        let value = serde_json::to_value(WalletAddress::new("addr")).unwrap();
        assert_eq!(value, json!({ "address": "addr" }));

        let value = serde_json::to_value(WalletAddress::new("addr").with_tag("42")).unwrap();
        assert_eq!(value, json!({ "address": "addr", "tag": "42" }));
    }

    #[test]
    fn bulk_rate_pair_matches_case_insensitively() {
        let pair: BulkRatePair = serde_json::from_value(json!({
            "depositCoin": "btc",
            "destinationCoin": "eth",
            "rate": 32.5,
            "minerFee": 0.01,
            "limitMinDepositCoin": 0.002,
            "limitMaxDepositCoin": 2,
            "limitMinDestinationCoin": 0.065,
            "limitMaxDestinationCoin": 65
        }))
        .unwrap();

        assert!(pair.is_pair("BTC", "eth"));
        assert!(!pair.is_pair("eth", "btc"));
        assert_eq!(pair.limit_max_deposit_coin, Decimal::from(2));
    }
}

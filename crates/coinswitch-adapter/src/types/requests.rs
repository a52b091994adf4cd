/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::WalletAddress;
use super::serde_helpers;
use crate::http::error::ValidationError;

fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Filter for pair and bulk rate lookups, at least one side is required
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_coin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_coin: Option<String>,
}

impl PairQuery {
    pub fn deposit(coin: impl Into<String>) -> Self {
        Self {
            deposit_coin: Some(coin.into()),
            destination_coin: None,
        }
    }

    pub fn destination(coin: impl Into<String>) -> Self {
        Self {
            deposit_coin: None,
            destination_coin: Some(coin.into()),
        }
    }

    pub fn pair(deposit_coin: impl Into<String>, destination_coin: impl Into<String>) -> Self {
        Self {
            deposit_coin: Some(deposit_coin.into()),
            destination_coin: Some(destination_coin.into()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_missing(&self.deposit_coin) && is_missing(&self.destination_coin) {
            return Err(ValidationError::MissingPairCoin);
        }
        Ok(())
    }
}

/// Fully specified deposit/destination pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradePair {
    pub deposit_coin: String,
    pub destination_coin: String,
}

impl TradePair {
    pub fn new(deposit_coin: impl Into<String>, destination_coin: impl Into<String>) -> Self {
        Self {
            deposit_coin: deposit_coin.into(),
            destination_coin: destination_coin.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    pub deposit_coin: String,
    pub destination_coin: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub deposit_coin_amount: Option<Decimal>,
}

impl RateRequest {
    pub fn new(deposit_coin: impl Into<String>, destination_coin: impl Into<String>) -> Self {
        Self {
            deposit_coin: deposit_coin.into(),
            destination_coin: destination_coin.into(),
            deposit_coin_amount: None,
        }
    }

    pub fn with_deposit_amount(mut self, amount: Decimal) -> Self {
        self.deposit_coin_amount = Some(amount);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.deposit_coin == self.destination_coin {
            return Err(ValidationError::SameCoin);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub deposit_coin: String,
    pub destination_coin: String,
    /// Amount of deposit coin that will be sent in
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub deposit_coin_amount: Option<Decimal>,
    /// Amount of destination coin that should come out
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_coin_amount: Option<Decimal>,
    /// Where the destination coin is sent
    pub destination_address: WalletAddress,
    /// Where the deposit coin goes back if the order cannot complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_address: Option<WalletAddress>,
    /// Receives a POST with the full order on every stage change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl CreateOrderRequest {
    pub fn new(
        deposit_coin: impl Into<String>,
        destination_coin: impl Into<String>,
        destination_address: WalletAddress,
    ) -> Self {
        Self {
            deposit_coin: deposit_coin.into(),
            destination_coin: destination_coin.into(),
            deposit_coin_amount: None,
            destination_coin_amount: None,
            destination_address,
            refund_address: None,
            callback_url: None,
        }
    }

    pub fn with_deposit_amount(mut self, amount: Decimal) -> Self {
        self.deposit_coin_amount = Some(amount);
        self
    }

    pub fn with_destination_amount(mut self, amount: Decimal) -> Self {
        self.destination_coin_amount = Some(amount);
        self
    }

    pub fn with_refund_address(mut self, address: WalletAddress) -> Self {
        self.refund_address = Some(address);
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.deposit_coin_amount.is_some() && self.destination_coin_amount.is_some() {
            return Err(ValidationError::AmbiguousAmount);
        }
        Ok(())
    }
}

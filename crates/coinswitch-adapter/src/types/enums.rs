/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of an order, owned by the remote exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStage {
    NoDeposit,
    Confirming,
    Exchanging,
    Sending,
    Complete,
    Failed,
    Refunded,
    Timeout,
}

impl OrderStage {
    pub const ALL: [OrderStage; 8] = [
        OrderStage::NoDeposit,
        OrderStage::Confirming,
        OrderStage::Exchanging,
        OrderStage::Sending,
        OrderStage::Complete,
        OrderStage::Failed,
        OrderStage::Refunded,
        OrderStage::Timeout,
    ];

    /// Wire name of the stage
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStage::NoDeposit => "no_deposit",
            OrderStage::Confirming => "confirming",
            OrderStage::Exchanging => "exchanging",
            OrderStage::Sending => "sending",
            OrderStage::Complete => "complete",
            OrderStage::Failed => "failed",
            OrderStage::Refunded => "refunded",
            OrderStage::Timeout => "timeout",
        }
    }

    /// No further transitions are expected from this stage
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStage::Complete | OrderStage::Failed | OrderStage::Refunded | OrderStage::Timeout
        )
    }
}

impl fmt::Display for OrderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

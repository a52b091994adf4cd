/*
[INPUT]:  Raw JSON response bodies
[OUTPUT]: Decoded envelope, unwrapped into payload or API error
[POS]:    Data layer - response envelope shared by every endpoint
[UPDATE]: When the envelope format changes
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::error::{CoinswitchError, Result};

const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// Wrapper every CoinSwitch response comes in
///
/// Errors are reported inside 2xx bodies, so `success` is the only
/// reliable signal. A missing flag counts as failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T = Value> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub code: String,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Human readable failure text: `error`, then `msg`
    pub fn message(&self) -> &str {
        [self.error.as_deref(), self.msg.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .unwrap_or(UNKNOWN_API_ERROR)
    }

    /// Unwrap the payload or convert the failure into [`CoinswitchError::Api`]
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(CoinswitchError::Api {
                message: self.message().to_string(),
                code: self.code,
            });
        }

        self.data.ok_or_else(|| {
            CoinswitchError::InvalidResponse(format!(
                "successful response without data (code {})",
                self.code
            ))
        })
    }
}

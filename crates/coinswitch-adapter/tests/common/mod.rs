/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for coinswitch-adapter tests

use coinswitch_adapter::{ClientConfig, CoinswitchClient, Credentials, OrderStage};
use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};

/// Key of the sandbox account, the API answers it with canned data
pub const SANDBOX_API_KEY: &str = "t41E6v16mG6xqOUK74E2F7Py6UVng4K6n1pO3Jig";

/// Sandbox order ids, each pinned to one lifecycle stage
pub const SANDBOX_ORDER_IDS: [(OrderStage, &str); 8] = [
    (OrderStage::NoDeposit, "22222222-6c9e-4c53-9a6d-55e089aebd04"),
    (OrderStage::Confirming, "33333333-6c9e-4c53-9a6d-55e089aebd04"),
    (OrderStage::Exchanging, "44444444-6c9e-4c53-9a6d-55e089aebd04"),
    (OrderStage::Sending, "55555555-6c9e-4c53-9a6d-55e089aebd04"),
    (OrderStage::Complete, "66666666-6c9e-4c53-9a6d-55e089aebd04"),
    (OrderStage::Failed, "77777777-6c9e-4c53-9a6d-55e089aebd04"),
    (OrderStage::Refunded, "88888888-6c9e-4c53-9a6d-55e089aebd04"),
    (OrderStage::Timeout, "11111111-6c9e-4c53-9a6d-55e089aebd04"),
];

/// Sandbox order id for a stage
#[allow(dead_code)]
pub fn sandbox_order_id(stage: OrderStage) -> &'static str {
    SANDBOX_ORDER_IDS
        .iter()
        .find(|(s, _)| *s == stage)
        .map(|(_, id)| *id)
        .expect("every stage has a sandbox order id")
}

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with sandbox credentials
pub fn sandbox_client(server: &MockServer) -> CoinswitchClient {
    CoinswitchClient::with_config_and_base_url(
        Credentials::new(SANDBOX_API_KEY).with_user_ip("1.1.1.1"),
        ClientConfig::default(),
        &server.uri(),
    )
    .expect("client init")
}

/// 200 response carrying a successful envelope
pub fn success(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "code": "OK",
        "data": data
    }))
}

/// Failure envelope with the given HTTP status
#[allow(dead_code)]
pub fn failure(
    status: u16,
    code: &str,
    error: Option<&str>,
    msg: Option<&str>,
) -> ResponseTemplate {
    let mut body = json!({
        "success": false,
        "code": code,
        "data": null
    });
    if let Some(error) = error {
        body["error"] = json!(error);
    }
    if let Some(msg) = msg {
        body["msg"] = json!(msg);
    }
    ResponseTemplate::new(status).set_body_json(body)
}

/// Bulk rate quote for a pair
#[allow(dead_code)]
pub fn bulk_rate(deposit_coin: &str, destination_coin: &str) -> Value {
    json!({
        "depositCoin": deposit_coin,
        "destinationCoin": destination_coin,
        "rate": 31.9,
        "minerFee": 0.005,
        "limitMinDepositCoin": 0.002,
        "limitMaxDepositCoin": 2,
        "limitMinDestinationCoin": 0.06,
        "limitMaxDestinationCoin": 63.8
    })
}

/// Order status record as the sandbox returns it
#[allow(dead_code)]
pub fn order_status(order_id: &str, stage: OrderStage) -> Value {
    json!({
        "orderId": order_id,
        "exchangeAddress": { "address": "3FZbgi29cpjq2GjdwV8eyHuJJnkLtktZc5", "tag": null },
        "destinationAddress": {
            "address": "0xcc1bf6b0625bc23895a47f4991fdb7862e34a563",
            "tag": null
        },
        "createdAt": 1_543_912_131_000_i64,
        "status": stage.as_str(),
        "inputTransactionHash": null,
        "outputTransactionHash": null,
        "depositCoin": "btc",
        "destinationCoin": "eth",
        "depositCoinAmount": null,
        "destinationCoinAmount": null,
        "validTill": "2018-12-04T08:38:51.000Z",
        "userReferenceId": "sandbox",
        "expectedDepositCoinAmount": 0.03,
        "expectedDestinationCoinAmount": 0.96
    })
}

/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public CoinSwitch adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    CoinswitchClient,
    CoinswitchError,
    Credentials,
    DEFAULT_USER_IP,
    Result,
    ValidationError,
    default_base_url,
};

// Re-export all types
pub use types::*;

/*
[INPUT]:  YAML configuration file and command-line/env overrides
[OUTPUT]: Resolved credentials and client configuration
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, Result};
use coinswitch_adapter::{ClientConfig, CoinswitchClient, Credentials, default_base_url};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings for talking to the CoinSwitch API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// API key issued by CoinSwitch
    #[serde(default)]
    pub api_key: Option<String>,
    /// IP of the end user the requests are made for
    #[serde(default)]
    pub user_ip: Option<String>,
    /// Overrides `https://api.coinswitch.co/v2`
    #[serde(default)]
    pub base_url: Option<String>,
    /// Whole-request timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Fields set in `overrides` replace the ones loaded here
    pub fn merge(self, overrides: CliConfig) -> Self {
        Self {
            api_key: overrides.api_key.or(self.api_key),
            user_ip: overrides.user_ip.or(self.user_ip),
            base_url: overrides.base_url.or(self.base_url),
            timeout_secs: overrides.timeout_secs.or(self.timeout_secs),
        }
    }

    pub fn credentials(&self) -> Credentials {
        let credentials = Credentials::new(self.api_key.clone().unwrap_or_default());
        match &self.user_ip {
            Some(ip) => credentials.with_user_ip(ip.clone()),
            None => credentials,
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(default_base_url)
    }

    pub fn build_client(&self) -> Result<CoinswitchClient> {
        CoinswitchClient::with_config_and_base_url(
            self.credentials(),
            self.client_config(),
            &self.base_url(),
        )
        .context(
            "create coinswitch client (set --api-key, COINSWITCH_API_KEY or api_key in config)",
        )
    }
}

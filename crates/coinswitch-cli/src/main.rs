/*
[INPUT]:  CLI arguments, environment, optional YAML configuration file
[OUTPUT]: API payload as pretty JSON on stdout, logs on stderr
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use coinswitch_cli::{CliConfig, Command};

#[derive(Parser, Debug)]
#[command(name = "coinswitch", version, about = "CoinSwitch dynamic exchange API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "api-key", env = "COINSWITCH_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long = "user-ip", env = "COINSWITCH_USER_IP")]
    user_ip: Option<String>,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_ref())?.merge(CliConfig {
        api_key: args.api_key,
        user_ip: args.user_ip,
        base_url: args.base_url,
        timeout_secs: None,
    });
    let client = config.build_client()?;
    debug!(base_url = %client.base_url(), user_ip = client.user_ip(), "client ready");

    let name = args.command.name();
    info!(command = name, "running command");
    let output = args
        .command
        .run(&client)
        .await
        .with_context(|| format!("{name} failed"))?;

    let rendered = serde_json::to_string_pretty(&output).context("render output")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    match path {
        Some(path) => {
            let config = CliConfig::from_file(path).context("load config")?;
            info!(config_path = %path.display(), "configuration loaded");
            Ok(config)
        }
        None => Ok(CliConfig::default()),
    }
}

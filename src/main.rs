use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use newsboard::application::{ApiKey, ServerConfig, serve};
use newsboard::infrastructure::news_api::NewsApiClient;
use newsboard::presentation::cli::{Cli, Commands, ServeCommand, news};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    // The key is required for every command; fail before doing anything else.
    let api_key = ApiKey::from_setting(cli.api_key)?;
    let timeout = Duration::from_secs(cli.request_timeout);

    match cli.command {
        Commands::Serve(cmd) => run_server(cmd, &cli.api_url, api_key, timeout).await,
        Commands::Headlines(cmd) => {
            let client = NewsApiClient::from_base_url(&cli.api_url, api_key, timeout)?;
            news::headlines(&client, cmd).await
        }
        Commands::Search(cmd) => {
            let client = NewsApiClient::from_base_url(&cli.api_url, api_key, timeout)?;
            news::search(&client, cmd).await
        }
    }
}

async fn run_server(
    command: ServeCommand,
    api_url: &str,
    api_key: ApiKey,
    request_timeout: Duration,
) -> Result<()> {
    let api_url = url::Url::parse(api_url)
        .map_err(|err| anyhow::anyhow!("invalid NEWSBOARD_API_URL {api_url}: {err}"))?;

    let config = ServerConfig {
        bind_address: command.bind_address,
        api_url,
        api_key,
        request_timeout,
        theme: command.theme,
        refresh_interval: Duration::from_secs(command.refresh_interval),
    };

    serve(config).await
}

/// Logs go to stderr so the JSON printed by CLI commands stays clean.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

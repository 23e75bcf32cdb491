pub mod news;

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use crate::domain::query::SelectOption;
use crate::infrastructure::news_api::NEWS_API_URL;
use crate::presentation::web::views::Theme;
use news::{HeadlinesCommand, SearchCommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Browse news headlines and search results", long_about = None)]
pub struct Cli {
    /// News provider API key
    #[arg(long, global = true, env = "NEWSBOARD_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the news provider API
    #[arg(long, global = true, env = "NEWSBOARD_API_URL", default_value = NEWS_API_URL)]
    pub api_url: String,

    /// Provider request timeout in seconds
    #[arg(
        long,
        global = true,
        env = "NEWSBOARD_REQUEST_TIMEOUT",
        default_value_t = 30
    )]
    pub request_timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the dashboard HTTP server
    Serve(ServeCommand),

    /// Print the current top headlines as JSON
    Headlines(HeadlinesCommand),

    /// Search recent articles and print them as JSON
    Search(SearchCommand),
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(long, env = "NEWSBOARD_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,

    #[arg(long, env = "NEWSBOARD_THEME", value_enum, default_value_t = Theme::Backdrop)]
    pub theme: Theme,

    /// Seconds between automatic page reloads
    #[arg(
        long,
        env = "NEWSBOARD_REFRESH_INTERVAL",
        default_value_t = 300,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub refresh_interval: u64,
}

/// Parse a selector value by its provider code (e.g. `de`, `popularity`).
pub(crate) fn parse_option<T: SelectOption>(value: &str) -> Result<T, String> {
    T::from_query(value).ok_or_else(|| {
        let accepted: Vec<_> = T::ALL.iter().map(|o| o.query_value()).collect();
        format!("expected one of: {}", accepted.join(", "))
    })
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

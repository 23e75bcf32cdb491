use anyhow::Result;
use clap::Args;

use super::{parse_option, print_json};
use crate::domain::articles::NewsResponse;
use crate::domain::query::{
    DEFAULT_HEADLINES_PAGE_SIZE, DEFAULT_SEARCH_PAGE_SIZE, HeadlinesQuery, Language, SearchQuery,
    SortBy,
};
use crate::infrastructure::news_api::NewsSource;
use crate::presentation::web::views::ArticleCardView;

#[derive(Debug, Args)]
pub struct HeadlinesCommand {
    /// Restrict to a provider category (e.g. business, science)
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, default_value_t = DEFAULT_HEADLINES_PAGE_SIZE)]
    pub page_size: u32,
}

#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Free-text query; omit to list everything in the window
    pub query: Option<String>,

    #[arg(long, default_value = "en", value_parser = parse_option::<Language>)]
    pub language: Language,

    #[arg(long, default_value = "publishedAt", value_parser = parse_option::<SortBy>)]
    pub sort_by: SortBy,

    #[arg(long, default_value_t = DEFAULT_SEARCH_PAGE_SIZE)]
    pub page_size: u32,
}

pub async fn headlines(source: &dyn NewsSource, command: HeadlinesCommand) -> Result<()> {
    let query = HeadlinesQuery::default()
        .with_category(command.category)
        .with_page_size(command.page_size);
    let response = source.fetch_top_headlines(&query).await?;
    print_json(&card_views(response))
}

pub async fn search(source: &dyn NewsSource, command: SearchCommand) -> Result<()> {
    let query = SearchQuery::new(command.query, command.language, command.sort_by)
        .with_page_size(command.page_size);
    let response = source.fetch_news(&query).await?;
    print_json(&card_views(response))
}

fn card_views(response: NewsResponse) -> Vec<ArticleCardView> {
    if let Some(summary) = response.error_summary() {
        tracing::warn!(error = %summary, "news provider reported an error");
    }
    response
        .into_articles()
        .unwrap_or_default()
        .into_iter()
        .map(ArticleCardView::from_domain)
        .collect()
}

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::errors::AppError;
use crate::domain::articles::{Article, NewsResponse};
use crate::domain::dashboard::{
    Dashboard, DashboardMode, DashboardSection, DashboardState, SectionKind,
};
use crate::domain::query::SelectOption;
use crate::infrastructure::news_api::NewsSource;

#[derive(Clone)]
pub struct DashboardService {
    news: Arc<dyn NewsSource>,
}

impl DashboardService {
    pub fn new(news: Arc<dyn NewsSource>) -> Self {
        Self { news }
    }

    pub async fn render(&self, state: &DashboardState) -> Result<Dashboard, AppError> {
        render_dashboard(self.news.as_ref(), state).await
    }
}

/// One render pass: choose the mode from the sidebar input, call the
/// provider, and shape the results into sections. Nothing is kept between
/// calls.
pub async fn render_dashboard(
    news: &dyn NewsSource,
    state: &DashboardState,
) -> Result<Dashboard, AppError> {
    let sections = match state.mode() {
        DashboardMode::Search(text) => {
            let response = news.fetch_news(&state.search_query(text)).await?;
            // No `articles` key means no results section at all.
            articles_or_log(response, SectionKind::SearchResults)
                .map(|articles| {
                    DashboardSection::from_articles(SectionKind::SearchResults, Some(articles))
                })
                .into_iter()
                .collect()
        }
        DashboardMode::Home => {
            let breaking_query = state.breaking_news_query();
            let trending_query = state.trending_query();
            let (breaking, trending) = tokio::try_join!(
                news.fetch_top_headlines(&breaking_query),
                news.fetch_news(&trending_query),
            )?;

            vec![
                DashboardSection::from_articles(
                    SectionKind::BreakingNews,
                    articles_or_log(breaking, SectionKind::BreakingNews),
                ),
                DashboardSection::from_articles(
                    SectionKind::Trending,
                    articles_or_log(trending, SectionKind::Trending),
                ),
            ]
        }
    };

    let dashboard = Dashboard {
        search_text: state.search_text.clone(),
        sections,
    };
    info!(
        language = state.language.query_value(),
        sections = dashboard.sections.len(),
        articles = dashboard.article_count(),
        "rendered dashboard"
    );
    Ok(dashboard)
}

fn articles_or_log(response: NewsResponse, section: SectionKind) -> Option<Vec<Article>> {
    if let Some(summary) = response.error_summary() {
        warn!(section = ?section, error = %summary, "news provider reported an error");
    }
    response.into_articles()
}

use super::articles::Article;
use super::query::{HeadlinesQuery, Language, SearchQuery, SelectOption, SortBy};

pub const BREAKING_NEWS_LIMIT: usize = 6;
pub const TRENDING_QUERY: &str = "trending";
pub const TRENDING_LIMIT: usize = 4;

/// Sidebar input for one render pass.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DashboardState {
    pub search_text: String,
    pub language: Language,
    pub sort_by: SortBy,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            language: Language::default(),
            sort_by: SortBy::default(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DashboardMode {
    Search(String),
    Home,
}

impl DashboardState {
    pub fn from_query(
        search_text: Option<&str>,
        language: Option<&str>,
        sort_by: Option<&str>,
    ) -> Self {
        Self {
            search_text: search_text.unwrap_or_default().to_string(),
            language: Language::from_query_or_default(language),
            sort_by: SortBy::from_query_or_default(sort_by),
        }
    }

    /// Any non-empty text selects search mode and is sent as typed.
    pub fn mode(&self) -> DashboardMode {
        if self.search_text.is_empty() {
            DashboardMode::Home
        } else {
            DashboardMode::Search(self.search_text.clone())
        }
    }

    pub fn search_query(&self, text: String) -> SearchQuery {
        SearchQuery::new(Some(text), self.language, self.sort_by)
    }

    pub fn breaking_news_query(&self) -> HeadlinesQuery {
        HeadlinesQuery::default().with_page_size(BREAKING_NEWS_LIMIT as u32)
    }

    /// Trending always sorts by popularity but follows the selected language.
    pub fn trending_query(&self) -> SearchQuery {
        SearchQuery::new(
            Some(TRENDING_QUERY.to_string()),
            self.language,
            SortBy::Popularity,
        )
        .with_page_size(TRENDING_LIMIT as u32)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SectionKind {
    SearchResults,
    BreakingNews,
    Trending,
}

impl SectionKind {
    /// How many provider articles the section shows; `None` shows all.
    pub fn limit(self) -> Option<usize> {
        match self {
            SectionKind::SearchResults => None,
            SectionKind::BreakingNews => Some(BREAKING_NEWS_LIMIT),
            SectionKind::Trending => Some(TRENDING_LIMIT),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSection {
    pub kind: SectionKind,
    pub articles: Vec<Article>,
}

impl DashboardSection {
    /// Keep at most the kind's limit, in provider order. `None` (no
    /// `articles` key) yields an empty section.
    pub fn from_articles(kind: SectionKind, articles: Option<Vec<Article>>) -> Self {
        let articles = articles
            .unwrap_or_default()
            .into_iter()
            .take(kind.limit().unwrap_or(usize::MAX))
            .collect();
        Self { kind, articles }
    }
}

/// The outcome of one render pass, before any presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub search_text: String,
    pub sections: Vec<DashboardSection>,
}

impl Dashboard {
    pub fn article_count(&self) -> usize {
        self.sections.iter().map(|s| s.articles.len()).sum()
    }
}

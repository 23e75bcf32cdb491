use chrono::{Days, NaiveDate};

/// A fixed set of choices offered by a sidebar selector.
pub trait SelectOption: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn default() -> Self;
    fn query_value(self) -> &'static str;
    fn display_label(self) -> &'static str;

    fn from_query(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.query_value() == value)
    }

    /// Parse an optional query-string value, falling back to the default
    /// for absent or unrecognised input.
    fn from_query_or_default(value: Option<&str>) -> Self {
        value.and_then(Self::from_query).unwrap_or_else(Self::default)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Language {
    English,
    Arabic,
    German,
    Spanish,
    French,
    Italian,
    Portuguese,
    Russian,
}

impl SelectOption for Language {
    const ALL: &'static [Self] = &[
        Language::English,
        Language::Arabic,
        Language::German,
        Language::Spanish,
        Language::French,
        Language::Italian,
        Language::Portuguese,
        Language::Russian,
    ];

    fn default() -> Self {
        Language::English
    }

    fn query_value(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
            Language::German => "de",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
        }
    }

    fn display_label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "Arabic",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SortBy {
    PublishedAt,
    Relevancy,
    Popularity,
}

impl SelectOption for SortBy {
    const ALL: &'static [Self] = &[SortBy::PublishedAt, SortBy::Relevancy, SortBy::Popularity];

    fn default() -> Self {
        SortBy::PublishedAt
    }

    fn query_value(self) -> &'static str {
        match self {
            SortBy::PublishedAt => "publishedAt",
            SortBy::Relevancy => "relevancy",
            SortBy::Popularity => "popularity",
        }
    }

    fn display_label(self) -> &'static str {
        match self {
            SortBy::PublishedAt => "Most Recent",
            SortBy::Relevancy => "Most Relevant",
            SortBy::Popularity => "Most Popular",
        }
    }
}

pub const DEFAULT_COUNTRY: &str = "us";
pub const DEFAULT_HEADLINES_PAGE_SIZE: u32 = 6;
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 100;

/// How far back the search endpoint looks.
pub const SEARCH_WINDOW_DAYS: u64 = 7;

pub type QueryParams = Vec<(&'static str, String)>;

/// Parameters for the top-headlines endpoint. The endpoint takes no
/// language, so none is sent.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HeadlinesQuery {
    pub country: String,
    pub category: Option<String>,
    pub page_size: u32,
}

impl Default for HeadlinesQuery {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            category: None,
            page_size: DEFAULT_HEADLINES_PAGE_SIZE,
        }
    }
}

impl HeadlinesQuery {
    pub fn with_page_size(self, page_size: u32) -> Self {
        Self { page_size, ..self }
    }

    pub fn with_category(self, category: Option<String>) -> Self {
        Self {
            category: category.filter(|c| !c.trim().is_empty()),
            ..self
        }
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = vec![
            ("country", self.country.clone()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        params
    }
}

/// Parameters for the keyword search endpoint.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub language: Language,
    pub sort_by: SortBy,
    pub page_size: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: None,
            language: Language::default(),
            sort_by: SortBy::default(),
            page_size: DEFAULT_SEARCH_PAGE_SIZE,
        }
    }
}

impl SearchQuery {
    pub fn new(query: Option<String>, language: Language, sort_by: SortBy) -> Self {
        Self {
            query,
            language,
            sort_by,
            ..Self::default()
        }
    }

    pub fn with_page_size(self, page_size: u32) -> Self {
        Self { page_size, ..self }
    }

    /// Assemble the query string. `today` is the caller's current calendar
    /// date; the search window is derived from it on every call.
    pub fn to_params(&self, today: NaiveDate) -> QueryParams {
        let mut params = vec![
            ("language", self.language.query_value().to_string()),
            ("from", from_date(today)),
            ("sortBy", self.sort_by.query_value().to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            params.push(("q", query.to_string()));
        }
        params
    }
}

/// Start of the search window: `today` minus [`SEARCH_WINDOW_DAYS`], as
/// `YYYY-MM-DD`.
pub fn from_date(today: NaiveDate) -> String {
    today
        .checked_sub_days(Days::new(SEARCH_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN)
        .format("%Y-%m-%d")
        .to_string()
}

use serde::Serialize;
use url::Url;

use crate::domain::articles::Article;
use crate::domain::formatting::{
    NO_DESCRIPTION, PLACEHOLDER_IMAGE_URL, UNKNOWN_SOURCE, display_date,
};

/// Link target used when a provider URL is not a web address.
pub const INERT_LINK: &str = "#";

/// Display fields for one article, with every default already applied.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ArticleCardView {
    pub title: String,
    pub url: String,
    pub image_url: Option<String>,
    pub source_name: String,
    pub published_date: String,
    pub description: String,
}

impl ArticleCardView {
    pub fn from_domain(article: Article) -> Self {
        let source_name = article
            .source_name()
            .unwrap_or(UNKNOWN_SOURCE)
            .to_string();
        let published_date = display_date(article.published_at.as_deref());

        Self {
            title: article.title,
            url: web_url(&article.url).unwrap_or_else(|| INERT_LINK.to_string()),
            image_url: article.url_to_image.as_deref().and_then(web_url),
            source_name,
            published_date,
            description: article
                .description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }

    /// Image for card layouts, which always show one.
    pub fn image_src(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    pub fn placeholder_src(&self) -> &'static str {
        PLACEHOLDER_IMAGE_URL
    }
}

/// Provider URLs reach `href`/`src` attributes; only `http` and `https`
/// are let through.
fn web_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let parsed = Url::parse(raw).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| raw.to_string())
}

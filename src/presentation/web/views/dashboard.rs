use serde::Serialize;

use super::ArticleCardView;
use crate::domain::dashboard::{DashboardSection, SectionKind};
use crate::domain::query::SelectOption;

pub const SEARCH_RESULTS_HEADING: &str = "Search Results";
pub const BREAKING_NEWS_HEADING: &str = "Breaking News";
pub const TRENDING_HEADING: &str = "Trending Stories";

/// Page styling. `Backdrop` draws the cards over a fixed photograph;
/// `Plain` keeps the default background.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Backdrop,
    Plain,
}

impl Theme {
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Backdrop => "theme-backdrop",
            Theme::Plain => "theme-plain",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionLayout {
    /// Image beside text in a dark card; always shows an image.
    Cards,
    /// Image column and text column separated by rules; no image when absent.
    Rows,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub heading: &'static str,
    pub layout: SectionLayout,
    pub articles: Vec<ArticleCardView>,
}

impl SectionView {
    pub fn from_domain(section: DashboardSection) -> Self {
        let (heading, layout) = match section.kind {
            SectionKind::SearchResults => (SEARCH_RESULTS_HEADING, SectionLayout::Rows),
            SectionKind::BreakingNews => (BREAKING_NEWS_HEADING, SectionLayout::Cards),
            SectionKind::Trending => (TRENDING_HEADING, SectionLayout::Cards),
        };
        Self {
            heading,
            layout,
            articles: section
                .articles
                .into_iter()
                .map(ArticleCardView::from_domain)
                .collect(),
        }
    }

    pub fn is_cards(&self) -> bool {
        self.layout == SectionLayout::Cards
    }
}

pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl OptionView {
    pub fn all<T: SelectOption>(selected: T) -> Vec<Self> {
        T::ALL
            .iter()
            .map(|&option| Self {
                value: option.query_value(),
                label: option.display_label(),
                selected: option == selected,
            })
            .collect()
    }
}

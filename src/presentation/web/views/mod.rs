mod articles;
mod dashboard;

pub use articles::ArticleCardView;
pub use dashboard::{
    BREAKING_NEWS_HEADING, OptionView, SEARCH_RESULTS_HEADING, SectionLayout, SectionView,
    TRENDING_HEADING, Theme,
};

pub mod articles;
pub mod dashboard;
pub mod formatting;
pub mod query;

// Re-exports
pub use articles::{Article, NewsResponse};
pub use dashboard::{Dashboard, DashboardMode, DashboardSection, DashboardState, SectionKind};
pub use query::{HeadlinesQuery, Language, SearchQuery, SelectOption, SortBy};

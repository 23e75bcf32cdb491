use std::sync::Arc;
use std::time::Duration;

use crate::application::services::DashboardService;
use crate::infrastructure::news_api::NewsSource;
use crate::presentation::web::views::Theme;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Presentation settings that vary between deployments. The news source is
/// passed separately so tests can point it at a mock provider.
pub struct AppStateConfig {
    pub theme: Theme,
    pub refresh_interval: Duration,
}

impl Default for AppStateConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub theme: Theme,
    pub refresh_interval: Duration,
}

impl AppState {
    pub fn new(news: Arc<dyn NewsSource>, config: AppStateConfig) -> Self {
        Self {
            dashboard_service: DashboardService::new(news),
            theme: config.theme,
            refresh_interval: config.refresh_interval,
        }
    }
}

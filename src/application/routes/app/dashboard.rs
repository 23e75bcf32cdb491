use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::errors::AppError;
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::domain::dashboard::DashboardState;
use crate::domain::formatting::format_interval;
use crate::presentation::web::templates::DashboardTemplate;
use crate::presentation::web::views::{OptionView, SectionView};

/// Sidebar inputs as submitted by the search form.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SidebarQuery {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    sort_by: Option<String>,
}

impl SidebarQuery {
    fn into_state(self) -> DashboardState {
        DashboardState::from_query(
            self.q.as_deref(),
            self.language.as_deref(),
            self.sort_by.as_deref(),
        )
    }
}

#[tracing::instrument(skip(state))]
pub(crate) async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<SidebarQuery>,
) -> Result<Response, AppError> {
    let dashboard_state = query.into_state();
    let dashboard = state.dashboard_service.render(&dashboard_state).await?;

    let template = DashboardTemplate {
        version: crate::VERSION,
        theme_class: state.theme.css_class(),
        search_text: dashboard.search_text,
        language_options: OptionView::all(dashboard_state.language),
        sort_options: OptionView::all(dashboard_state.sort_by),
        sections: dashboard
            .sections
            .into_iter()
            .map(SectionView::from_domain)
            .collect(),
        refresh_ms: state.refresh_interval.as_millis(),
        refresh_label: format_interval(state.refresh_interval.as_secs()),
    };

    render_html(template, "dashboard").map(IntoResponse::into_response)
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::infrastructure::news_api::NewsApiError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] NewsApiError),
    #[error("failed to render {label}: {source}")]
    Render {
        label: &'static str,
        #[source]
        source: askama::Error,
    },
}

impl AppError {
    pub fn render(label: &'static str, source: askama::Error) -> Self {
        AppError::Render { label, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            AppError::Upstream(_) => "The news provider could not be reached.",
            AppError::Render { .. } => "Something went wrong while rendering this page.",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        error!(error = %self, status = status.as_u16(), "request failed");
        (status, self.public_message()).into_response()
    }
}

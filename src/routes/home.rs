use std::sync::Arc;

use anyhow::Context;
use axum::response::IntoResponse;
use axum::Extension;
use hyper::StatusCode;
use tera::Tera;

use crate::routes::error_chain_fmt;
use crate::startup::SiteTitle;

// The original sets these before rendering, so they survive a render
// failure. Keep that: success and error responses both carry them.
const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Request-Method", "*"),
    ("Access-Control-Allow-Methods", "OPTIONS, POST, GET"),
    ("Access-Control-Allow-Headers", "*"),
];

#[derive(thiserror::Error)]
pub enum HomeError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for HomeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for HomeError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::UnexpectedError(e) => {
                tracing::error!("\nServer error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    CORS_HEADERS,
                    "Unexpected internal server error.",
                )
                    .into_response()
            }
        }
    }
}

/// GET / - the landing page.
///
/// Every response carries a fixed, wide-open CORS header set, whether the
/// render succeeds or not. Nothing in the request beyond method and path
/// is consulted.
pub async fn home(
    Extension(templates): Extension<Arc<Tera>>,
    Extension(site_title): Extension<SiteTitle>,
) -> Result<impl IntoResponse, HomeError> {
    let mut context = tera::Context::new();
    context.insert("title", &site_title.0);
    let body = templates
        .render("index.html", &context)
        .context("Failed to render the index template")?;

    Ok((
        StatusCode::OK,
        [("Content-Type", "text/html; charset=utf-8")],
        CORS_HEADERS,
        body,
    ))
}

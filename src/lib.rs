rust_i18n::i18n!("locales", fallback = "en");

pub mod answers;
pub mod catalog;
pub mod extractors;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;
pub mod statics;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::{catalog::QuestionCatalog, models::Casino};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<QuestionCatalog>,
    pub casinos: Arc<Vec<Casino>>,
    pub result_limit: usize,
    pub secure_cookies: bool,
}

impl AppState {
    /// Casinos should already carry tags (see `services::content::load_casinos`).
    pub fn new(catalog: QuestionCatalog, casinos: Vec<Casino>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            casinos: Arc::new(casinos),
            result_limit: names::DEFAULT_RESULT_LIMIT,
            secure_cookies: false,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::quiz::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest("/static", statics::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}

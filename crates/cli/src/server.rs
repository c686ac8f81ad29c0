//! HTTP surface: the sitemap route and the shared state it reads.

use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use ouru_site_core::{SITEMAP_CONTENT_TYPE, Site, render_sitemap};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Read-only site configuration handed to every handler.
#[derive(Clone)]
pub struct AppState {
    site: Arc<Site>,
}

impl AppState {
    pub fn new(site: Site) -> Self {
        Self {
            site: Arc::new(site),
        }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/sitemap.xml", get(sitemap_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /sitemap.xml`
async fn sitemap_handler(State(state): State<AppState>) -> Response {
    let site = state.site();
    let xml = render_sitemap(&site.site.url, &site.pages, Utc::now());

    tracing::debug!(pages = site.pages.len(), "rendered sitemap");

    ([(header::CONTENT_TYPE, SITEMAP_CONTENT_TYPE)], xml).into_response()
}

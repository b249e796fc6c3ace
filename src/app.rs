// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers, and router construction.
//!
//! This module is `pub` so that integration tests can build a test router directly
//! without starting the full binary.

use crate::models::site::SiteMetadata;
use crate::models::version::VersionResponse;
use crate::services::robots::{render_robots_txt, robots};
use axum::{
    extract::State,
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `SITE_ROBOTS_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("SITE_ROBOTS_VERSION");

/// Crawlers should revalidate on every fetch so policy changes apply immediately.
const ROBOTS_CACHE_CONTROL: &str = "public, max-age=0, must-revalidate";

/// Shared application state injected into every route handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteMetadata>,
}

impl AppState {
    pub fn new(site: SiteMetadata) -> Self {
        Self {
            site: Arc::new(site),
        }
    }
}

pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        agent: "site-robots".to_string(),
        version: VERSION.to_string(),
    })
}

/// Serve the site's crawl policy. The policy is rebuilt for every request.
pub async fn robots_txt_handler(State(state): State<AppState>) -> impl IntoResponse {
    let policy = robots(&state.site);
    tracing::debug!(
        site_url = %state.site.site_url,
        groups = policy.rules.len(),
        "Serving robots.txt"
    );

    (
        [(CONTENT_TYPE, "text/plain"), (CACHE_CONTROL, ROBOTS_CACHE_CONTROL)],
        render_robots_txt(&policy),
    )
}

/// Build the Axum application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/robots.txt", get(robots_txt_handler))
        .route("/version", get(version_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

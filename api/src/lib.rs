//! Talent Portal
//!
//! Server-rendered showcase of student talent posts, read from a document store.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod handlers;

#[cfg(test)]
mod test_utils;


use app::FeedService;
use domain::ports::PostRepository;

/// Application state shared across all handlers
pub struct AppState<R>
where
    R: PostRepository,
{
    pub feed_service: Arc<FeedService<R>>,
}

impl<R> AppState<R>
where
    R: PostRepository,
{
    pub fn new(feed_service: Arc<FeedService<R>>) -> Self {
        Self { feed_service }
    }
}

impl<R> Clone for AppState<R>
where
    R: PostRepository,
{
    fn clone(&self) -> Self {
        Self {
            feed_service: self.feed_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router: JSON API, rendered pages and shared middleware
pub fn build_router<R>(state: AppState<R>) -> Router
where
    R: PostRepository + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // JSON API (read-only)
        .route("/posts", get(handlers::list_posts::<R>))
        .route("/posts/:id", get(handlers::get_post::<R>))
        // Rendered pages
        .route("/", get(handlers::feed_page::<R>))
        .route("/student/:id", get(handlers::student_page::<R>))
        .fallback(handlers::not_found_page)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Page handlers
//!
//! Server-rendered HTML views of the feed.

use axum::{
    extract::{Path, Query, State},
    http::{header::HeaderName, HeaderMap},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::domain::ports::PostRepository;
use crate::error::PageError;
use crate::feed::{render_feed_page, render_student_page, InteractionMode, Selection};
use crate::AppState;

/// Client hints carrying the viewport width, most specific first
const VIEWPORT_HINTS: [&str; 2] = ["sec-ch-viewport-width", "viewport-width"];

static ACCEPT_CH: HeaderName = HeaderName::from_static("accept-ch");

/// Initial interaction mode from the viewport client hints
fn interaction_mode(headers: &HeaderMap) -> InteractionMode {
    let hint = VIEWPORT_HINTS
        .iter()
        .find_map(|name| headers.get(*name).and_then(|v| v.to_str().ok()));
    InteractionMode::from_viewport_hint(hint)
}

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    /// Post shown in the detail dialog
    pub selected: Option<String>,
}

/// GET /
///
/// The card grid, with the detail dialog open when `?selected=<id>` names a
/// post in the feed.
pub async fn feed_page<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<FeedParams>,
    headers: HeaderMap,
) -> Result<Response, PageError>
where
    R: PostRepository + 'static,
{
    let mode = interaction_mode(&headers);
    let posts = state.feed_service.list_posts().await?;

    let mut selection = Selection::default();
    if let Some(id) = params.selected.as_deref() {
        match posts.iter().find(|p| p.id == id) {
            Some(post) => selection.select(post.clone()),
            None => tracing::debug!(selected = %id, "Selected post is not in the feed"),
        }
    }

    Ok((
        [(ACCEPT_CH.clone(), "Sec-CH-Viewport-Width, Viewport-Width")],
        Html(render_feed_page(&posts, &selection, mode)),
    )
        .into_response())
}

/// GET /student/:id
///
/// Full-page profile for one post.
pub async fn student_page<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError>
where
    R: PostRepository + 'static,
{
    let post = state.feed_service.get_post(&id).await?;

    Ok(Html(render_student_page(&post)))
}

/// Any unknown route
pub async fn not_found_page() -> PageError {
    PageError::NotFound
}

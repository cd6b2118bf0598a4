//! Post API handlers
//!
//! Read-only JSON endpoints over the normalized feed.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::entities::Post;
use crate::domain::ports::PostRepository;
use crate::error::{ApiResponse, AppError};
use crate::AppState;

/// GET /posts
///
/// All posts, newest first.
pub async fn list_posts<R>(
    State(state): State<AppState<R>>,
) -> Result<Json<ApiResponse<Vec<Post>>>, AppError>
where
    R: PostRepository + 'static,
{
    let posts = state
        .feed_service
        .list_posts()
        .await
        .map_err(|e| AppError::from_query(e, "Failed to fetch posts"))?;

    Ok(Json(ApiResponse::ok(posts)))
}

/// GET /posts/:id
///
/// One post. Unknown and malformed ids both yield 404.
pub async fn get_post<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Post>>, AppError>
where
    R: PostRepository + 'static,
{
    let post = state
        .feed_service
        .get_post(&id)
        .await
        .map_err(|e| AppError::from_query(e, "Failed to fetch post"))?;

    Ok(Json(ApiResponse::ok(post)))
}

//! Feed service
//!
//! The query boundary between the store and everything that renders posts.
//! Both operations hand back normalized, display-safe records.

use std::sync::Arc;

use crate::app::normalize::normalize_post;
use crate::domain::entities::{Post, PostId};
use crate::domain::ports::PostRepository;
use crate::error::DomainError;

/// Service for reading the post feed
pub struct FeedService<R>
where
    R: PostRepository,
{
    posts: Arc<R>,
}

impl<R> FeedService<R>
where
    R: PostRepository,
{
    pub fn new(posts: Arc<R>) -> Self {
        Self { posts }
    }

    /// All posts, newest first. Store failures are reported as-is, never retried.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let raw = self.posts.find_all_newest_first().await?;
        tracing::debug!(count = raw.len(), "Fetched posts");

        Ok(raw.iter().map(normalize_post).collect())
    }

    /// A single post by its identifier
    pub async fn get_post(&self, id: &str) -> Result<Post, DomainError> {
        let post_id = PostId::parse(id)
            .ok_or_else(|| DomainError::Validation(format!("Malformed post id: {}", id)))?;

        let raw = self
            .posts
            .find_by_id(&post_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Post {}", post_id)))?;

        Ok(normalize_post(&raw))
    }
}

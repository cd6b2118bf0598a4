//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., MongoDB).

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::domain::entities::PostId;
use crate::error::DomainError;

/// A post exactly as the store holds it. Shape is not guaranteed.
pub type RawPost = Document;

/// Read-only access to stored posts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first; equal timestamps keep insertion order
    async fn find_all_newest_first(&self) -> Result<Vec<RawPost>, DomainError>;

    /// Find a post by ID
    async fn find_by_id(&self, id: &PostId) -> Result<Option<RawPost>, DomainError>;
}

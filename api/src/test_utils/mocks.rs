//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use std::sync::{Arc, RwLock};

use crate::domain::entities::PostId;
use crate::domain::ports::{PostRepository, RawPost};
use crate::error::DomainError;

// ============================================================================
// In-Memory Post Repository
// ============================================================================

/// Keeps documents in insertion order, like a freshly seeded collection
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<Vec<Document>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a stored document for testing
    pub fn with_post(self, doc: Document) -> Self {
        self.posts.write().unwrap().push(doc);
        self
    }
}

/// Sort key matching the store: missing timestamps sort lowest
fn created_millis(doc: &Document) -> i64 {
    match doc.get("createdAt") {
        Some(Bson::DateTime(dt)) => dt.timestamp_millis(),
        _ => i64::MIN,
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all_newest_first(&self) -> Result<Vec<RawPost>, DomainError> {
        let mut posts = self.posts.read().unwrap().clone();
        // Stable sort keeps insertion order for equal timestamps
        posts.sort_by_key(|doc| std::cmp::Reverse(created_millis(doc)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<RawPost>, DomainError> {
        let posts = self.posts.read().unwrap();
        Ok(posts
            .iter()
            .find(|doc| {
                doc.get_object_id("_id")
                    .map(|oid| oid.to_hex() == id.as_str())
                    .unwrap_or(false)
            })
            .cloned())
    }
}

//! MongoDB adapter for PostRepository

use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::FindOptions;

use super::store::MongoStore;
use crate::domain::entities::PostId;
use crate::domain::ports::{PostRepository, RawPost};
use crate::error::DomainError;

/// Newest first; `_id` grows with insertion, so ties keep insertion order
fn newest_first() -> Document {
    doc! { "createdAt": -1, "_id": 1 }
}

/// MongoDB implementation of PostRepository
pub struct MongoPostRepository {
    store: Arc<MongoStore>,
}

impl MongoPostRepository {
    pub fn new(store: Arc<MongoStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn find_all_newest_first(&self) -> Result<Vec<RawPost>, DomainError> {
        let posts = self.store.posts().await?;
        let options = FindOptions::builder().sort(newest_first()).build();

        let cursor = posts.find(doc! {}, options).await?;
        let results: Vec<Document> = cursor.try_collect().await?;

        Ok(results)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<RawPost>, DomainError> {
        let oid = ObjectId::parse_str(id.as_str())
            .map_err(|e| DomainError::Validation(e.to_string()))?;
        let posts = self.store.posts().await?;

        Ok(posts.find_one(doc! { "_id": oid }, None).await?)
    }
}
